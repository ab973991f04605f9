//! # Run Command Module / 运行命令模块
//!
//! This module implements the default command of the harness shell:
//! execute every registered test the filter selects and print the summary.
//!
//! 此模块实现框架外壳的默认命令：
//! 执行过滤器选中的每个已注册测试并打印摘要。

use anyhow::Result;

use crate::cli::HarnessArgs;
use crate::core::execution::Runner;
use crate::core::filter::FilterLists;
use crate::core::models::RunResult;
use crate::reporting::console;

/// Executes the run command with the provided arguments.
///
/// # Arguments / 参数
/// * `args` - The decoded harness arguments
///            解码后的框架参数
///
/// # Returns / 返回
/// The aggregate run result; the caller maps its error count to the
/// process exit status.
/// 聚合的运行结果；调用方将其错误数量映射为进程退出状态。
pub fn execute(args: &HarnessArgs) -> Result<RunResult> {
    let filter = FilterLists::from_comma_lists(args.include.as_deref(), args.ignore.as_deref());

    let runner = Runner::new()
        .with_filter(filter)
        .with_verbosity(args.verbosity)
        .with_log_sink(console::colored_sink);

    let result = runner.run();
    console::print_summary(&result);

    Ok(result)
}
