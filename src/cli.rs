//! # CLI Module / 命令行模块
//!
//! The argument-parsing shell for consumer test binaries. It turns the two
//! optional comma-separated name lists and the verbosity switches into a
//! configured run, and maps the error count to the process exit status.
//! A consumer binary's `main` is one line: the [`harness_main!`] macro.
//!
//! 供使用方测试二进制调用的参数解析外壳。它将两个可选的逗号分隔名称列表
//! 和详细程度开关转换为一次配置好的运行，并把错误数量映射为进程退出状态。
//! 使用方二进制的 `main` 只需一行：[`harness_main!`] 宏。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process::ExitCode;

use crate::core::models::{RunResult, Verbosity};

pub mod commands;

/// Builds the clap command for the harness shell.
pub fn build_cli() -> Command {
    Command::new("micro-harness")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the unit tests registered in this binary")
        .arg(
            Arg::new("include")
                .long("include")
                .help("Comma-separated qualified-name prefixes to run (empty: run everything not ignored)")
                .value_name("NAMES")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("ignore")
                .long("ignore")
                .help("Comma-separated qualified-name prefixes to skip; wins over --include")
                .value_name("NAMES")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-success")
                .long("log-success")
                .help("Also log a line for every passing test")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-durations")
                .long("log-durations")
                .help("Append the elapsed time to every emitted log line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Print the qualified name of every registered test and exit")
                .action(ArgAction::SetTrue),
        )
}

/// The decoded harness arguments.
/// 解码后的框架参数。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessArgs {
    /// Comma-separated include prefixes, if given.
    pub include: Option<String>,
    /// Comma-separated ignore prefixes, if given.
    pub ignore: Option<String>,
    /// The verbosity bitmask assembled from the switches.
    pub verbosity: Verbosity,
    /// List registered tests instead of running them.
    pub list: bool,
}

/// Extracts [`HarnessArgs`] from parsed matches.
pub fn args_from_matches(matches: &ArgMatches) -> HarnessArgs {
    let mut verbosity = Verbosity::default();
    if matches.get_flag("log-success") {
        verbosity = verbosity.with_success();
    }
    if matches.get_flag("log-durations") {
        verbosity = verbosity.with_duration();
    }

    HarnessArgs {
        include: matches.get_one::<String>("include").cloned(),
        ignore: matches.get_one::<String>("ignore").cloned(),
        verbosity,
        list: matches.get_flag("list"),
    }
}

/// Parses the process arguments and executes the requested command.
/// 解析进程参数并执行请求的命令。
pub fn run() -> Result<RunResult> {
    let matches = build_cli().get_matches();
    let args = args_from_matches(&matches);

    if args.list {
        commands::list::execute();
        return Ok(RunResult::default());
    }

    commands::run::execute(&args)
}

/// The entry point consumer binaries delegate to: runs the registered tests
/// and maps the failed-test count to the process exit status (clamped, so
/// counts beyond the representable range read as "one or more failures").
///
/// 使用方二进制委托的入口：运行已注册的测试，
/// 并将失败测试数量映射为进程退出状态（做了钳制，
/// 超出可表示范围的数量读作“存在失败”）。
pub fn harness_main() -> ExitCode {
    match run() {
        Ok(result) => ExitCode::from(result.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Expands to the `main` function of a consumer test binary.
///
/// 展开为使用方测试二进制的 `main` 函数。
///
/// ```ignore
/// micro_harness::harness_main!();
/// ```
#[macro_export]
macro_rules! harness_main {
    () => {
        fn main() -> ::std::process::ExitCode {
            $crate::cli::harness_main()
        }
    };
}
