//! Shared helpers for the harness integration tests.
//! 测试框架集成测试的共享辅助函数。
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use micro_harness::{Runner, Verbosity};

/// A buffer of captured log lines, shared between a runner's sink and the
/// test that inspects it.
pub type CapturedLines = Rc<RefCell<Vec<String>>>;

/// Builds a runner whose log sink appends every emitted line to a buffer
/// the caller keeps a handle on.
///
/// 构建一个运行器，其日志接收器把每条发出的行追加到调用者持有的缓冲区。
pub fn capture_runner(verbosity: Verbosity) -> (Runner, CapturedLines) {
    let lines: CapturedLines = Rc::new(RefCell::new(Vec::new()));
    let sink_lines = Rc::clone(&lines);
    let runner = Runner::new()
        .with_verbosity(verbosity)
        .with_log_sink(move |line: &str| sink_lines.borrow_mut().push(line.to_string()));
    (runner, lines)
}

/// A deterministic clock: every call returns the previous tick plus `step`.
/// With the runner sampling it once before and once after each body, every
/// executed test reports a duration of exactly `step` ticks.
///
/// 确定性时钟：每次调用返回上一次的滴答数加 `step`。
/// 运行器在每个测试体前后各采样一次，因此每个执行的测试
/// 报告的耗时恰好是 `step` 个滴答。
pub fn step_clock(step: u64) -> impl Fn() -> u64 {
    let now = Cell::new(0_u64);
    move || {
        let current = now.get();
        now.set(current + step);
        current
    }
}
