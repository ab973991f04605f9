//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module drives the selected subset of the registry through the
//! per-test state machine: setup → body (under a `catch_unwind` resumption
//! point) → teardown → log, aggregating outcomes into a [`RunResult`].
//! The runner itself is single-threaded and sequential; one test's state
//! machine completes before the next starts.
//!
//! 此模块驱动注册表中被选中的子集完成每个测试的状态机：
//! setup → 测试体（处于 `catch_unwind` 恢复点之下）→ teardown → 日志，
//! 并将结果聚合到 [`RunResult`] 中。
//! 运行器本身是单线程且顺序执行的；一个测试的状态机完成后才开始下一个。

use std::panic::{self, AssertUnwindSafe};

use crate::core::assert::{self, AssertionAbort};
use crate::core::filter::FilterLists;
use crate::core::models::{RunResult, TestContext, TestDescriptor, TestOutcome, Verbosity};
use crate::core::registry;
use crate::infra::{clock, log};
use crate::reporting::console;

/// A log-sink collaborator: invoked zero or one times per test, with the
/// formatted line, synchronously on the thread that ran the test.
pub type LogSink = Box<dyn Fn(&str)>;

/// A clock collaborator: returns a monotonically non-decreasing tick count,
/// interpreted as microseconds when durations are formatted.
pub type ClockSource = Box<dyn Fn() -> u64>;

/// Executes the selected subset of the registry and aggregates the results.
///
/// The runner owns its collaborators (log sink and clock source) and its
/// configuration (filter lists and verbosity); all are set up front through
/// the `with_*` builders and read-only during the run.
///
/// 执行注册表中被选中的子集并聚合结果。
/// 运行器拥有其协作者（日志接收器和时钟源）及其配置
/// （过滤列表和详细程度）；全部通过 `with_*` 构建器预先设置，
/// 运行期间只读。
pub struct Runner {
    filter: FilterLists,
    verbosity: Verbosity,
    log_sink: LogSink,
    clock: ClockSource,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Creates a runner with no filtering, default verbosity (nothing logged
    /// for successes, no duration suffix), the plain stdout log sink, and
    /// the process-epoch microsecond clock.
    pub fn new() -> Self {
        Self {
            filter: FilterLists::default(),
            verbosity: Verbosity::default(),
            log_sink: Box::new(log::stdout_sink),
            clock: Box::new(clock::ticks),
        }
    }

    /// Sets the include/ignore filter lists.
    pub fn with_filter(mut self, filter: FilterLists) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the verbosity bitmask.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Replaces the logging collaborator.
    pub fn with_log_sink(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.log_sink = Box::new(sink);
        self
    }

    /// Replaces the clock collaborator.
    pub fn with_clock(mut self, clock: impl Fn() -> u64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Runs every registered test that the filter selects, in registration
    /// order, and returns the aggregate result. An empty registry yields a
    /// result with zero errors.
    ///
    /// 按注册顺序运行过滤器选中的每个已注册测试，并返回聚合结果。
    /// 空注册表产生零错误的结果。
    pub fn run(&self) -> RunResult {
        self.run_tests(registry::tests())
    }

    /// Runs an explicit sequence of descriptors through the same state
    /// machine. This is the entry point tests and alternate drivers use to
    /// execute synthetic registries.
    ///
    /// 让一组显式给定的描述符经过同样的状态机。
    /// 这是测试和其他驱动程序执行合成注册表时使用的入口。
    pub fn run_tests<'a>(
        &self,
        tests: impl IntoIterator<Item = &'a TestDescriptor>,
    ) -> RunResult {
        assert::install_abort_hook();

        let mut result = RunResult::default();
        for descriptor in tests {
            let outcome = self.run_test(descriptor);
            result.record(&outcome);
            let line = console::format_result_line(descriptor, &outcome, self.verbosity);
            if !line.is_empty() {
                (self.log_sink)(&line);
            }
        }
        result
    }

    /// Drives one descriptor through the per-test state machine and returns
    /// its outcome. Descriptors the filter excludes come back as
    /// [`TestOutcome::Skipped`] with setup and teardown never invoked.
    ///
    /// Setup (if any) produces the opaque context; the body runs under the
    /// `catch_unwind` resumption point; teardown (if any) always consumes
    /// the context once setup ran, success or failure alike. A panic whose
    /// payload is not the assertion sentinel is resumed untouched: faults
    /// that are not cooperative assertion failures stay outside this
    /// system's control.
    ///
    /// 驱动一个描述符完成每测试状态机。
    /// setup（如有）产生不透明上下文；测试体在 `catch_unwind` 恢复点下运行；
    /// 只要 setup 运行过，teardown（如有）无论成败都会消费该上下文。
    /// 负载不是断言哨兵的 panic 会原样继续传播：
    /// 非协作式断言失败的故障不在本系统的控制范围内。
    pub fn run_test(&self, descriptor: &TestDescriptor) -> TestOutcome {
        assert::install_abort_hook();

        if !self.filter.selects(&descriptor.qualified_name()) {
            return TestOutcome::Skipped;
        }

        let mut ctx: TestContext = match descriptor.setup {
            Some(setup) => setup(),
            None => None,
        };

        assert::reset();
        let body = descriptor.body;
        let start = (self.clock)();
        let caught = panic::catch_unwind(AssertUnwindSafe(|| body(&mut ctx)));
        let end = (self.clock)();
        let duration_ticks = end.saturating_sub(start);

        let outcome = match caught {
            Ok(()) => TestOutcome::Passed { duration_ticks },
            Err(payload) => {
                if payload.is::<AssertionAbort>() {
                    TestOutcome::Failed {
                        failure: assert::last_failure(),
                        duration_ticks,
                    }
                } else {
                    panic::resume_unwind(payload);
                }
            }
        };

        if let Some(teardown) = descriptor.teardown {
            teardown(ctx);
        }

        outcome
    }
}
