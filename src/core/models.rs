//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness:
//! test descriptors, per-test outcomes, the aggregate run result, and the
//! verbosity bitmask that gates log output.
//!
//! 此模块定义了整个测试框架中使用的核心数据结构：
//! 测试描述符、单个测试的结果、整体运行结果，
//! 以及控制日志输出的详细程度位掩码。

use std::any::Any;
use std::fmt;

/// The opaque context produced by a setup procedure and consumed by the test
/// body and teardown. A test without setup receives `None`.
///
/// 由 setup 过程产生、并由测试体和 teardown 使用的不透明上下文。
/// 没有 setup 的测试收到 `None`。
pub type TestContext = Option<Box<dyn Any>>;

/// A test body. Runs with the context produced by setup (or `None`).
pub type TestFn = fn(&mut TestContext);

/// An optional per-suite setup procedure. Its return value becomes the
/// body's context and, later, the teardown's argument.
pub type SetupFn = fn() -> TestContext;

/// An optional per-suite teardown procedure. Consumes the context.
pub type TeardownFn = fn(TestContext);

/// Identifies one registered test: a domain (suite name), a test name unique
/// within the domain by convention, the body, and optional setup/teardown.
/// Immutable once created; descriptors are built at load time and live for
/// the whole process.
///
/// 标识一个已注册的测试：domain（套件名）、在 domain 内按约定唯一的测试名、
/// 测试体以及可选的 setup/teardown。
/// 创建后不可变；描述符在加载时构建并存活于整个进程生命周期。
pub struct TestDescriptor {
    /// The suite the test belongs to, used for display and prefix filtering.
    /// 测试所属的套件，用于显示和前缀过滤。
    pub domain: &'static str,
    /// The test name, unique within its domain by convention (not enforced).
    /// 测试名，按约定在其 domain 内唯一（不强制）。
    pub name: &'static str,
    /// The test body.
    pub body: TestFn,
    /// Optional setup; absent setup means the body receives a `None` context.
    pub setup: Option<SetupFn>,
    /// Optional teardown; runs once setup ran, success or failure alike.
    pub teardown: Option<TeardownFn>,
}

impl TestDescriptor {
    /// Creates a descriptor. Normally invoked through the `test_case!` macro
    /// rather than called directly.
    pub const fn new(
        domain: &'static str,
        name: &'static str,
        body: TestFn,
        setup: Option<SetupFn>,
        teardown: Option<TeardownFn>,
    ) -> Self {
        Self {
            domain,
            name,
            body,
            setup,
            teardown,
        }
    }

    /// Returns the qualified name `domain::name`, the unit that filter lists
    /// match against.
    ///
    /// 返回限定名 `domain::name`，即过滤列表匹配的单位。
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.domain, self.name)
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("domain", &self.domain)
            .field("name", &self.name)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .finish()
    }
}

/// Failure details recorded by the assertion that aborted a test body.
/// 中止测试体的断言所记录的失败详情。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// The name of the function in which the failing assertion was evaluated.
    /// 评估失败断言所在函数的名称。
    pub func_name: &'static str,
    /// The source line of the failing assertion.
    pub line: u32,
    /// The formatted failure message (bounded; overflow is truncated).
    pub message: String,
}

/// The final outcome of a single test execution.
///
/// 单个测试执行的最终结果。
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    /// The body returned normally.
    /// 测试体正常返回。
    Passed {
        /// Elapsed clock ticks (interpreted as microseconds).
        /// 经过的时钟滴答数（按微秒解释）。
        duration_ticks: u64,
    },
    /// The body aborted through a failing assertion.
    /// 测试体因断言失败而中止。
    Failed {
        /// The failure recorded by the aborting assertion.
        failure: FailureReport,
        /// Elapsed clock ticks up to the abort.
        duration_ticks: u64,
    },
    /// The descriptor was excluded by the filter; setup/teardown never ran.
    /// 描述符被过滤器排除；setup/teardown 从未运行。
    Skipped,
}

impl TestOutcome {
    /// Checks if the outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, TestOutcome::Failed { .. })
    }

    /// Gets the elapsed ticks of an executed test. Returns `None` for
    /// skipped tests.
    pub fn duration_ticks(&self) -> Option<u64> {
        match self {
            TestOutcome::Passed { duration_ticks } => Some(*duration_ticks),
            TestOutcome::Failed { duration_ticks, .. } => Some(*duration_ticks),
            TestOutcome::Skipped => None,
        }
    }
}

/// Aggregate result of a full run. `num_errors` is the contract consumed by
/// the caller for the process exit status; the remaining counters only feed
/// the console summary.
///
/// 一次完整运行的聚合结果。`num_errors` 是调用方用于进程退出状态的契约；
/// 其余计数器仅用于控制台摘要。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// The number of failed tests, accumulated monotonically across the run.
    /// 整个运行过程中单调累加的失败测试数量。
    pub num_errors: usize,
    /// The number of tests that actually executed (passed or failed).
    pub num_executed: usize,
    /// The number of tests the filter excluded.
    pub num_skipped: usize,
}

impl RunResult {
    /// Folds one test outcome into the aggregate.
    pub fn record(&mut self, outcome: &TestOutcome) {
        match outcome {
            TestOutcome::Passed { .. } => self.num_executed += 1,
            TestOutcome::Failed { .. } => {
                self.num_executed += 1;
                self.num_errors += 1;
            }
            TestOutcome::Skipped => self.num_skipped += 1,
        }
    }

    /// Maps the error count to a process exit status. Counts beyond the
    /// representable range collapse to 255 and mean "one or more failures",
    /// not a reliable count.
    ///
    /// 将错误数量映射为进程退出状态。超出可表示范围的数量折叠为 255，
    /// 表示“存在失败”而非可靠的计数。
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.num_errors).unwrap_or(u8::MAX)
    }
}

/// A bitmask with two independent flags gating log output: log successes and
/// log durations. The default logs nothing for successes and appends no
/// duration suffix.
///
/// 带有两个独立标志位的位掩码，控制日志输出：记录成功和记录耗时。
/// 默认不记录成功，也不附加耗时后缀。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity(u8);

impl Verbosity {
    /// Bit: emit a log line for passing tests as well.
    pub const LOG_SUCCESS: u8 = 1;
    /// Bit: append the elapsed time to every emitted log line.
    pub const LOG_DURATION: u8 = 2;

    /// Builds a verbosity mask from raw bits; unknown bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Verbosity(bits & (Self::LOG_SUCCESS | Self::LOG_DURATION))
    }

    /// Returns the raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Enables logging of passing tests.
    pub fn with_success(self) -> Self {
        Verbosity(self.0 | Self::LOG_SUCCESS)
    }

    /// Enables the duration suffix on emitted lines.
    pub fn with_duration(self) -> Self {
        Verbosity(self.0 | Self::LOG_DURATION)
    }

    /// Checks whether passing tests should be logged.
    pub fn log_success(self) -> bool {
        self.0 & Self::LOG_SUCCESS != 0
    }

    /// Checks whether emitted lines should carry a duration suffix.
    pub fn log_duration(self) -> bool {
        self.0 & Self::LOG_DURATION != 0
    }
}
