//! # Assertion Engine Module / 断言引擎模块
//!
//! This module lets test-body code declare pass/fail points and, on the
//! first failure, abort the remainder of the body by unwinding back to the
//! runner's `catch_unwind` boundary. The unwind carries a private sentinel
//! payload so the runner can tell a cooperative assertion failure from a
//! foreign panic; only the sentinel is recovered, everything else is
//! resumed untouched.
//!
//! Failure bookkeeping (function name, source line, message) lives in
//! thread-local state so that drivers running bodies on several threads can
//! never corrupt one another's error report.
//!
//! 此模块让测试体代码声明通过/失败点，并在第一次失败时通过栈展开
//! 回到运行器的 `catch_unwind` 边界，从而中止测试体的剩余部分。
//! 展开携带一个私有的哨兵负载，使运行器能够区分协作式断言失败
//! 和外来 panic；只有哨兵会被恢复，其余一律原样继续传播。
//!
//! 失败记录（函数名、源代码行、消息）保存在线程本地状态中，
//! 因此在多个线程上运行测试体的驱动程序不会互相破坏错误报告。

use std::cell::RefCell;
use std::panic;

use once_cell::sync::OnceCell;

use crate::core::models::FailureReport;

/// Maximum length, in bytes, of a synthesized failure message. Longer
/// messages are truncated silently on a character boundary.
///
/// 合成失败消息的最大字节长度。更长的消息会在字符边界上被静默截断。
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 256;

/// Sentinel panic payload distinguishing a cooperative assertion abort from
/// any other panic. Zero-sized; the actual failure details travel through
/// the thread-local [`ExecutionState`].
pub(crate) struct AssertionAbort;

/// Per-thread failure bookkeeping. The fields are meaningful only after the
/// current test body aborted, and stay valid until the next assertion on the
/// same thread overwrites them.
struct ExecutionState {
    func_name: &'static str,
    line: u32,
    message: String,
}

thread_local! {
    static STATE: RefCell<ExecutionState> = RefCell::new(ExecutionState {
        func_name: "",
        line: 0,
        message: String::new(),
    });
}

/// Resets the thread's execution state. The runner calls this right before
/// invoking each test body.
pub(crate) fn reset() {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.func_name = "";
        state.line = 0;
        state.message.clear();
    });
}

/// Reads out the failure left by the assertion that aborted the current
/// test body. Clones the fields so the report survives the next assertion.
pub(crate) fn last_failure() -> FailureReport {
    STATE.with(|state| {
        let state = state.borrow();
        FailureReport {
            func_name: state.func_name,
            line: state.line,
            message: state.message.clone(),
        }
    })
}

/// Installs, once per process, a panic-hook filter that silences the default
/// hook output for [`AssertionAbort`] payloads. Every other panic reaches
/// whatever hook was installed before.
///
/// 每个进程安装一次 panic 钩子过滤器，仅对 [`AssertionAbort`] 负载
/// 抑制默认钩子输出。其他所有 panic 都会到达之前安装的钩子。
pub(crate) fn install_abort_hook() {
    static INSTALLED: OnceCell<()> = OnceCell::new();
    INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().downcast_ref::<AssertionAbort>().is_none() {
                previous(info);
            }
        }));
    });
}

/// Records the failure into the thread's state and fires the non-local
/// transfer back to the runner.
fn fail(message: String, line: u32) -> ! {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.line = line;
        state.message = truncate_message(message);
    });
    panic::panic_any(AssertionAbort);
}

/// Bounds a message to [`ERROR_MESSAGE_MAX_LENGTH`] bytes, truncating on a
/// character boundary.
fn truncate_message(mut message: String) -> String {
    if message.len() > ERROR_MESSAGE_MAX_LENGTH {
        let mut end = ERROR_MESSAGE_MAX_LENGTH;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}

#[doc(hidden)]
pub fn check_impl(ok: bool, expr_text: &'static str, func_name: &'static str, line: u32) {
    STATE.with(|state| state.borrow_mut().func_name = func_name);
    if !ok {
        fail(expr_text.to_string(), line);
    }
}

#[doc(hidden)]
pub fn check_memory_impl(
    lhs: &[u8],
    rhs: &[u8],
    expr_text: &'static str,
    func_name: &'static str,
    line: u32,
) {
    STATE.with(|state| state.borrow_mut().func_name = func_name);
    if lhs != rhs {
        fail(expr_text.to_string(), line);
    }
}

/// The six relational comparisons the typed assertions dispatch through.
/// 类型化断言所分派的六种关系比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    NotEqual,
    GreaterOrEqual,
    GreaterThan,
    LessOrEqual,
    LessThan,
}

impl Relation {
    /// Evaluates the relation with the operands' native comparison operator.
    /// Floating-point equality is exact: no epsilon tolerance.
    fn holds<T: AssertValue>(self, lhs: T, rhs: T) -> bool {
        match self {
            Relation::Equal => lhs == rhs,
            Relation::NotEqual => lhs != rhs,
            Relation::GreaterOrEqual => lhs >= rhs,
            Relation::GreaterThan => lhs > rhs,
            Relation::LessOrEqual => lhs <= rhs,
            Relation::LessThan => lhs < rhs,
        }
    }

    /// The source-level operator symbol.
    fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::GreaterOrEqual => ">=",
            Relation::GreaterThan => ">",
            Relation::LessOrEqual => "<=",
            Relation::LessThan => "<",
        }
    }

    /// The operator symbol of the negated relation, used when synthesizing
    /// the failure message.
    fn negated_symbol(self) -> &'static str {
        match self {
            Relation::Equal => "!=",
            Relation::NotEqual => "==",
            Relation::GreaterOrEqual => "<",
            Relation::GreaterThan => "<=",
            Relation::LessOrEqual => ">",
            Relation::LessThan => ">=",
        }
    }
}

/// An operand type the typed assertions accept: the fixed-width signed and
/// unsigned integers and the floating-point types, each formatted with a
/// per-type notation when a failure message is synthesized.
///
/// 类型化断言接受的操作数类型：定宽有符号/无符号整数和浮点类型，
/// 合成失败消息时各自使用按类型的格式。
pub trait AssertValue: Copy + PartialEq + PartialOrd {
    /// Formats the value for embedding in a failure message.
    fn format_value(self) -> String;
}

macro_rules! impl_assert_value_int {
    ($($ty:ty),*) => {
        $(
            impl AssertValue for $ty {
                fn format_value(self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

macro_rules! impl_assert_value_float {
    ($($ty:ty),*) => {
        $(
            impl AssertValue for $ty {
                // Round-trip notation: always enough precision to tell two
                // near-equal operands apart.
                fn format_value(self) -> String {
                    format!("{self:?}")
                }
            }
        )*
    };
}

impl_assert_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_assert_value_float!(f32, f64);

#[doc(hidden)]
pub fn check_relation_impl<T: AssertValue>(
    lhs: T,
    rhs: T,
    relation: Relation,
    lhs_text: &'static str,
    rhs_text: &'static str,
    func_name: &'static str,
    line: u32,
) {
    STATE.with(|state| state.borrow_mut().func_name = func_name);
    if !relation.holds(lhs, rhs) {
        let message = format!(
            "{} {} {} => {} {} {}",
            lhs_text,
            relation.symbol(),
            rhs_text,
            lhs.format_value(),
            relation.negated_symbol(),
            rhs.format_value(),
        );
        fail(message, line);
    }
}

/// Captures the name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Declares a boolean predicate as a pass/fail point. Returns normally if
/// the predicate is true; otherwise records the literal predicate text and
/// source line, then aborts the rest of the test body.
///
/// 将布尔谓词声明为通过/失败点。谓词为真时正常返回；
/// 否则记录谓词的字面文本和源代码行，然后中止测试体的剩余部分。
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        $crate::core::assert::check_impl(
            $cond,
            stringify!($cond),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Byte-wise comparison of two `[u8]` views. Fails if any byte differs;
/// slices of different length differ by definition.
///
/// 对两个 `[u8]` 视图逐字节比较。任一字节不同即失败；
/// 长度不同的切片按定义视为不同。
#[macro_export]
macro_rules! check_memory {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_memory_impl(
            ::std::convert::AsRef::<[u8]>::as_ref(&$lhs),
            ::std::convert::AsRef::<[u8]>::as_ref(&$rhs),
            concat!(stringify!($lhs), " == ", stringify!($rhs)),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Typed equality assertion. Both operands must share one numeric type;
/// floating-point equality is exact. On failure the synthesized message
/// embeds both operand source texts and their formatted values.
///
/// 类型化相等断言。两个操作数必须是同一数值类型；浮点相等为精确比较。
/// 失败时合成的消息会嵌入两个操作数的源文本及其格式化值。
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::Equal,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Typed inequality assertion.
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::NotEqual,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Fails unless `lhs >= rhs`.
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::GreaterOrEqual,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Fails unless `lhs > rhs`.
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::GreaterThan,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Fails unless `lhs <= rhs`.
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::LessOrEqual,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}

/// Fails unless `lhs < rhs`.
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {
        $crate::core::assert::check_relation_impl(
            $lhs,
            $rhs,
            $crate::core::assert::Relation::LessThan,
            stringify!($lhs),
            stringify!($rhs),
            $crate::function_name!(),
            line!(),
        )
    };
}
