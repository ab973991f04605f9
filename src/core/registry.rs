//! # Test Registry Module / 测试注册表模块
//!
//! This module provides the process-wide, load-time-populated registry of
//! test descriptors. Registration is a declarative side effect of defining a
//! test with [`test_case!`](crate::test_case): no manual list maintenance,
//! no runtime registration calls. The registry is fully built before `main`
//! runs and is never mutated afterwards.
//!
//! 此模块提供进程级、在加载时填充的测试描述符注册表。
//! 注册是通过 [`test_case!`](crate::test_case) 定义测试的声明式副作用：
//! 无需手动维护列表，也没有运行时注册调用。
//! 注册表在 `main` 运行之前即已完全构建，此后不再修改。

use crate::core::models::TestDescriptor;

inventory::collect!(TestDescriptor);

/// Iterates over every registered test descriptor.
///
/// The order is the registration (link) order: deterministic for a given
/// build, but not semantically significant. An empty registry is valid and
/// yields a run with zero errors.
///
/// 遍历所有已注册的测试描述符。
/// 顺序即注册（链接）顺序：对给定构建是确定的，但没有语义上的意义。
/// 空注册表是合法的，运行结果为零错误。
pub fn tests() -> impl Iterator<Item = &'static TestDescriptor> {
    inventory::iter::<TestDescriptor>.into_iter()
}

/// Returns the number of registered tests.
pub fn len() -> usize {
    tests().count()
}

/// Defines a test body and registers it into the process-wide registry as a
/// load-time side effect.
///
/// The first two arguments are the domain (suite) and the test name; the
/// last is the body, anything coercible to `fn(&mut TestContext)`. Optional
/// `setup = ...` and `teardown = ...` slots associate per-suite fixtures
/// with the descriptor; an absent setup hands the body a `None` context, an
/// absent teardown is simply never called.
///
/// 定义一个测试体，并在加载时将其注册到进程级注册表。
/// 前两个参数是 domain（套件）和测试名；最后一个是测试体，
/// 即任何可以转换为 `fn(&mut TestContext)` 的东西。
/// 可选的 `setup = ...` 和 `teardown = ...` 槽位为描述符关联套件级固定资源。
///
/// # Examples / 示例
///
/// ```
/// use micro_harness::{check, check_eq, test_case};
///
/// test_case!(math, addition, |_ctx| {
///     check_eq!(2 + 2, 4);
/// });
///
/// fn open() -> micro_harness::TestContext {
///     Some(Box::new(41_u32))
/// }
///
/// test_case!(math, with_fixture, setup = open, |ctx| {
///     let value = ctx.as_mut().unwrap().downcast_mut::<u32>().unwrap();
///     *value += 1;
///     check!(*value == 42);
/// });
/// ```
#[macro_export]
macro_rules! test_case {
    ($domain:ident, $name:ident, setup = $setup:expr, teardown = $teardown:expr, $body:expr) => {
        $crate::test_case!(@submit $domain, $name, $body, Some($setup), Some($teardown));
    };
    ($domain:ident, $name:ident, setup = $setup:expr, $body:expr) => {
        $crate::test_case!(@submit $domain, $name, $body, Some($setup), None);
    };
    ($domain:ident, $name:ident, teardown = $teardown:expr, $body:expr) => {
        $crate::test_case!(@submit $domain, $name, $body, None, Some($teardown));
    };
    ($domain:ident, $name:ident, $body:expr) => {
        $crate::test_case!(@submit $domain, $name, $body, None, None);
    };
    (@submit $domain:ident, $name:ident, $body:expr, $setup:expr, $teardown:expr) => {
        $crate::inventory::submit! {
            $crate::core::models::TestDescriptor::new(
                stringify!($domain),
                stringify!($name),
                $body,
                $setup,
                $teardown,
            )
        }
    };
}
