//! # List Command Module / 列出命令模块
//!
//! Prints the qualified name of every registered test without running any
//! of them. Setup and teardown are never invoked on this path.
//!
//! 打印每个已注册测试的限定名而不运行任何测试。
//! 此路径上不会调用 setup 和 teardown。

use crate::core::registry;

/// Collects the qualified names of all registered tests, in registration
/// order.
pub fn collect_names() -> Vec<String> {
    registry::tests()
        .map(|descriptor| descriptor.qualified_name())
        .collect()
}

/// Executes the list command.
pub fn execute() {
    let names = collect_names();
    println!("{} registered test(s)", names.len());
    for name in names {
        println!("  {name}");
    }
}
