//! # Micro Harness Library / Micro Harness 库
//!
//! This library provides a minimal, self-registering unit-testing harness.
//! Test bodies register themselves into a process-wide registry at load time,
//! a sequential runner executes a filtered subset with optional per-suite
//! setup/teardown, and a failing assertion aborts only the current test body
//! by unwinding back to the runner.
//!
//! 此库提供一个极简的、自注册的单元测试框架。
//! 测试体在加载时将自身注册到进程级注册表中，
//! 顺序运行器执行经过过滤的子集（可选每套件的 setup/teardown），
//! 断言失败只会通过栈展开回到运行器来中止当前测试体。
//!
//! ## Modules / 模块
//!
//! - `core` - Registry, assertion engine, filter, and test execution
//! - `infra` - Infrastructure collaborators: monotonic clock and log sinks
//! - `reporting` - Log-line construction and console summaries
//! - `cli` - Command-line shell for consumer test binaries
//!
//! - `core` - 注册表、断言引擎、过滤器和测试执行
//! - `infra` - 基础设施协作者：单调时钟和日志接收器
//! - `reporting` - 日志行构建和控制台摘要
//! - `cli` - 供使用方测试二进制调用的命令行外壳

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::execution::Runner;
pub use core::filter::FilterLists;
pub use core::models::{RunResult, TestContext, TestDescriptor, TestOutcome, Verbosity};
pub use core::registry;

// `test_case!` expands to an `inventory::submit!` call, so consumers need the
// crate reachable under our name.
pub use inventory;
