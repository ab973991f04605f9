//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness,
//! including the data model, the test registry, assertion handling,
//! name filtering, and the execution engine.
//!
//! 此模块包含测试框架的核心功能，
//! 包括数据模型、测试注册表、断言处理、名称过滤和执行引擎。

pub mod assert;
pub mod execution;
pub mod filter;
pub mod models;
pub mod registry;

// Re-exports
pub use execution::Runner;
pub use filter::FilterLists;
pub use models::{RunResult, TestDescriptor, TestOutcome, Verbosity};
