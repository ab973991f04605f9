//! # Reporting Module / 报告模块
//!
//! This module builds the per-test log lines the runner emits and prints
//! the colored end-of-run summary to the console.
//!
//! 此模块构建运行器发出的每测试日志行，
//! 并在控制台打印彩色的运行结束摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{colored_sink, format_result_line, print_summary};
