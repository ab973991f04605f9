//! # CLI Commands Module / 命令行命令模块
//!
//! The commands the harness shell dispatches to: running the registered
//! tests and listing them.
//!
//! 框架外壳分派到的命令：运行已注册的测试，以及列出它们。

pub mod list;
pub mod run;
