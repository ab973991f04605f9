//! # Log Sink Module / 日志接收器模块
//!
//! Plain logging collaborators. The runner hands each non-empty formatted
//! line to exactly one sink, synchronously, on the thread that ran the test.
//!
//! 普通日志协作者。运行器将每条非空格式化日志行同步交给唯一的接收器，
//! 且在运行该测试的线程上进行。

/// Writes the line to standard output.
pub fn stdout_sink(line: &str) {
    println!("{line}");
}

/// Writes the line to standard error.
pub fn stderr_sink(line: &str) {
    eprintln!("{line}");
}
