//! # Console Reporting Module / 控制台报告模块
//!
//! This module assembles the per-test log line the runner hands to the log
//! sink, gated by the verbosity bitmask, and prints a colored summary once
//! a run completes.
//!
//! 此模块组装运行器交给日志接收器的每测试日志行（受详细程度位掩码控制），
//! 并在一次运行结束后打印彩色摘要。

use colored::*;

use crate::core::models::{RunResult, TestDescriptor, TestOutcome, Verbosity};
use crate::infra::clock;

/// Builds the log line for one completed test.
///
/// A success produces `domain::name succeeded`, and only when the
/// log-successes flag is set; a failure always produces
/// `domain::name failed at line L: message`. With the log-durations flag the
/// elapsed time is appended in seconds with millisecond precision. An empty
/// return means "emit nothing".
///
/// 为一个已完成的测试构建日志行。
/// 成功产生 `domain::name succeeded`，且仅在设置了记录成功标志时产生；
/// 失败始终产生 `domain::name failed at line L: message`。
/// 设置记录耗时标志时，以秒为单位（毫秒精度）附加经过的时间。
/// 返回空字符串表示“不发出任何内容”。
pub fn format_result_line(
    descriptor: &TestDescriptor,
    outcome: &TestOutcome,
    verbosity: Verbosity,
) -> String {
    let mut line = match outcome {
        TestOutcome::Passed { .. } => {
            if !verbosity.log_success() {
                return String::new();
            }
            format!("{} succeeded", descriptor.qualified_name())
        }
        TestOutcome::Failed { failure, .. } => format!(
            "{} failed at line {}: {}",
            descriptor.qualified_name(),
            failure.line,
            failure.message,
        ),
        TestOutcome::Skipped => return String::new(),
    };

    if verbosity.log_duration() {
        if let Some(ticks) = outcome.duration_ticks() {
            line.push_str(&format!(
                " (duration: {:.3}s)",
                clock::ticks_to_seconds(ticks)
            ));
        }
    }

    line
}

/// A log sink that colorizes lines on their way to standard output:
/// failure lines red, everything else green.
///
/// 将日志行着色后写入标准输出的接收器：失败行为红色，其余为绿色。
pub fn colored_sink(line: &str) {
    if line.contains(" failed at line ") {
        println!("{}", line.red());
    } else {
        println!("{}", line.green());
    }
}

/// Prints a colored summary of a completed run to the console.
///
/// 在控制台打印一次已完成运行的彩色摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Harness Summary ---
///   3 executed, 1 skipped
///   all tests passed
/// ```
pub fn print_summary(result: &RunResult) {
    println!("\n{}", "--- Harness Summary ---".bold());
    println!(
        "  {} executed, {} skipped",
        result.num_executed, result.num_skipped
    );

    if result.num_errors == 0 {
        println!("  {}", "all tests passed".green().bold());
    } else {
        println!(
            "  {}",
            format!("{} test(s) failed", result.num_errors).red().bold()
        );
    }
}
