//! # Clock Source Module / 时钟源模块
//!
//! The default clock collaborator: a monotonically non-decreasing tick
//! count in microseconds, measured from a lazily captured process epoch.
//!
//! 默认时钟协作者：以微秒为单位、从惰性捕获的进程纪元起算的
//! 单调不减的滴答计数。

use std::time::Instant;

use once_cell::sync::Lazy;

static PROCESS_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Returns the microseconds elapsed since the first call site touched the
/// clock. Monotonically non-decreasing; the unit only matters when a
/// duration is formatted (seconds with millisecond precision).
///
/// 返回自首次访问时钟以来经过的微秒数。单调不减；
/// 单位仅在格式化耗时（秒，毫秒精度）时有意义。
pub fn ticks() -> u64 {
    PROCESS_EPOCH.elapsed().as_micros() as u64
}

/// Converts a tick delta to seconds for display.
pub fn ticks_to_seconds(ticks: u64) -> f64 {
    ticks as f64 / 1_000_000.0
}
