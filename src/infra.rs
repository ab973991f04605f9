//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the default collaborators the runner depends on:
//! the monotonic clock source and the plain log sinks.
//!
//! 此模块提供运行器依赖的默认协作者：单调时钟源和普通日志接收器。

pub mod clock;
pub mod log;
