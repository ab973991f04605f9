//! # Runner Unit Tests / 运行器单元测试
//!
//! This module contains unit tests for the `execution.rs` module: the
//! setup/body/teardown state machine, context identity, verbosity-gated log
//! lines, duration measurement against an injected clock, and foreign-panic
//! propagation.
//!
//! 此模块包含 `execution.rs` 模块的单元测试：
//! setup/测试体/teardown 状态机、上下文同一性、受详细程度控制的日志行、
//! 针对注入时钟的耗时测量以及外来 panic 的传播。

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use micro_harness::core::models::{TestContext, TestDescriptor, TestOutcome};
use micro_harness::{check, FilterLists, Runner, Verbosity};

fn body_passes(_ctx: &mut TestContext) {
    check!(true);
}

fn body_fails(_ctx: &mut TestContext) {
    check!(false);
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    static TEARDOWN_SAW: AtomicU32 = AtomicU32::new(0);

    fn fixture_setup() -> TestContext {
        Some(Box::new(0xC0FFEE_u32))
    }

    fn fixture_body(ctx: &mut TestContext) {
        let value = ctx
            .as_mut()
            .expect("setup context must reach the body")
            .downcast_mut::<u32>()
            .expect("context type must be preserved");
        check!(*value == 0xC0FFEE);
        *value = 0xBEEF;
    }

    fn fixture_teardown(ctx: TestContext) {
        let value = ctx
            .expect("body context must reach teardown")
            .downcast::<u32>()
            .expect("context type must be preserved");
        TEARDOWN_SAW.store(*value, Ordering::SeqCst);
    }

    #[test]
    fn test_context_identity_from_setup_to_teardown() {
        let descriptor = TestDescriptor::new(
            "lifecycle",
            "identity",
            fixture_body,
            Some(fixture_setup),
            Some(fixture_teardown),
        );
        let runner = Runner::new().with_log_sink(|_| {});
        let result = runner.run_tests([&descriptor]);

        assert_eq!(result.num_errors, 0);
        // Teardown observed the body's mutation: one context flowed through.
        assert_eq!(TEARDOWN_SAW.load(Ordering::SeqCst), 0xBEEF);
    }

    fn body_expects_no_context(ctx: &mut TestContext) {
        check!(ctx.is_none());
    }

    #[test]
    fn test_absent_setup_yields_none_context() {
        let descriptor =
            TestDescriptor::new("lifecycle", "no_setup", body_expects_no_context, None, None);
        let runner = Runner::new().with_log_sink(|_| {});
        assert_eq!(runner.run_tests([&descriptor]).num_errors, 0);
    }

    static TEARDOWN_AFTER_FAILURE: AtomicBool = AtomicBool::new(false);

    fn noting_teardown(_ctx: TestContext) {
        TEARDOWN_AFTER_FAILURE.store(true, Ordering::SeqCst);
    }

    #[test]
    fn test_teardown_runs_after_assertion_failure() {
        let descriptor = TestDescriptor::new(
            "lifecycle",
            "teardown_on_failure",
            body_fails,
            None,
            Some(noting_teardown),
        );
        let runner = Runner::new().with_log_sink(|_| {});
        let result = runner.run_tests([&descriptor]);

        assert_eq!(result.num_errors, 1);
        assert!(TEARDOWN_AFTER_FAILURE.load(Ordering::SeqCst));
    }

    static SETUP_RAN_FOR_SKIPPED: AtomicBool = AtomicBool::new(false);
    static TEARDOWN_RAN_FOR_SKIPPED: AtomicBool = AtomicBool::new(false);

    fn skipped_setup() -> TestContext {
        SETUP_RAN_FOR_SKIPPED.store(true, Ordering::SeqCst);
        None
    }

    fn skipped_teardown(_ctx: TestContext) {
        TEARDOWN_RAN_FOR_SKIPPED.store(true, Ordering::SeqCst);
    }

    #[test]
    fn test_skipped_test_runs_no_fixtures() {
        let descriptor = TestDescriptor::new(
            "lifecycle",
            "skipped",
            body_passes,
            Some(skipped_setup),
            Some(skipped_teardown),
        );
        let runner = Runner::new()
            .with_filter(FilterLists::from_comma_lists(None, Some("lifecycle::skipped")))
            .with_log_sink(|_| {});
        let result = runner.run_tests([&descriptor]);

        assert_eq!(result.num_skipped, 1);
        assert_eq!(result.num_executed, 0);
        assert!(!SETUP_RAN_FOR_SKIPPED.load(Ordering::SeqCst));
        assert!(!TEARDOWN_RAN_FOR_SKIPPED.load(Ordering::SeqCst));
    }
}

#[cfg(test)]
mod verbosity_tests {
    use super::*;

    #[test]
    fn test_silent_run_emits_no_lines_on_success() {
        let (runner, lines) = common::capture_runner(Verbosity::default());
        let a = TestDescriptor::new("quiet", "a", body_passes, None, None);
        let b = TestDescriptor::new("quiet", "b", body_passes, None, None);

        let result = runner.run_tests([&a, &b]);

        assert_eq!(result.num_errors, 0);
        assert!(lines.borrow().is_empty());
    }

    #[test]
    fn test_success_flag_emits_one_line_per_pass() {
        let (runner, lines) = common::capture_runner(Verbosity::default().with_success());
        let a = TestDescriptor::new("loud", "a", body_passes, None, None);
        let b = TestDescriptor::new("loud", "b", body_passes, None, None);

        runner.run_tests([&a, &b]);

        let captured = lines.borrow();
        assert_eq!(*captured, ["loud::a succeeded", "loud::b succeeded"]);
    }

    #[test]
    fn test_failure_is_logged_regardless_of_flags() {
        let (runner, lines) = common::capture_runner(Verbosity::default());
        let descriptor = TestDescriptor::new("loud", "broken", body_fails, None, None);

        runner.run_tests([&descriptor]);

        let captured = lines.borrow();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].starts_with("loud::broken failed at line "));
    }
}

#[cfg(test)]
mod timing_tests {
    use super::*;

    #[test]
    fn test_duration_suffix_uses_injected_clock() {
        let (runner, lines) = common::capture_runner(
            Verbosity::default().with_success().with_duration(),
        );
        // 1_234_000 microsecond ticks per clock sample: every executed test
        // reports exactly 1.234 seconds.
        let runner = runner.with_clock(common::step_clock(1_234_000));
        let descriptor = TestDescriptor::new("timing", "steady", body_passes, None, None);

        runner.run_tests([&descriptor]);

        let captured = lines.borrow();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].ends_with("(duration: 1.234s)"));
    }

    #[test]
    fn test_outcome_carries_clock_delta() {
        let runner = Runner::new()
            .with_log_sink(|_| {})
            .with_clock(common::step_clock(500));
        let descriptor = TestDescriptor::new("timing", "delta", body_passes, None, None);

        match runner.run_test(&descriptor) {
            TestOutcome::Passed { duration_ticks } => assert_eq!(duration_ticks, 500),
            other => panic!("expected a pass, got {:?}", other),
        }
    }

    #[test]
    fn test_default_clock_durations_are_non_negative() {
        let runner = Runner::new().with_log_sink(|_| {});
        let descriptor = TestDescriptor::new("timing", "wall", body_passes, None, None);

        let outcome = runner.run_test(&descriptor);
        // u64 ticks with saturating subtraction: present and well-formed.
        assert!(outcome.duration_ticks().is_some());
    }
}

#[cfg(test)]
mod fault_tests {
    use super::*;

    static TEARDOWN_AFTER_FOREIGN_PANIC: AtomicBool = AtomicBool::new(false);

    fn body_foreign_panic(_ctx: &mut TestContext) {
        panic!("not an assertion");
    }

    fn foreign_teardown(_ctx: TestContext) {
        TEARDOWN_AFTER_FOREIGN_PANIC.store(true, Ordering::SeqCst);
    }

    #[test]
    fn test_foreign_panic_is_not_recovered() {
        let descriptor = TestDescriptor::new(
            "fault",
            "foreign",
            body_foreign_panic,
            None,
            Some(foreign_teardown),
        );
        let runner = Runner::new().with_log_sink(|_| {});

        let caught = catch_unwind(AssertUnwindSafe(|| runner.run_test(&descriptor)));

        assert!(caught.is_err(), "a non-assertion panic must propagate");
        // The non-local-exit mechanism only catches cooperative assertion
        // failures; this abort never reached the teardown stage.
        assert!(!TEARDOWN_AFTER_FOREIGN_PANIC.load(Ordering::SeqCst));
    }

    #[test]
    fn test_empty_descriptor_sequence_yields_clean_result() {
        let runner = Runner::new().with_log_sink(|_| {});
        let result = runner.run_tests(std::iter::empty());

        assert_eq!(result.num_errors, 0);
        assert_eq!(result.num_executed, 0);
        assert_eq!(result.num_skipped, 0);
    }
}
