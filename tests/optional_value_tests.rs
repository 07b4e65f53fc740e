//! Tests for value containers.
//!
//! A value container runs every mapping function it is given, immediately,
//! and never produces a message unless a function asks for one.

mod common;

use std::cell::Cell;

use common::{OtherError, TestError, assert_exception, assert_message, assert_value};
use optionals::{BoxError, Kind, Optional};
use rstest::rstest;

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn value_map_runs_eagerly() {
    let calls = Cell::new(0);
    let mapped = Optional::of_value(21).map(|value| {
        calls.set(calls.get() + 1);
        value * 2
    });
    assert_eq!(calls.get(), 1);
    assert_value(&mapped, &42);
}

#[rstest]
fn value_map_changes_type() {
    let mapped = Optional::of_value(123).map(|value| value.to_string());
    assert_value(&mapped, &"123".to_string());
}

#[rstest]
fn value_try_map_lets_error_escape() {
    let result: Result<Optional<i32>, TestError> =
        Optional::of_value(1).try_map(|_| Err(TestError("boom")));
    assert_eq!(result.unwrap_err(), TestError("boom"));
}

#[rstest]
fn value_try_map_wraps_success() {
    let result = Optional::of_value("12").try_map(str::parse::<i32>).unwrap();
    assert_value(&result, &12);
}

#[rstest]
fn value_flat_map_returns_inner_container() {
    assert_value(&Optional::of_value(2).flat_map(|value| Optional::of_value(value + 1)), &3);

    let message = Optional::of_value(2).flat_map(|_| Optional::<i32>::of_message("rejected"));
    assert_message(&message, "rejected");
}

#[rstest]
#[should_panic(expected = "mapper failed")]
fn value_map_lets_panic_unwind() {
    let _ = Optional::of_value(1).map(|_| -> i32 { panic!("mapper failed") });
}

#[rstest]
#[should_panic(expected = "mapper failed")]
fn value_flat_map_lets_panic_unwind() {
    let _ = Optional::of_value(1).flat_map(|_| -> Optional<i32> { panic!("mapper failed") });
}

// =============================================================================
// Safe Mapping
// =============================================================================

#[rstest]
fn value_safe_map_success() {
    let mapped = Optional::of_value("42").safe_map(|text| text.parse::<i32>());
    assert_value(&mapped, &42);
}

#[rstest]
fn value_safe_map_captures_error() {
    let mapped: Optional<i32> = Optional::of_value(1).safe_map(|_| Err(TestError("captured")));
    assert_exception::<_, TestError>(&mapped, "captured");
}

#[rstest]
fn value_safe_map_catching_matching_kind() {
    let mapped: Optional<i32> = Optional::of_value(1)
        .safe_map_catching(Kind::<TestError>::new(), |_| Err(TestError("matched")))
        .unwrap();
    assert_exception::<_, TestError>(&mapped, "matched");
}

#[rstest]
#[should_panic(expected = "mapper failed")]
fn value_safe_map_captures_errors_not_panics() {
    let _ = Optional::of_value(1)
        .safe_map(|_| -> Result<i32, TestError> { panic!("mapper failed") });
}

#[rstest]
fn value_safe_map_catching_matches_boxed_kind() {
    let mapped: Optional<i32> = Optional::of_value(1)
        .safe_map_catching(Kind::<TestError>::new(), |_| Err(Box::new(TestError("boxed"))))
        .unwrap();
    assert_exception::<_, Box<TestError>>(&mapped, "boxed");
}

#[rstest]
fn value_safe_map_catching_other_kind_escapes() {
    let result: Result<Optional<i32>, BoxError> = Optional::of_value(1)
        .safe_map_catching(Kind::<TestError>::new(), |_| Err(OtherError("escaped")));
    let error = result.unwrap_err();
    assert_eq!(error.downcast_ref::<OtherError>(), Some(&OtherError("escaped")));
}

#[rstest]
fn value_safe_flat_map_passes_returned_failure_unchanged() {
    let mapped = Optional::of_value(1)
        .safe_flat_map(|_| Ok::<_, TestError>(Optional::<i32>::of_message("inner")));
    assert_message(&mapped, "inner");
}

#[rstest]
fn value_safe_flat_map_captures_error() {
    let mapped: Optional<i32> =
        Optional::of_value(1).safe_flat_map(|_| Err(TestError("flat")));
    assert_exception::<_, TestError>(&mapped, "flat");
}

#[rstest]
fn value_safe_flat_map_catching_other_kind_escapes() {
    let result: Result<Optional<i32>, BoxError> = Optional::of_value(1)
        .safe_flat_map_catching(Kind::<TestError>::new(), |_| Err(OtherError("nope")));
    assert!(result.unwrap_err().is::<OtherError>());
}

// =============================================================================
// Side Effects
// =============================================================================

#[derive(Debug, PartialEq)]
struct Counter {
    value: i32,
}

#[rstest]
fn value_apply_mutates_payload() {
    let applied = Optional::of_value(Counter { value: 1 }).apply(|counter| counter.value = 10);
    assert_value(&applied, &Counter { value: 10 });
}

#[rstest]
fn value_if_has_value_fires() {
    let seen = Cell::new(None);
    let optional = Optional::of_value(7).if_has_value(|value| seen.set(Some(*value)));
    assert_eq!(seen.get(), Some(7));
    assert_value(&optional, &7);
}

#[rstest]
fn value_if_has_message_and_exception_do_not_fire() {
    let fired = Cell::new(false);
    let optional = Optional::of_value(7)
        .if_has_message(|_| fired.set(true))
        .if_has_exception(|_| fired.set(true));
    assert!(!fired.get());
    assert_value(&optional, &7);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn value_to_string_with_uses_function() {
    let rendered = Optional::of_value(5).to_string_with(|value| format!("<{value}>"));
    assert_eq!(rendered, "<5>");
}

#[rstest]
fn value_display_renders_value() {
    assert_eq!(Optional::of_value(5).to_string(), "5");
}

#[rstest]
fn value_unwrap_or_returns_value() {
    assert_eq!(Optional::of_value(123).unwrap_or(321), 123);
}

#[rstest]
fn value_unwrap_or_else_never_calls_getter() {
    let called = Cell::new(false);
    let value = Optional::of_value(123).unwrap_or_else(|| {
        called.set(true);
        321
    });
    assert_eq!(value, 123);
    assert!(!called.get());
}

#[rstest]
fn value_ok_or_never_uses_error() {
    assert_eq!(Optional::of_value(123).ok_or(TestError("unused")), Ok(123));
}

#[rstest]
fn value_into_value_returns_payload() {
    assert_eq!(Optional::of_value(vec![1, 2]).into_value(), Ok(vec![1, 2]));
}

#[rstest]
fn value_into_result_is_ok() {
    assert_eq!(Optional::of_value(3).into_result().unwrap(), 3);
}
