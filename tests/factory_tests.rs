//! Tests for the constructors of `Optional`.

mod common;

use std::fmt;
use std::sync::Arc;

use common::{TestError, assert_exception, assert_message, assert_value};
use optionals::{Cause, ContractError, FailureMessage, InvalidArgument, Optional};
use rstest::rstest;

const EMPTY_MESSAGE: ContractError = ContractError::InvalidArgument(InvalidArgument::EmptyMessage);

#[derive(Debug)]
struct SilentError;

impl fmt::Display for SilentError {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl std::error::Error for SilentError {}

#[rstest]
fn of_value_creates_value() {
    assert_value(&Optional::of_value(123), &123);
}

#[rstest]
fn of_message_creates_message() {
    assert_message(&Optional::<i32>::of_message("Test message"), "Test message");
}

#[rstest]
fn of_exception_uses_error_text() {
    let optional = Optional::<i32>::of_exception(TestError("Not implemented"));
    assert_exception::<_, TestError>(&optional, "Not implemented");
}

#[rstest]
fn of_exception_with_uses_custom_message() {
    let optional = Optional::<i32>::of_exception_with(TestError("Not implemented"), "Test message");
    assert_exception::<_, TestError>(&optional, "Test message");
}

#[rstest]
fn of_cause_shares_cause() {
    let cause: Cause = Arc::new(TestError("shared"));
    let message = FailureMessage::new("wrapped").unwrap();
    let optional = Optional::<i32>::of_cause(Arc::clone(&cause), message);
    assert!(Arc::ptr_eq(optional.exception().unwrap(), &cause));
    assert_exception::<_, TestError>(&optional, "wrapped");
}

#[rstest]
fn try_of_message_rejects_empty() {
    assert_eq!(Optional::<i32>::try_of_message("").unwrap_err(), EMPTY_MESSAGE);
}

#[rstest]
fn try_of_exception_rejects_silent_error() {
    assert_eq!(Optional::<i32>::try_of_exception(SilentError).unwrap_err(), EMPTY_MESSAGE);
}

#[rstest]
fn try_of_exception_with_rejects_empty_message() {
    assert_eq!(
        Optional::<i32>::try_of_exception_with(TestError("fine"), String::new()).unwrap_err(),
        EMPTY_MESSAGE
    );
}

#[rstest]
fn try_of_exception_with_accepts_silent_error_with_message() {
    let optional = Optional::<i32>::try_of_exception_with(SilentError, "described").unwrap();
    assert_exception::<_, SilentError>(&optional, "described");
}

#[rstest]
#[should_panic(expected = "The Optional's message must not be empty")]
fn of_message_panics_on_empty() {
    let _ = Optional::<i32>::of_message("");
}

#[rstest]
#[should_panic(expected = "The Optional's message must not be empty")]
fn of_exception_panics_on_silent_error() {
    let _ = Optional::<i32>::of_exception(SilentError);
}

#[rstest]
#[should_panic(expected = "The Optional's message must not be empty")]
fn of_exception_with_panics_on_empty_message() {
    let _ = Optional::<i32>::of_exception_with(TestError("fine"), "");
}

#[rstest]
fn safe_map_describes_silent_errors() {
    let optional: Optional<i32> = Optional::of_value(1).safe_map(|_| Err(SilentError));
    assert_exception::<_, SilentError>(&optional, "An error without a description has occurred");
}

#[rstest]
fn from_result_converts_both_sides() {
    let ok: Optional<i32> = Ok::<_, TestError>(5).into();
    assert_value(&ok, &5);

    let err: Optional<i32> = Err::<i32, _>(TestError("from result")).into();
    assert_exception::<_, TestError>(&err, "from result");
}
