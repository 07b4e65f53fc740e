//! Assertion helpers shared by the integration tests.

#![allow(dead_code)]

use std::fmt;

use optionals::{ContractError, Optional, State};

/// A plain error type whose kind tests can select on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError(pub &'static str);

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

impl std::error::Error for TestError {}

/// A second error type, used where a kind must not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherError(pub &'static str);

impl fmt::Display for OtherError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

impl std::error::Error for OtherError {}

pub fn assert_value<T: PartialEq + fmt::Debug>(optional: &Optional<T>, expected: &T) {
    assert_value_state(optional);
    assert_eq!(optional.value(), Ok(expected));
}

pub fn assert_value_state<T>(optional: &Optional<T>) {
    assert!(optional.has_value());
    assert!(!optional.has_message());
    assert!(!optional.has_exception());

    assert_eq!(
        optional.message().unwrap_err(),
        ContractError::UnsupportedAccess(State::Message)
    );
    assert_eq!(
        optional.exception().unwrap_err(),
        ContractError::UnsupportedAccess(State::Exception)
    );
}

pub fn assert_message<T: fmt::Debug>(optional: &Optional<T>, expected: &str) {
    assert_message_state(optional);
    assert_eq!(optional.message(), Ok(expected));
}

pub fn assert_message_state<T: fmt::Debug>(optional: &Optional<T>) {
    assert!(!optional.has_value());
    assert!(optional.has_message());
    assert!(!optional.has_exception());

    assert_eq!(
        optional.value().unwrap_err(),
        ContractError::UnsupportedAccess(State::Value)
    );
    assert_eq!(
        optional.exception().unwrap_err(),
        ContractError::UnsupportedAccess(State::Exception)
    );
}

pub fn assert_exception_state<T: fmt::Debug>(optional: &Optional<T>) {
    assert!(!optional.has_value());
    assert!(optional.has_message());
    assert!(optional.has_exception());

    assert_eq!(
        optional.value().unwrap_err(),
        ContractError::UnsupportedAccess(State::Value)
    );
    assert!(optional.exception().is_ok());
    assert!(!optional.message().unwrap().is_empty());
}

/// Asserts an exception container whose cause is an `E` and whose message
/// is `expected`.
pub fn assert_exception<T, E>(optional: &Optional<T>, expected: &str)
where
    T: fmt::Debug,
    E: std::error::Error + 'static,
{
    assert_exception_state(optional);
    assert!(
        optional.exception().unwrap().is::<E>(),
        "cause is not a {}",
        std::any::type_name::<E>()
    );
    assert_eq!(optional.message(), Ok(expected));
}
