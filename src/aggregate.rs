//! Folding many containers into one.
//!
//! [`Optional::of_optionals`] merges a sequence of containers by strict
//! priority: any exception wins over any message, and any message wins over
//! values. Nothing is dropped along the way; every cause ends up in an
//! [`AggregatedError`] and every message in the joined text.
//!
//! # Examples
//!
//! ```rust
//! use optionals::Optional;
//!
//! let all_good = Optional::of_optionals(vec![
//!     Optional::of_value(1),
//!     Optional::of_value(2),
//! ])
//! .unwrap();
//! assert_eq!(all_good.value(), Ok(&vec![1, 2]));
//!
//! let some_bad = Optional::of_optionals(vec![
//!     Optional::of_value(1),
//!     Optional::of_message("second is missing"),
//!     Optional::of_message("third is missing"),
//! ])
//! .unwrap();
//! assert_eq!(
//!     some_bad.message(),
//!     Ok("second is missing\nthird is missing")
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::catch::Cause;
use crate::error::{ContractError, InvalidArgument};
use crate::message::FailureMessage;
use crate::optional::Optional;

/// Every cause collected while aggregating containers, in input order.
///
/// The plain `Display` text is a short summary. The alternate form (`{:#}`)
/// lists each underlying error, separated by blank lines.
///
/// # Examples
///
/// ```rust
/// use optionals::{AggregatedError, Optional};
///
/// let merged: Optional<Vec<i32>> = Optional::of_optionals(vec![
///     Optional::of_exception(std::fmt::Error),
///     Optional::of_value(3),
/// ])
/// .unwrap();
///
/// let cause = merged.exception().unwrap();
/// let aggregated = cause.downcast_ref::<AggregatedError>().unwrap();
/// assert_eq!(aggregated.len(), 1);
/// assert_eq!(aggregated.to_string(), "1 error(s) have occurred");
/// ```
///
/// Only [`Optional::of_optionals`] creates one:
///
/// ```compile_fail
/// use optionals::AggregatedError;
///
/// let empty = AggregatedError::new(Vec::new());
/// ```
#[derive(Debug, Clone)]
pub struct AggregatedError {
    errors: Vec<Cause>,
}

impl AggregatedError {
    /// Wraps `errors`, keeping their order.
    pub(crate) fn new(errors: Vec<Cause>) -> Self {
        Self { errors }
    }

    /// Returns the wrapped errors.
    #[inline]
    pub fn errors(&self) -> &[Cause] {
        &self.errors
    }

    /// Returns the wrapped errors by value.
    #[inline]
    pub fn into_errors(self) -> Vec<Cause> {
        self.errors
    }

    /// Returns the number of wrapped errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no errors are wrapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregatedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} error(s) have occurred", self.errors.len())?;
        if formatter.alternate() {
            formatter.write_str(":")?;
            for (index, error) in self.errors.iter().enumerate() {
                let separator = if index == 0 { "\n" } else { "\n\n" };
                write!(formatter, "{separator}{error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for AggregatedError {}

impl<T> Optional<Vec<T>> {
    /// Merges `items` into a single container.
    ///
    /// - If any item is an exception, the result is an exception whose cause
    ///   is an [`AggregatedError`] holding every item cause, and whose message
    ///   joins those items' messages with a line separator.
    /// - Otherwise, if any item is a message, the result is a message joining
    ///   all item messages.
    /// - Otherwise the result holds every value.
    ///
    /// Order is preserved in all three cases.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyCollection`] if `items` is empty.
    pub fn of_optionals<I>(items: I) -> Result<Self, ContractError>
    where
        I: IntoIterator<Item = Optional<T>>,
    {
        let mut values = Vec::new();
        let mut messages = Vec::new();
        let mut causes = Vec::new();
        let mut exception_messages = Vec::new();

        for item in items {
            match item {
                Optional::Value(value) => values.push(value),
                Optional::Message(message) => messages.push(message),
                Optional::Exception { cause, message } => {
                    causes.push(cause);
                    exception_messages.push(message);
                }
            }
        }

        let count = values.len() + messages.len() + causes.len();
        let merged = if let Some(message) = FailureMessage::join(exception_messages) {
            Self::of_cause(Arc::new(AggregatedError::new(causes)), message)
        } else if let Some(message) = FailureMessage::join(messages) {
            Self::Message(message)
        } else if count > 0 {
            Self::Value(values)
        } else {
            return Err(InvalidArgument::EmptyCollection.into());
        };

        trace_event!(state = %merged.state(), items = count, "aggregated optionals");
        Ok(merged)
    }
}
