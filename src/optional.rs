//! The tri-state result container.
//!
//! An [`Optional<T>`] holds exactly one of:
//!
//! - a value of type `T` ([`Optional::Value`]),
//! - a non-empty failure message ([`Optional::Message`]),
//! - a failure message together with the error that caused it
//!   ([`Optional::Exception`]).
//!
//! Operators consume the container and return a new one, so failures flow
//! through a chain of transformations without any of the mapping functions
//! being invoked.
//!
//! # Examples
//!
//! ```rust
//! use optionals::Optional;
//!
//! let port = Optional::of_value("8080")
//!     .safe_map(|text| text.parse::<u16>())
//!     .map(|port| port + 1);
//! assert_eq!(port.value(), Ok(&8081));
//!
//! let broken = Optional::of_value("eighty")
//!     .safe_map(|text| text.parse::<u16>())
//!     .map(|port| port + 1);
//! assert!(broken.has_exception());
//! assert_eq!(broken.message(), Ok("invalid digit found in string"));
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::catch::{AnyError, BoxError, Cause, ErrorKind};
use crate::error::ContractError;
use crate::message::FailureMessage;

/// The active variant of an [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// A value is present.
    Value,
    /// Only a failure message is present.
    Message,
    /// A failure message and its underlying error are present.
    Exception,
}

impl State {
    pub(crate) const fn article(self) -> &'static str {
        match self {
            Self::Value => "a value",
            Self::Message => "a message",
            Self::Exception => "an error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Value => "value",
            Self::Message => "message",
            Self::Exception => "exception",
        };
        formatter.write_str(name)
    }
}

/// A value, a failure message, or a failure message with its cause.
///
/// # Examples
///
/// ```rust
/// use optionals::{Optional, State};
///
/// let value = Optional::of_value(42);
/// assert_eq!(value.state(), State::Value);
///
/// let message: Optional<i32> = Optional::of_message("no input");
/// assert_eq!(message.state(), State::Message);
///
/// let exception: Optional<i32> = Optional::of_exception(std::fmt::Error);
/// assert_eq!(exception.state(), State::Exception);
/// ```
pub enum Optional<T> {
    /// A successful value.
    Value(T),
    /// A soft failure, described by a message only.
    Message(FailureMessage),
    /// A hard failure: a message and the error that caused it.
    Exception {
        /// The captured error.
        cause: Cause,
        /// Description of the failure.
        message: FailureMessage,
    },
}

/// The failure side of an [`Optional`], produced by
/// [`Optional::into_result`].
#[derive(Debug, Clone)]
pub enum Failure {
    /// See [`Optional::Message`].
    Message(FailureMessage),
    /// See [`Optional::Exception`].
    Exception {
        /// The captured error.
        cause: Cause,
        /// Description of the failure.
        message: FailureMessage,
    },
}

impl Failure {
    /// Returns the failure message.
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) | Self::Exception { message, .. } => message.as_str(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Message(_) => None,
            Self::Exception { cause, .. } => Some(&**cause),
        }
    }
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a successful value.
    #[inline]
    pub const fn of_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates a message container.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. Use [`Optional::try_of_message`] to
    /// handle that case.
    pub fn of_message(message: impl Into<String>) -> Self {
        match Self::try_of_message(message) {
            Ok(optional) => optional,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a message container.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessage`](crate::InvalidArgument::EmptyMessage)
    /// if `message` is empty.
    pub fn try_of_message(message: impl Into<String>) -> Result<Self, ContractError> {
        FailureMessage::new(message).map(Self::Message)
    }

    /// Creates an exception container whose message is the `Display` text
    /// of `error`.
    ///
    /// # Panics
    ///
    /// Panics if `error` renders to an empty string.
    pub fn of_exception<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match Self::try_of_exception(error) {
            Ok(optional) => optional,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an exception container whose message is the `Display` text
    /// of `error`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessage`](crate::InvalidArgument::EmptyMessage)
    /// if `error` renders to an empty string.
    pub fn try_of_exception<E>(error: E) -> Result<Self, ContractError>
    where
        E: Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::try_of_exception_with(error, message)
    }

    /// Creates an exception container with a custom message.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn of_exception_with<E>(error: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match Self::try_of_exception_with(error, message) {
            Ok(optional) => optional,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an exception container with a custom message.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessage`](crate::InvalidArgument::EmptyMessage)
    /// if `message` is empty.
    pub fn try_of_exception_with<E>(
        error: E,
        message: impl Into<String>,
    ) -> Result<Self, ContractError>
    where
        E: Error + Send + Sync + 'static,
    {
        let message = FailureMessage::new(message)?;
        Ok(Self::of_cause(Arc::new(error), message))
    }

    /// Creates an exception container from an already shared cause.
    #[inline]
    pub const fn of_cause(cause: Cause, message: FailureMessage) -> Self {
        Self::Exception { cause, message }
    }

    /// Captures a boxed error, describing it with its own `Display` text.
    pub(crate) fn captured(error: BoxError) -> Self {
        let message = FailureMessage::describe(&*error);
        Self::of_cause(Arc::from(error), message)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns the active variant.
    #[inline]
    pub const fn state(&self) -> State {
        match self {
            Self::Value(_) => State::Value,
            Self::Message(_) => State::Message,
            Self::Exception { .. } => State::Exception,
        }
    }

    /// Returns `true` if this container holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this container holds a message. Exception
    /// containers always hold a message too.
    #[inline]
    pub const fn has_message(&self) -> bool {
        !self.has_value()
    }

    /// Returns `true` if this container holds a captured error.
    #[inline]
    pub const fn has_exception(&self) -> bool {
        matches!(self, Self::Exception { .. })
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedAccess`] unless
    /// [`has_value`](Self::has_value) holds.
    pub fn value(&self) -> Result<&T, ContractError> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(ContractError::UnsupportedAccess(State::Value)),
        }
    }

    /// Returns the value, consuming the container.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedAccess`] unless
    /// [`has_value`](Self::has_value) holds.
    pub fn into_value(self) -> Result<T, ContractError> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(ContractError::UnsupportedAccess(State::Value)),
        }
    }

    /// Returns the failure message.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedAccess`] unless
    /// [`has_message`](Self::has_message) holds.
    pub fn message(&self) -> Result<&str, ContractError> {
        match self {
            Self::Message(message) | Self::Exception { message, .. } => Ok(message.as_str()),
            Self::Value(_) => Err(ContractError::UnsupportedAccess(State::Message)),
        }
    }

    /// Returns the captured error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedAccess`] unless
    /// [`has_exception`](Self::has_exception) holds.
    pub fn exception(&self) -> Result<&Cause, ContractError> {
        match self {
            Self::Exception { cause, .. } => Ok(cause),
            _ => Err(ContractError::UnsupportedAccess(State::Exception)),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Splits off the value, retyping a failure so it can be returned as is.
    #[inline]
    pub(crate) fn split<S>(self) -> Result<T, Optional<S>> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Message(message) => Err(Optional::Message(message)),
            Self::Exception { cause, message } => Err(Optional::Exception { cause, message }),
        }
    }

    /// Applies `function` to the value. Failures are retyped and passed on;
    /// `function` is not called for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of_value(21).map(|x| x * 2).value(), Ok(&42));
    ///
    /// let failed: Optional<i32> = Optional::of_message("missing");
    /// assert_eq!(failed.map(|x| x * 2).message(), Ok("missing"));
    /// ```
    #[inline]
    pub fn map<S, F>(self, function: F) -> Optional<S>
    where
        F: FnOnce(T) -> S,
    {
        match self.split() {
            Ok(value) => Optional::Value(function(value)),
            Err(failure) => failure,
        }
    }

    /// Applies a fallible `function` to the value without capturing its
    /// error: an `Err` is returned to the caller untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever error `function` returns.
    pub fn try_map<S, E, F>(self, function: F) -> Result<Optional<S>, E>
    where
        F: FnOnce(T) -> Result<S, E>,
    {
        match self.split() {
            Ok(value) => function(value).map(Optional::Value),
            Err(failure) => Ok(failure),
        }
    }

    /// Applies `function`, which itself returns a container, to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let halve = |x: i32| {
    ///     if x % 2 == 0 {
    ///         Optional::of_value(x / 2)
    ///     } else {
    ///         Optional::of_message(format!("{x} is odd"))
    ///     }
    /// };
    /// assert_eq!(Optional::of_value(8).flat_map(halve).value(), Ok(&4));
    /// assert_eq!(Optional::of_value(7).flat_map(halve).message(), Ok("7 is odd"));
    /// ```
    #[inline]
    pub fn flat_map<S, F>(self, function: F) -> Optional<S>
    where
        F: FnOnce(T) -> Optional<S>,
    {
        match self.split() {
            Ok(value) => function(value),
            Err(failure) => failure,
        }
    }

    /// Applies a fallible `function` to the value, turning any error it
    /// returns into an exception container.
    pub fn safe_map<S, E, F>(self, function: F) -> Optional<S>
    where
        F: FnOnce(T) -> Result<S, E>,
        E: Into<BoxError>,
    {
        self.safe_flat_map(|value| function(value).map(Optional::Value))
    }

    /// Like [`safe_map`](Self::safe_map), but only errors selected by `kind`
    /// are captured.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `function` when `kind` does not match
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use optionals::{BoxError, Kind, Optional};
    ///
    /// let captured = Optional::of_value("abc")
    ///     .safe_map_catching(Kind::<ParseIntError>::new(), |text| text.parse::<u8>())
    ///     .unwrap();
    /// assert!(captured.has_exception());
    ///
    /// let escaped = Optional::of_value("abc").safe_map_catching(
    ///     Kind::<std::fmt::Error>::new(),
    ///     |text| text.parse::<u8>(),
    /// );
    /// assert!(escaped.is_err());
    /// ```
    pub fn safe_map_catching<S, K, E, F>(self, kind: K, function: F) -> Result<Optional<S>, BoxError>
    where
        K: ErrorKind,
        F: FnOnce(T) -> Result<S, E>,
        E: Into<BoxError>,
    {
        self.safe_flat_map_catching(kind, |value| function(value).map(Optional::Value))
    }

    /// Applies a fallible, container-returning `function` to the value,
    /// turning any error it returns into an exception container. A
    /// container returned by `function` is passed on unchanged.
    pub fn safe_flat_map<S, E, F>(self, function: F) -> Optional<S>
    where
        F: FnOnce(T) -> Result<Optional<S>, E>,
        E: Into<BoxError>,
    {
        match self.safe_flat_map_catching(AnyError, function) {
            Ok(optional) => optional,
            // AnyError matches every error.
            Err(error) => Optional::captured(error),
        }
    }

    /// Like [`safe_flat_map`](Self::safe_flat_map), but only errors selected
    /// by `kind` are captured.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `function` when `kind` does not match
    /// it.
    pub fn safe_flat_map_catching<S, K, E, F>(
        self,
        kind: K,
        function: F,
    ) -> Result<Optional<S>, BoxError>
    where
        K: ErrorKind,
        F: FnOnce(T) -> Result<Optional<S>, E>,
        E: Into<BoxError>,
    {
        let value = match self.split() {
            Ok(value) => value,
            Err(failure) => return Ok(failure),
        };
        match function(value) {
            Ok(optional) => Ok(optional),
            Err(error) => {
                let error = error.into();
                if kind.matches(&*error) {
                    trace_event!(captured = true, error = %error, "safe operator captured an error");
                    Ok(Optional::captured(error))
                } else {
                    trace_event!(captured = false, error = %error, "safe operator let an error escape");
                    Err(error)
                }
            }
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the value, allowing it to be modified in place.
    /// Failures are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let names = Optional::of_value(vec!["b", "a"]).apply(|names| names.sort());
    /// assert_eq!(names.value(), Ok(&vec!["a", "b"]));
    /// ```
    #[must_use]
    pub fn apply<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut T),
    {
        if let Self::Value(value) = &mut self {
            action(value);
        }
        self
    }

    /// Runs `action` if this container holds a value.
    #[must_use]
    pub fn if_has_value<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if this container holds a message, which includes
    /// exception containers.
    #[must_use]
    pub fn if_has_message<F>(self, action: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let Self::Message(message) | Self::Exception { message, .. } = &self {
            action(message.as_str());
        }
        self
    }

    /// Runs `action` if this container holds a captured error.
    #[must_use]
    pub fn if_has_exception<F>(self, action: F) -> Self
    where
        F: FnOnce(&Cause),
    {
        if let Self::Exception { cause, .. } = &self {
            action(cause);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Renders the value with `function`, or returns the failure message.
    pub fn to_string_with<F>(&self, function: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            Self::Value(value) => function(value),
            Self::Message(message) | Self::Exception { message, .. } => message.to_string(),
        }
    }

    /// Returns the value, or `fallback` for failures.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Value(value) => value,
            _ => fallback,
        }
    }

    /// Returns the value, or the result of `getter` for failures. `getter`
    /// is only evaluated when needed.
    #[inline]
    pub fn unwrap_or_else<F>(self, getter: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Value(value) => value,
            _ => getter(),
        }
    }

    /// Returns the value, or `error` for failures. The container's own
    /// message and cause are discarded.
    ///
    /// # Errors
    ///
    /// Returns `error` unless this container holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// assert_eq!(Optional::of_value(123).ok_or("unused"), Ok(123));
    ///
    /// let failed: Optional<i32> = Optional::of_message("missing");
    /// assert_eq!(failed.ok_or("replacement"), Err("replacement"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(error),
        }
    }

    /// Returns the value, or the error built by `function` for failures.
    ///
    /// # Errors
    ///
    /// Returns the result of `function` unless this container holds a value.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(function()),
        }
    }

    /// Converts into a `Result` whose error side keeps the message and
    /// cause.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] unless this container holds a value.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Message(message) => Err(Failure::Message(message)),
            Self::Exception { cause, message } => Err(Failure::Exception { cause, message }),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Message(message) => Self::Message(message.clone()),
            Self::Exception { cause, message } => Self::Exception {
                cause: Arc::clone(cause),
                message: message.clone(),
            },
        }
    }
}

/// Exceptions compare equal when their messages match and they share the
/// same cause.
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(left), Self::Value(right)) => left == right,
            (Self::Message(left), Self::Message(right)) => left == right,
            (
                Self::Exception {
                    cause: left_cause,
                    message: left_message,
                },
                Self::Exception {
                    cause: right_cause,
                    message: right_message,
                },
            ) => left_message == right_message && Arc::ptr_eq(left_cause, right_cause),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Message(message) => formatter.debug_tuple("Message").field(message).finish(),
            Self::Exception { cause, message } => formatter
                .debug_struct("Exception")
                .field("cause", cause)
                .field("message", message)
                .finish(),
        }
    }
}

/// Renders the value, or the failure message.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, formatter),
            Self::Message(message) | Self::Exception { message, .. } => {
                formatter.write_str(message.as_str())
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Optional<T>
where
    E: Error + Send + Sync + 'static,
{
    /// `Ok` becomes a value container and `Err` an exception container.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::captured(Box::new(error)),
        }
    }
}
