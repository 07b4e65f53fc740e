//! Non-empty failure messages.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::error::{ContractError, InvalidArgument};

/// Separator placed between messages when several failures are merged.
pub const LINE_SEPARATOR: &str = "\n";

/// Used when a captured error renders to an empty description.
pub(crate) const UNDESCRIBED_ERROR: &str = "An error without a description has occurred";

/// Human-readable failure text that is guaranteed to be non-empty.
///
/// Every failure variant of [`Optional`](crate::Optional) stores one of
/// these, so a message read from a container is never blank.
///
/// # Examples
///
/// ```rust
/// use optionals::{ContractError, FailureMessage, InvalidArgument};
///
/// let message = FailureMessage::new("port out of range").unwrap();
/// assert_eq!(message.as_str(), "port out of range");
///
/// assert_eq!(
///     FailureMessage::new(""),
///     Err(ContractError::InvalidArgument(InvalidArgument::EmptyMessage))
/// );
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FailureMessage(String);

impl FailureMessage {
    /// Validates and wraps `message`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessage`] if `message` is empty.
    pub fn new(message: impl Into<String>) -> Result<Self, ContractError> {
        let message = message.into();
        if message.is_empty() {
            return Err(InvalidArgument::EmptyMessage.into());
        }
        Ok(Self(message))
    }

    /// Uses the `Display` text of `error`, falling back to a generic
    /// description when that text is empty.
    pub(crate) fn describe(error: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        Self::new(error.to_string()).unwrap_or_else(|_| Self(UNDESCRIBED_ERROR.to_string()))
    }

    /// Joins messages with [`LINE_SEPARATOR`], preserving their order.
    ///
    /// Returns `None` when `messages` is empty.
    pub(crate) fn join<I>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut messages = messages.into_iter();
        let mut joined = messages.next()?.0;
        for message in messages {
            joined.push_str(LINE_SEPARATOR);
            joined.push_str(&message.0);
        }
        Some(Self(joined))
    }

    /// Returns the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the message and returns the owned text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for FailureMessage {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FailureMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FailureMessage {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FailureMessage {
    type Error = ContractError;

    fn try_from(message: String) -> Result<Self, Self::Error> {
        Self::new(message)
    }
}

impl TryFrom<&str> for FailureMessage {
    type Error = ContractError;

    fn try_from(message: &str) -> Result<Self, Self::Error> {
        Self::new(message)
    }
}

impl From<FailureMessage> for String {
    fn from(message: FailureMessage) -> Self {
        message.0
    }
}

impl PartialEq<str> for FailureMessage {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FailureMessage {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl fmt::Debug for FailureMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}
