//! Contract violations raised by the container API.
//!
//! These errors describe programming mistakes (an empty failure message, an
//! empty aggregation input, reading the payload of an inactive variant).
//! They are never used to carry domain failures; those live inside
//! [`Optional::Message`](crate::Optional::Message) and
//! [`Optional::Exception`](crate::Optional::Exception).

use thiserror::Error;

use crate::optional::State;

/// Reason attached to [`ContractError::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use optionals::InvalidArgument;
///
/// assert_eq!(
///     InvalidArgument::EmptyMessage.to_string(),
///     "The Optional's message must not be empty"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgument {
    /// A failure message (or the description of a captured error) was empty.
    #[error("The Optional's message must not be empty")]
    EmptyMessage,
    /// Aggregation was asked to combine zero containers.
    #[error("The provided optional collection must not be empty")]
    EmptyCollection,
    /// A sequence could not be reinterpreted as the requested element type.
    #[error(
        "The collection contained in the optional cannot be cast to the target type, use convert instead"
    )]
    NotCastable,
}

/// A violated usage contract of [`Optional`](crate::Optional).
///
/// # Examples
///
/// ```rust
/// use optionals::{ContractError, Optional, State};
///
/// let optional: Optional<i32> = Optional::of_message("parse failed");
/// assert_eq!(
///     optional.value(),
///     Err(ContractError::UnsupportedAccess(State::Value))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContractError {
    /// An argument failed validation before the operation ran.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The payload of a variant that is not active was requested.
    #[error("This Optional does not contain {}", .0.article())]
    UnsupportedAccess(State),
}

impl ContractError {
    /// Returns `true` for [`ContractError::InvalidArgument`].
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`ContractError::UnsupportedAccess`].
    #[inline]
    pub const fn is_unsupported_access(&self) -> bool {
        matches!(self, Self::UnsupportedAccess(_))
    }
}
