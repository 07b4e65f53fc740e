//! Selection of the errors a safe operator captures.
//!
//! [`Optional::safe_map`](crate::Optional::safe_map) and friends turn an
//! `Err` returned by the mapping function into an
//! [`Optional::Exception`](crate::Optional::Exception). The `*_catching`
//! variants take an [`ErrorKind`] that decides, per error, whether it is
//! captured or handed back to the caller.
//!
//! # Examples
//!
//! ```rust
//! use std::num::ParseIntError;
//! use optionals::{Kind, Optional};
//!
//! let parsed = Optional::of_value("forty-two")
//!     .safe_map_catching(Kind::<ParseIntError>::new(), |text| text.parse::<i32>())
//!     .unwrap();
//! assert!(parsed.has_exception());
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Shared handle to the error held by an exception container.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Owned, boxed error returned by mapping functions.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Decides whether an error raised by a mapping function is captured.
pub trait ErrorKind {
    /// Returns `true` if `error` should become an exception container.
    fn matches(&self, error: &(dyn Error + Send + Sync + 'static)) -> bool;

    /// Captures what either `self` or `other` captures.
    fn or<K: ErrorKind>(self, other: K) -> AnyOf<Self, K>
    where
        Self: Sized,
    {
        AnyOf {
            first: self,
            second: other,
        }
    }
}

/// Captures every error. This is the kind used by the non-`catching`
/// safe operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyError;

impl ErrorKind for AnyError {
    #[inline]
    fn matches(&self, _error: &(dyn Error + Send + Sync + 'static)) -> bool {
        true
    }
}

/// Captures errors whose concrete type is `K`.
///
/// # Examples
///
/// ```rust
/// use std::num::ParseIntError;
/// use optionals::{ErrorKind, Kind};
///
/// let error = "x".parse::<u8>().unwrap_err();
/// assert!(Kind::<ParseIntError>::new().matches(&error));
/// assert!(!Kind::<std::fmt::Error>::new().matches(&error));
/// ```
pub struct Kind<K>(PhantomData<fn() -> K>);

impl<K> Kind<K> {
    /// Creates the kind selector for `K`.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K> Default for Kind<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Kind<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Kind<K> {}

impl<K> fmt::Debug for Kind<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Kind<{}>", std::any::type_name::<K>())
    }
}

impl<K: Error + 'static> ErrorKind for Kind<K> {
    #[inline]
    fn matches(&self, error: &(dyn Error + Send + Sync + 'static)) -> bool {
        // `Box<K>` is itself an error, so a function returning `Result<_, Box<K>>`
        // ends up boxed twice.
        error.is::<K>() || error.is::<Box<K>>()
    }
}

/// Union of two kinds, built with [`ErrorKind::or`].
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<A, B> {
    first: A,
    second: B,
}

impl<A: ErrorKind, B: ErrorKind> ErrorKind for AnyOf<A, B> {
    fn matches(&self, error: &(dyn Error + Send + Sync + 'static)) -> bool {
        self.first.matches(error) || self.second.matches(error)
    }
}

impl<F> ErrorKind for F
where
    F: Fn(&(dyn Error + Send + Sync + 'static)) -> bool,
{
    #[inline]
    fn matches(&self, error: &(dyn Error + Send + Sync + 'static)) -> bool {
        self(error)
    }
}
