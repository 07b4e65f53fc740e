//! # optionals
//!
//! A tri-state result container for Rust.
//!
//! ## Overview
//!
//! [`Optional<T>`] carries exactly one of:
//!
//! - **Value**: a successful value of type `T`
//! - **Message**: a "soft" failure described by a non-empty message
//! - **Exception**: a "hard" failure, a message together with the error
//!   that caused it
//!
//! Failures are data, not control flow. They pass through chains of
//! [`map`](Optional::map) / [`flat_map`](Optional::flat_map) calls untouched,
//! while the `safe_*` operators turn errors returned by a mapping function
//! into exception containers. Many containers can be merged into one with
//! [`Optional::of_optionals`].
//!
//! ## Feature Flags
//!
//! - `collection`: Operators for containers holding a sequence (`filter`,
//!   `for_each`, `convert`, `collect_into`, `cast`)
//! - `tracing`: Emit `debug` events through the `tracing` crate when errors
//!   are captured or containers are aggregated
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optionals::prelude::*;
//!
//! fn parse_port(text: &str) -> Optional<u16> {
//!     Optional::of_value(text)
//!         .map(str::trim)
//!         .safe_map(|text| text.parse::<u16>())
//!         .flat_map(|port| {
//!             if port < 1024 {
//!                 Optional::of_message(format!("port {port} is reserved"))
//!             } else {
//!                 Optional::of_value(port)
//!             }
//!         })
//! }
//!
//! assert_eq!(parse_port(" 8080 ").value(), Ok(&8080));
//! assert_eq!(parse_port("80").message(), Ok("port 80 is reserved"));
//! assert!(parse_port("http").has_exception());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::debug!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
///
/// let kind: AnyOf<Kind<std::num::ParseIntError>, Kind<std::fmt::Error>> =
///     Kind::new().or(Kind::new());
/// assert!(kind.matches(&std::fmt::Error));
/// assert_eq!(LINE_SEPARATOR, "\n");
/// ```
pub mod prelude {
    pub use crate::aggregate::AggregatedError;
    pub use crate::catch::{AnyError, AnyOf, BoxError, Cause, ErrorKind, Kind};
    #[cfg(feature = "collection")]
    pub use crate::collection::Downcast;
    pub use crate::error::{ContractError, InvalidArgument};
    pub use crate::message::{FailureMessage, LINE_SEPARATOR};
    pub use crate::optional::{Failure, Optional, State};
}

mod aggregate;
mod catch;
#[cfg(feature = "collection")]
mod collection;
mod error;
mod message;
mod optional;

pub use aggregate::AggregatedError;
pub use catch::{AnyError, AnyOf, BoxError, Cause, ErrorKind, Kind};
#[cfg(feature = "collection")]
pub use collection::Downcast;
pub use error::{ContractError, InvalidArgument};
pub use message::{FailureMessage, LINE_SEPARATOR};
pub use optional::{Failure, Optional, State};

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);
static_assertions::assert_impl_all!(AggregatedError: Send, Sync, std::error::Error);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
