//! Operators for containers that hold a sequence.
//!
//! These are available on any `Optional<C>` whose payload is a collection.
//! On value containers they work on the elements; failures pass through
//! without any of the supplied functions being invoked.
//!
//! # Examples
//!
//! ```rust
//! use optionals::Optional;
//!
//! let large = Optional::of_value(vec![1, 2, 30]).filter(|value| *value > 10);
//! assert_eq!(large.value(), Ok(&vec![30]));
//! ```

use std::any::Any;

use crate::error::{ContractError, InvalidArgument};
use crate::optional::Optional;

/// Type-erased elements that can be recovered as a concrete type.
///
/// Used by [`Optional::cast`].
pub trait Downcast: Sized {
    /// Returns the element as an `S`, or gives it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` if the element is not an `S`.
    fn downcast_into<S: 'static>(self) -> Result<S, Self>;
}

impl Downcast for Box<dyn Any> {
    fn downcast_into<S: 'static>(self) -> Result<S, Self> {
        self.downcast::<S>().map(|value| *value)
    }
}

impl Downcast for Box<dyn Any + Send> {
    fn downcast_into<S: 'static>(self) -> Result<S, Self> {
        self.downcast::<S>().map(|value| *value)
    }
}

impl<C> Optional<C>
where
    C: IntoIterator + FromIterator<<C as IntoIterator>::Item>,
{
    /// Keeps only the elements matching `predicate`, in order.
    ///
    /// The result may hold an empty collection.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&C::Item) -> bool,
    {
        self.map(|collection| collection.into_iter().filter(predicate).collect())
    }

    /// Runs `action` on every element, in order, and returns the resulting
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let doubled = Optional::of_value(vec![1, 2, 3]).for_each(|value| *value *= 2);
    /// assert_eq!(doubled.value(), Ok(&vec![2, 4, 6]));
    /// ```
    #[must_use]
    pub fn for_each<F>(self, mut action: F) -> Self
    where
        F: FnMut(&mut C::Item),
    {
        self.map(|collection| {
            collection
                .into_iter()
                .map(|mut element| {
                    action(&mut element);
                    element
                })
                .collect()
        })
    }
}

impl<C: IntoIterator> Optional<C> {
    /// Replaces the whole collection with the result of `converter`.
    pub fn convert<D, F>(self, converter: F) -> Optional<D>
    where
        D: IntoIterator,
        F: FnOnce(C) -> D,
    {
        self.map(converter)
    }

    /// Re-collects the elements into another collection type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use optionals::Optional;
    ///
    /// let queue: Optional<VecDeque<i32>> = Optional::of_value([1, 2, 3]).collect_into();
    /// assert_eq!(queue.value().map(|queue| queue.len()), Ok(3));
    /// ```
    pub fn collect_into<D>(self) -> Optional<D>
    where
        D: FromIterator<C::Item>,
    {
        self.map(|collection| collection.into_iter().collect())
    }
}

impl<C> Optional<C>
where
    C: IntoIterator,
    C::Item: Downcast,
{
    /// Recovers the concrete element type `S` of a type-erased collection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NotCastable`] if any element is not an
    /// `S`. Use [`convert`](Self::convert) to change element types instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use optionals::Optional;
    ///
    /// let erased: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new(2_i32)];
    /// let numbers = Optional::of_value(erased).cast::<i32>().unwrap();
    /// assert_eq!(numbers.value(), Ok(&vec![1, 2]));
    /// ```
    pub fn cast<S: 'static>(self) -> Result<Optional<Vec<S>>, ContractError> {
        match self.split() {
            Ok(collection) => collection
                .into_iter()
                .map(|element| element.downcast_into::<S>())
                .collect::<Result<Vec<S>, _>>()
                .map(Optional::Value)
                .map_err(|_| InvalidArgument::NotCastable.into()),
            Err(failure) => Ok(failure),
        }
    }
}
