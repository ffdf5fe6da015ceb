//! Total ordering as a pluggable capability.
//!
//! `OrdBy<T>` is the ordering counterpart of [`EqBy`](super::EqBy).
//! [`Structural`] orders through `Ord`, [`OrdFn`] wraps a closure, and
//! [`ord_contramap`] orders by a projection. Comparators combine
//! lexicographically with [`ord_then`] and flip with [`ord_reverse`].
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use opticore::typeclass::{OrdBy, Structural, ord_contramap, ord_then};
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let by_age = ord_contramap(|person: &Person| person.age, Structural);
//! let by_name = ord_contramap(|person: &Person| person.name, Structural);
//! let ordering = ord_then(by_age, by_name);
//!
//! let bob = Person { name: "bob", age: 30 };
//! let alice = Person { name: "alice", age: 30 };
//! let carol = Person { name: "carol", age: 41 };
//!
//! assert_eq!(ordering.compare(&bob, &alice), Ordering::Greater);
//! assert_eq!(ordering.max(&bob, &carol).name, "carol");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::eq::Structural;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A comparator defining a total order over `T`.
pub trait OrdBy<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// `left < right`.
    fn lt(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// `left <= right`.
    fn le(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// `left > right`.
    fn gt(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// `left >= right`.
    fn ge(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    /// Returns the smaller value; ties favour `left`.
    fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.gt(left, right) { right } else { left }
    }

    /// Returns the larger value; ties favour `left`.
    fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.lt(left, right) { right } else { left }
    }

    /// Restricts `value` to the inclusive range `[low, high]`.
    fn clamp<'a>(&self, value: &'a T, low: &'a T, high: &'a T) -> &'a T {
        self.min(self.max(value, low), high)
    }

    /// Returns `true` when `low <= value <= high`.
    fn between(&self, value: &T, low: &T, high: &T) -> bool {
        self.ge(value, low) && self.le(value, high)
    }
}

impl<T: Ord + ?Sized> OrdBy<T> for Structural {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Ordering defined by a closure.
#[derive(Clone, Copy)]
pub struct OrdFn<F>(pub F);

impl<T: ?Sized, F> OrdBy<T> for OrdFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left, right)
    }
}

impl<F> fmt::Debug for OrdFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OrdFn").finish_non_exhaustive()
    }
}

/// The reverse of an ordering.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

/// Flips an ordering.
pub const fn ord_reverse<C>(inner: C) -> Reversed<C> {
    Reversed(inner)
}

impl<T: ?Sized, C: OrdBy<T>> OrdBy<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Lexicographic combination of two orderings.
#[derive(Debug, Clone, Copy)]
pub struct Then<C, O> {
    first: C,
    next: O,
}

/// Orders with `first`, breaking ties with `next`.
pub const fn ord_then<C, O>(first: C, next: O) -> Then<C, O> {
    Then { first, next }
}

impl<T: ?Sized, C: OrdBy<T>, O: OrdBy<T>> OrdBy<T> for Then<C, O> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.first
            .compare(left, right)
            .then_with(|| self.next.compare(left, right))
    }
}

/// Ordering of `T` obtained by ordering a projection `B` of each value.
pub struct OrdContramap<C, F, B> {
    projection: F,
    inner: C,
    _marker: PhantomData<fn() -> B>,
}

impl<T, B, C, F> OrdBy<T> for OrdContramap<C, F, B>
where
    C: OrdBy<B>,
    F: Fn(&T) -> B,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.inner
            .compare(&(self.projection)(left), &(self.projection)(right))
    }
}

impl<C: Clone, F: Clone, B> Clone for OrdContramap<C, F, B> {
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C: fmt::Debug, F, B> fmt::Debug for OrdContramap<C, F, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrdContramap")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builds an ordering on `T` that orders `projection(value)` with `inner`.
pub const fn ord_contramap<T, B, C, F>(projection: F, inner: C) -> OrdContramap<C, F, B>
where
    C: OrdBy<B>,
    F: Fn(&T) -> B,
{
    OrdContramap {
        projection,
        inner,
        _marker: PhantomData,
    }
}

/// Lifts an element ordering to `Maybe`; `Nothing` sorts before any `Just`.
#[cfg(feature = "control")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeOrd<C>(pub C);

#[cfg(feature = "control")]
impl<T, C: OrdBy<T>> OrdBy<Maybe<T>> for MaybeOrd<C> {
    fn compare(&self, left: &Maybe<T>, right: &Maybe<T>) -> Ordering {
        match (left, right) {
            (Maybe::Just(left), Maybe::Just(right)) => self.0.compare(left, right),
            (Maybe::Nothing, Maybe::Just(_)) => Ordering::Less,
            (Maybe::Just(_), Maybe::Nothing) => Ordering::Greater,
            (Maybe::Nothing, Maybe::Nothing) => Ordering::Equal,
        }
    }
}

/// Shorthand for [`MaybeOrd`].
#[cfg(feature = "control")]
pub const fn maybe_ord<C>(inner: C) -> MaybeOrd<C> {
    MaybeOrd(inner)
}

/// Lifts payload orderings to `Either`; any `Right` sorts after any `Left`.
#[cfg(feature = "control")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherOrd<L, R> {
    left: L,
    right: R,
}

#[cfg(feature = "control")]
impl<E, A, L: OrdBy<E>, R: OrdBy<A>> OrdBy<Either<E, A>> for EitherOrd<L, R> {
    fn compare(&self, left: &Either<E, A>, right: &Either<E, A>) -> Ordering {
        match (left, right) {
            (Either::Left(first), Either::Left(second)) => self.left.compare(first, second),
            (Either::Right(first), Either::Right(second)) => self.right.compare(first, second),
            (Either::Left(_), Either::Right(_)) => Ordering::Less,
            (Either::Right(_), Either::Left(_)) => Ordering::Greater,
        }
    }
}

/// Shorthand for [`EitherOrd`].
#[cfg(feature = "control")]
pub const fn either_ord<L, R>(left: L, right: R) -> EitherOrd<L, R> {
    EitherOrd { left, right }
}
