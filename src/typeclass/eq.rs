//! Equality as a pluggable capability.
//!
//! `EqBy<T>` decides whether two values are equal without relying on the
//! type's own `PartialEq`. [`Structural`] is the default and simply defers
//! to `PartialEq`; other comparators can be built from closures
//! ([`EqFn`]) or by comparing a projection of the value
//! ([`eq_contramap`]), which pairs naturally with a lens view.
//!
//! # Examples
//!
//! ```rust
//! use opticore::typeclass::{EqBy, Structural, eq_contramap};
//!
//! assert!(Structural.eq(&3, &3));
//!
//! let by_length = eq_contramap(|text: &String| text.len(), Structural);
//! assert!(by_length.eq(&"abc".to_string(), &"xyz".to_string()));
//! assert!(by_length.not_eq(&"abc".to_string(), &"xy".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A comparator deciding equality between two values of `T`.
pub trait EqBy<T: ?Sized> {
    /// Returns `true` when both values are equal under this comparator.
    fn eq(&self, left: &T, right: &T) -> bool;

    /// Negation of [`EqBy::eq`].
    fn not_eq(&self, left: &T, right: &T) -> bool {
        !self.eq(left, right)
    }
}

/// Structural comparison through the type's own `PartialEq`/`Ord`.
///
/// This is the comparator used whenever none is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T: PartialEq + ?Sized> EqBy<T> for Structural {
    fn eq(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Equality defined by a closure.
#[derive(Clone, Copy)]
pub struct EqFn<F>(pub F);

impl<T: ?Sized, F> EqBy<T> for EqFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn eq(&self, left: &T, right: &T) -> bool {
        (self.0)(left, right)
    }
}

impl<F> fmt::Debug for EqFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("EqFn").finish_non_exhaustive()
    }
}

/// Equality of `T` obtained by comparing a projection `B` of each value.
pub struct EqContramap<C, F, B> {
    projection: F,
    inner: C,
    _marker: PhantomData<fn() -> B>,
}

impl<T, B, C, F> EqBy<T> for EqContramap<C, F, B>
where
    C: EqBy<B>,
    F: Fn(&T) -> B,
{
    fn eq(&self, left: &T, right: &T) -> bool {
        self.inner
            .eq(&(self.projection)(left), &(self.projection)(right))
    }
}

impl<C: Clone, F: Clone, B> Clone for EqContramap<C, F, B> {
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C: fmt::Debug, F, B> fmt::Debug for EqContramap<C, F, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EqContramap")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builds an equality on `T` that compares `projection(value)` with `inner`.
pub const fn eq_contramap<T, B, C, F>(projection: F, inner: C) -> EqContramap<C, F, B>
where
    C: EqBy<B>,
    F: Fn(&T) -> B,
{
    EqContramap {
        projection,
        inner,
        _marker: PhantomData,
    }
}

/// Lifts an element equality to `Maybe`: two `Nothing`s are equal, a
/// `Nothing` never equals a `Just`.
#[cfg(feature = "control")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeEq<C>(pub C);

#[cfg(feature = "control")]
impl<T, C: EqBy<T>> EqBy<Maybe<T>> for MaybeEq<C> {
    fn eq(&self, left: &Maybe<T>, right: &Maybe<T>) -> bool {
        match (left, right) {
            (Maybe::Just(left), Maybe::Just(right)) => self.0.eq(left, right),
            (Maybe::Nothing, Maybe::Nothing) => true,
            _ => false,
        }
    }
}

/// Shorthand for [`MaybeEq`].
#[cfg(feature = "control")]
pub const fn maybe_eq<C>(inner: C) -> MaybeEq<C> {
    MaybeEq(inner)
}

/// Lifts two payload equalities to `Either`; values in different variants
/// are never equal.
#[cfg(feature = "control")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherEq<L, R> {
    left: L,
    right: R,
}

#[cfg(feature = "control")]
impl<E, A, L: EqBy<E>, R: EqBy<A>> EqBy<Either<E, A>> for EitherEq<L, R> {
    fn eq(&self, left: &Either<E, A>, right: &Either<E, A>) -> bool {
        match (left, right) {
            (Either::Left(first), Either::Left(second)) => self.left.eq(first, second),
            (Either::Right(first), Either::Right(second)) => self.right.eq(first, second),
            _ => false,
        }
    }
}

/// Shorthand for [`EitherEq`].
#[cfg(feature = "control")]
pub const fn either_eq<L, R>(left: L, right: R) -> EitherEq<L, R> {
    EitherEq { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn structural_defers_to_partial_eq() {
        assert!(Structural.eq("a", "a"));
        assert!(Structural.not_eq(&1.0, &2.0));
    }

    #[rstest]
    fn eq_fn_uses_closure() {
        let case_insensitive =
            EqFn(|left: &str, right: &str| left.eq_ignore_ascii_case(right));
        assert!(case_insensitive.eq("Hello", "hELLO"));
    }

    #[rstest]
    fn contramap_compares_projection() {
        let by_first = eq_contramap(|pair: &(i32, char)| pair.0, Structural);
        assert!(by_first.eq(&(1, 'a'), &(1, 'b')));
        assert!(!by_first.eq(&(1, 'a'), &(2, 'a')));
    }

    #[cfg(feature = "control")]
    #[rstest]
    #[case(Maybe::Just(1), Maybe::Just(1), true)]
    #[case(Maybe::Just(1), Maybe::Just(2), false)]
    #[case(Maybe::Just(1), Maybe::Nothing, false)]
    #[case(Maybe::Nothing, Maybe::Nothing, true)]
    fn maybe_eq_lifts_inner(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(maybe_eq(Structural).eq(&left, &right), expected);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_eq_distinguishes_variants() {
        let comparator = either_eq(Structural, Structural);
        let left: Either<i32, i32> = Either::Left(1);
        let right: Either<i32, i32> = Either::Right(1);
        assert!(!comparator.eq(&left, &right));
        assert!(comparator.eq(&right, &Either::Right(1)));
    }
}
