//! Applicative type class - applying functions within containers.
//!
//! `Applicative` extends `Functor` with `pure` (lifting a plain value) and
//! with the ability to combine independent wrapped values.
//!
//! For `Either`, every combinator evaluates its receiver first: when both
//! operands are `Left`, the receiver's `Left` (the function side for
//! [`Applicative::apply`]) is the one returned.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Maybe;
//! use opticore::typeclass::Applicative;
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//! ```

use super::functor::Functor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a wrapped function to a wrapped argument.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Pairs two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, discarding the right one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, discarding the left one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<E, A> Applicative for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => {
                Either::Left(error)
            }
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<E, B>) -> Either<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_apply_requires_both() {
        let function: Option<fn(i32) -> i32> = Some(|n| n + 1);
        assert_eq!(function.apply(Some(1)), Some(2));
        assert_eq!(function.apply(None), None);
    }

    #[rstest]
    fn identity_product_pairs_values() {
        assert_eq!(Identity(1).product(Identity("a")), Identity((1, "a")));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_map2_prefers_receiver_left() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(first.map2(second, |a, b| a + b), Either::Left("first"));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_apply_function_left_wins() {
        let function: Either<&str, fn(i32) -> i32> = Either::Left("no function");
        let argument: Either<&str, i32> = Either::Left("no argument");
        assert_eq!(function.apply(argument), Either::Left("no function"));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_product_right_discards_left_value() {
        assert_eq!(Maybe::Just(1).product_right(Maybe::Just("b")), Maybe::Just("b"));
        assert_eq!(Maybe::<i32>::Nothing.product_right(Maybe::Just("b")), Maybe::Nothing);
    }
}
