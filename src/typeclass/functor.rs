//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value while the
//! surrounding structure is preserved. For the right-biased containers of
//! this crate that means `Maybe::Nothing` and `Either::Left` pass through
//! untouched.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Either;
//! use opticore::typeclass::Functor;
//!
//! let success: Either<String, i32> = Either::Right(5);
//! assert_eq!(success.fmap(|n| n * 2), Either::Right(10));
//!
//! let failure: Either<String, i32> = Either::Left("boom".to_string());
//! assert_eq!(failure.fmap(|n| n * 2), Either::Left("boom".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for types that can be mapped over.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<E, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}
