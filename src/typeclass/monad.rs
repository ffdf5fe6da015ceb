//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets each step
//! depend on the value produced by the previous one. For `Maybe` and
//! `Either` the chain stops at the first `Nothing` or `Left`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Either;
//! use opticore::typeclass::Monad;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|_| format!("Invalid: {text}"))
//!         .into()
//! }
//!
//! let doubled = Either::<String, &str>::Right("21")
//!     .flat_map(parse)
//!     .flat_map(|n| Either::Right(n * 2));
//! assert_eq!(doubled, Either::Right(42));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for sequencing dependent computations.
pub trait Monad: Applicative {
    /// Chains a computation that returns the same kind of container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Either<E, A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<E, A> Monad for Either<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.bind(function)
    }
}
