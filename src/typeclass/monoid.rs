//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! Endo-optics (`DynLens<S, S>`, `DynPrism<S, S>`, `DynIso<S, S>`) are
//! monoids under composition with the identity optic as `empty`, so a list
//! of them can be collapsed with [`Monoid::concat`].
//!
//! # Examples
//!
//! ```rust
//! use opticore::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine("hi".to_string()), "hi");
//! assert_eq!(Vec::<i32>::concat(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
//! ```

use super::Identity;
use super::Semigroup;

#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element in order, starting from `empty`.
    fn concat<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

#[cfg(feature = "control")]
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Nothing
    }
}
