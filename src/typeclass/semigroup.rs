//! Semigroup type class - types with an associative binary operation.
//!
//! The error-accumulating combinators of this crate (`traverse_a`,
//! `sequence_a`, `validate`, `Each`) merge their failures through
//! `Semigroup::combine`, always in element order: the earlier failure is
//! the receiver, the later one the argument.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticore::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use super::Identity;

#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values associatively.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning both.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces a sequence of values, returning `None` when it is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

// =============================================================================
// Maybe Implementation
// =============================================================================

/// `Nothing` is neutral: combining with it returns the other operand.
#[cfg(feature = "control")]
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}
