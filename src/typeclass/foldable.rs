//! Foldable type class - folding over data structures.
//!
//! `Maybe` folds over zero or one element, `Either` over its `Right`
//! payload only, and `Identity` over exactly one element.
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Maybe;
//! use opticore::typeclass::Foldable;
//!
//! assert_eq!(Maybe::Just(10).fold_left(5, |total, n| total + n), 15);
//! assert_eq!(Maybe::<i32>::Nothing.fold_left(5, |total, n| total + n), 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for structures that can be reduced to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Counts the elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }
}

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }
}

#[cfg(feature = "control")]
impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Just(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, init),
            Self::Nothing => init,
        }
    }
}

#[cfg(feature = "control")]
impl<E, A> Foldable for Either<E, A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Right(value) => function(init, value),
            Self::Left(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Right(value) => function(value, init),
            Self::Left(_) => init,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_to_list_has_one_element() {
        assert_eq!(Identity("x").to_list(), vec!["x"]);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_left_folds_to_initial_value() {
        let left: Either<&str, i32> = Either::Left("e");
        assert_eq!(left.fold_right(7, |n, total| n + total), 7);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_fold_map_uses_monoid() {
        let folded: String = Maybe::Just(3).fold_map(|n: i32| n.to_string());
        assert_eq!(folded, "3");
        assert_eq!(Maybe::Just(1).length(), 1);
        assert_eq!(Maybe::<i32>::Nothing.length(), 0);
    }
}
