//! Either type - a right-biased choice between failure and success.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. By convention `Left` carries
//! a failure and `Right` a success; `map`, `bind` and `ap` act only on
//! `Right` and pass a `Left` through untouched. Failures are values here:
//! nothing in this module panics or unwinds to signal a `Left`, and a panic
//! raised inside a caller's closure propagates unchanged.
//!
//! Two list traversals are provided:
//!
//! - [`Either::traverse`] stops at the first `Left` (fail-fast).
//! - [`Either::traverse_a`] visits every element and merges all `Left`
//!   payloads in element order through [`Semigroup::combine`]
//!   (error-accumulating).
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Either;
//!
//! let parse = |text: &str| -> Either<Vec<String>, i32> {
//!     text.parse::<i32>()
//!         .map_err(|_| vec![format!("Invalid: {text}")])
//!         .into()
//! };
//!
//! let inputs = ["1", "invalid", "3", "bad"];
//! assert_eq!(
//!     Either::traverse(inputs, parse),
//!     Either::Left(vec!["Invalid: invalid".to_string()])
//! );
//! assert_eq!(
//!     Either::traverse_a(inputs, parse),
//!     Either::Left(vec!["Invalid: invalid".to_string(), "Invalid: bad".to_string()])
//! );
//!
//! let message = Either::<Vec<String>, i32>::Right(2)
//!     .fold(|n| format!("ok {n}"), |errors| errors.join(", "));
//! assert_eq!(message, "ok 2");
//! ```

use std::fmt;

use super::Maybe;
use crate::typeclass::Semigroup;

/// A value that is either a `Left(L)` (failure) or a `Right(R)` (success).
///
/// Any `Right` orders after any `Left`; within a variant the payloads are
/// compared.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Left` payload, if any.
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns the `Right` payload, if any.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Applies `function` to a `Right` payload; a `Left` is returned as is.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` payload.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps both sides.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a fallible computation, short-circuiting on `Left`.
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The function operand is inspected first: if it is a `Left`, that
    /// `Left` is returned whatever the argument holds. Otherwise a `Left`
    /// argument is returned, and two `Right`s yield `Right(function(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticore::control::Either;
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::Left("no function");
    /// assert_eq!(function.ap(Either::Left("no argument")), Either::Left("no function"));
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::Right(|n| n * 10);
    /// assert_eq!(function.ap(Either::Right(4)), Either::Right(40));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        R: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(function) => argument.map(function),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Collapses the `Either` by handling both variants.
    ///
    /// This is the exit point of the monad: the place where a caller turns
    /// the outcome into a concrete decision.
    #[inline]
    pub fn fold<T, F, G>(self, on_right: F, on_left: G) -> T
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    // =========================================================================
    // Recovery and Filtering
    // =========================================================================

    /// Returns the `Right` payload or `default`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Keeps a `Right`; on `Left` evaluates the alternative.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Self::Left(value) => alternative(value),
            Self::Right(_) => self,
        }
    }

    /// Turns a `Right` that fails `predicate` into `Left(on_fail(value))`.
    #[inline]
    #[must_use]
    pub fn filter_or_else<P, F>(self, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => Self::lift_predicate(value, predicate, on_fail),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Exchanges the two variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the `Left` payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the `Right` payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Lifting
    // =========================================================================

    /// Lifts `value` into `Right` when it satisfies `predicate`, otherwise
    /// into `Left(on_fail(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticore::control::Either;
    ///
    /// let checked = Either::lift_predicate(-4, |n| *n >= 0, |n| format!("{n} is negative"));
    /// assert_eq!(checked, Either::Left("-4 is negative".to_string()));
    /// ```
    #[inline]
    pub fn lift_predicate<P, F>(value: R, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        if predicate(&value) {
            Self::Right(value)
        } else {
            Self::Left(on_fail(value))
        }
    }

    /// Converts a `Maybe` into an `Either`, building the `Left` lazily.
    #[inline]
    pub fn lift_maybe<F>(maybe: Maybe<R>, on_nothing: F) -> Self
    where
        F: FnOnce() -> L,
    {
        match maybe {
            Maybe::Just(value) => Self::Right(value),
            Maybe::Nothing => Self::Left(on_nothing()),
        }
    }

    /// Drops the `Left` payload.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        self.right()
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    /// Maps every element through a Kleisli function, stopping at the first
    /// `Left`.
    pub fn traverse<A, I, F>(items: I, mut function: F) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        let mut collected = Vec::new();
        for item in items {
            match function(item) {
                Self::Left(error) => return Either::Left(error),
                Self::Right(value) => collected.push(value),
            }
        }
        Either::Right(collected)
    }

    /// [`Either::traverse`] with the identity function.
    pub fn sequence<I>(items: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::traverse(items, |either| either)
    }

    /// Maps every element through a Kleisli function and merges every
    /// `Left` in element order.
    ///
    /// Every element is evaluated even after a failure. The result is
    /// `Right` with all values in order only when no element failed.
    pub fn traverse_a<A, I, F>(items: I, mut function: F) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
        L: Semigroup,
    {
        let mut collected = Vec::new();
        let mut errors: Option<L> = None;
        for item in items {
            match function(item) {
                Self::Left(error) => {
                    errors = Some(match errors {
                        Some(accumulated) => accumulated.combine(error),
                        None => error,
                    });
                }
                Self::Right(value) => collected.push(value),
            }
        }
        match errors {
            Some(error) => Either::Left(error),
            None => Either::Right(collected),
        }
    }

    /// [`Either::traverse_a`] with the identity function.
    pub fn sequence_a<I>(items: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
        L: Semigroup,
    {
        Self::traverse_a(items, |either| either)
    }

    /// Runs every validator against `value` and merges all failures.
    ///
    /// The validators only gate the value: on success `Right(value)` is
    /// returned unchanged, whatever the validators put in their own `Right`.
    pub fn validate<B, I, F>(value: R, validators: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(&R) -> Either<L, B>,
        L: Semigroup,
    {
        let outcome = Either::<L, B>::traverse_a(validators, |validator| validator(&value));
        match outcome {
            Either::Left(errors) => Self::Left(errors),
            Either::Right(_) => Self::Right(value),
        }
    }

    /// Collects the `Right` payloads, dropping every `Left`.
    pub fn rights<I>(items: I) -> Vec<R>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .filter_map(|either| either.right().to_option())
            .collect()
    }

    /// Collects the `Left` payloads, dropping every `Right`.
    pub fn lefts<I>(items: I) -> Vec<L>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .filter_map(|either| either.left().to_option())
            .collect()
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L, R: Default> Either<L, R> {
    /// Returns the `Right` payload or `R::default()`.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(text: &str) -> Either<Vec<String>, i32> {
        text.parse::<i32>()
            .map_err(|_| vec![format!("Invalid: {text}")])
            .into()
    }

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_right_orders_after_left() {
        let left: Either<i32, i32> = Either::Left(i32::MAX);
        let right: Either<i32, i32> = Either::Right(i32::MIN);
        assert!(right > left);
    }

    #[rstest]
    fn test_ap_left_argument_with_right_function() {
        let function: Either<&str, fn(i32) -> i32> = Either::Right(|n| n + 1);
        assert_eq!(function.ap(Either::Left("argument")), Either::Left("argument"));
    }

    #[rstest]
    fn test_traverse_stops_at_first_left() {
        let mut visited = Vec::new();
        let result = Either::traverse(["1", "x", "y"], |text| {
            visited.push(text);
            parse(text)
        });
        assert_eq!(result, Either::Left(vec!["Invalid: x".to_string()]));
        assert_eq!(visited, vec!["1", "x"]);
    }

    #[rstest]
    fn test_traverse_a_visits_every_element() {
        let mut visited = 0;
        let result = Either::traverse_a(["a", "2", "b"], |text| {
            visited += 1;
            parse(text)
        });
        assert_eq!(visited, 3);
        assert_eq!(
            result,
            Either::Left(vec!["Invalid: a".to_string(), "Invalid: b".to_string()])
        );
    }

    #[rstest]
    fn test_traverse_a_all_right_keeps_order() {
        assert_eq!(Either::traverse_a(["3", "1", "2"], parse), Either::Right(vec![3, 1, 2]));
    }

    #[rstest]
    fn test_validate_returns_value_unchanged() {
        let positive = |n: &i32| -> Either<Vec<String>, ()> {
            Either::lift_predicate((), |_| *n > 0, |_| vec!["positive".to_string()])
        };
        let even = |n: &i32| -> Either<Vec<String>, ()> {
            Either::lift_predicate((), |_| n % 2 == 0, |_| vec!["even".to_string()])
        };
        let validators: Vec<&dyn Fn(&i32) -> Either<Vec<String>, ()>> = vec![&positive, &even];

        assert_eq!(Either::validate(4, validators.clone()), Either::Right(4));
        assert_eq!(
            Either::validate(-3, validators),
            Either::Left(vec!["positive".to_string(), "even".to_string()])
        );
    }

    #[rstest]
    fn test_filter_or_else_rejects_right() {
        let value: Either<String, i32> = Either::Right(5);
        let filtered = value.filter_or_else(|n| *n > 10, |n| format!("{n} too small"));
        assert_eq!(filtered, Either::Left("5 too small".to_string()));
    }

    #[rstest]
    fn test_rights_and_lefts_partition() {
        let values: Vec<Either<&str, i32>> =
            vec![Either::Right(1), Either::Left("a"), Either::Right(2)];
        assert_eq!(Either::rights(values.clone()), vec![1, 2]);
        assert_eq!(Either::lefts(values), vec!["a"]);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
