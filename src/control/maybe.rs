//! Maybe type - an optional value with explicit absence.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It is the absence marker
//! threaded through the optics and the validator engine: a prism that does
//! not match yields `Nothing`, and every validator except `Required` lets
//! `Nothing` through as "not applicable".
//!
//! `Maybe` converts losslessly to and from `Option`; it exists as a
//! separate type so that absence has a single, explicit representation
//! across the crate and so that it can carry its own type class instances.
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Maybe;
//!
//! let port = Maybe::Just("8080")
//!     .bind(|text| Maybe::from(text.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, Maybe::Just(8080));
//!
//! let missing: Maybe<u16> = Maybe::Nothing;
//! assert_eq!(missing.get_or_else(80), 80);
//! ```

use super::Either;

/// An optional value: `Just(T)` or `Nothing`.
///
/// `Nothing` orders before every `Just`; two `Just` values order by their
/// payload.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value is present.
    Nothing,
    /// A value is present.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Wraps a value in `Just`.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Applies `function` to a `Just` payload.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticore::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
    /// assert_eq!(Maybe::Just(8).bind(half).bind(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(6).bind(half).bind(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The result is `Just` only when both operands are `Just`.
    #[inline]
    pub fn ap<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        T: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Collapses the `Maybe` by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticore::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|n| format!("got {n}"), || "none".to_string());
    /// assert_eq!(describe(Maybe::Just(1)), "got 1");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns the payload or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the payload or computes a fallback.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Keeps a `Just`, otherwise evaluates the alternative.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative(),
        }
    }

    /// Keeps a `Just` only if its payload satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.into()
    }

    /// Converts into an `Either`, producing the `Left` lazily on `Nothing`.
    #[inline]
    pub fn to_either<E, F>(self, on_nothing: F) -> Either<E, T>
    where
        F: FnOnce() -> E,
    {
        Either::lift_maybe(self, on_nothing)
    }

    /// Wraps `value` in `Just` when it satisfies `predicate`.
    #[inline]
    pub fn lift_predicate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Just(value)
        } else {
            Self::Nothing
        }
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    /// Maps every element through `function`, stopping at the first
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticore::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::traverse(["1", "2"], parse), Maybe::Just(vec![1, 2]));
    /// assert_eq!(Maybe::traverse(["1", "x"], parse), Maybe::Nothing);
    /// ```
    pub fn traverse<A, I, F>(items: I, mut function: F) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        let mut collected = Vec::new();
        for item in items {
            match function(item) {
                Self::Just(value) => collected.push(value),
                Self::Nothing => return Maybe::Nothing,
            }
        }
        Maybe::Just(collected)
    }

    /// Turns a list of `Maybe`s into a `Maybe` of a list.
    pub fn sequence<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::traverse(items, |maybe| maybe)
    }

    /// Keeps the `Just` payloads, dropping every `Nothing`.
    pub fn justs<I>(items: I) -> Vec<T>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().filter_map(Self::to_option).collect()
    }

    /// Maps every element and keeps the `Just` results.
    pub fn concat_map<A, I, F>(items: I, mut function: F) -> Vec<T>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        items
            .into_iter()
            .filter_map(|item| function(item).to_option())
            .collect()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}
