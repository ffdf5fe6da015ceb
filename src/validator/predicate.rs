//! Boolean predicates and their combinators.
//!
//! These are plain values: `p_all`, `p_any`, `p_none` and `p_not` build new
//! predicates from existing ones without any macro support.
//!
//! # Examples
//!
//! ```rust
//! use opticore::validator::{Predicate, p_all, p_any, p_not};
//!
//! let positive = Predicate::new(|value: &i64| *value > 0);
//! let even = Predicate::new(|value: &i64| value % 2 == 0);
//!
//! let positive_even = p_all([positive.clone(), even.clone()]);
//! assert!(positive_even.test(&4));
//! assert!(!positive_even.test(&3));
//!
//! assert!(p_any([positive.clone(), even]).test(&-2));
//! assert!(p_not(positive).test(&-1));
//! ```

use std::fmt;
use std::sync::Arc;

/// A shared boolean test over `&T`.
pub struct Predicate<T>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Predicate<T> {
    /// Wraps a closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(test))
    }

    /// Applies the predicate.
    pub fn test(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

impl<T: 'static> Predicate<T> {
    /// Both predicates hold. `other` is not consulted when `self` fails.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Either predicate holds. `other` is not consulted when `self` holds.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Negation.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |value| !self.test(value))
    }

    /// Tests a projection of `S` instead of `T`.
    ///
    /// ```rust
    /// use opticore::lens;
    /// use opticore::optics::Lens;
    /// use opticore::validator::Predicate;
    ///
    /// #[derive(Clone)]
    /// struct User { age: u32 }
    ///
    /// let age = lens!(User, age);
    /// let adult = Predicate::new(|age: &u32| *age >= 18).contramap(move |user: &User| age.view(user));
    /// assert!(adult.test(&User { age: 30 }));
    /// ```
    pub fn contramap<S, F>(self, projection: F) -> Predicate<S>
    where
        S: 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        Predicate::new(move |source: &S| self.test(&projection(source)))
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Predicate(<fn>)")
    }
}

/// Holds when every predicate holds. Vacuously `true` for none.
pub fn p_all<T, I>(predicates: I) -> Predicate<T>
where
    T: 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| predicates.iter().all(|predicate| predicate.test(value)))
}

/// Holds when at least one predicate holds. `false` for none.
pub fn p_any<T, I>(predicates: I) -> Predicate<T>
where
    T: 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| predicates.iter().any(|predicate| predicate.test(value)))
}

/// Holds when no predicate holds. `true` for none.
pub fn p_none<T, I>(predicates: I) -> Predicate<T>
where
    T: 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    p_any(predicates).not()
}

/// Negates a predicate.
pub fn p_not<T: 'static>(predicate: Predicate<T>) -> Predicate<T> {
    predicate.not()
}

static_assertions::assert_impl_all!(Predicate<String>: Send, Sync, Clone);
