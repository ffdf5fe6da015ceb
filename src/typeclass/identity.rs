//! Identity wrapper type - the identity monad.
//!
//! `Identity` adds no effect at all. It is the simplest instance of the
//! `Functor`/`Applicative`/`Monad` hierarchy and serves as a baseline when
//! checking the type class laws.

use super::TypeConstructor;

/// A transparent wrapper around a single value.
///
/// # Examples
///
/// ```rust
/// use opticore::typeclass::Identity;
///
/// let value = Identity::new(20).map(|n| n + 1).bind(|n| Identity::new(n * 2));
/// assert_eq!(value.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies a function to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Chains a function that returns another `Identity`.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
