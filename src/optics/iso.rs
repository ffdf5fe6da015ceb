//! Iso optics for lossless conversions.
//!
//! An Iso pairs `view: S -> A` with `review: A -> S`, two mutual inverses.
//! It is the strongest optic: every Iso is also a total Lens and an
//! always-matching Prism.
//!
//! # Laws
//!
//! 1. **ViewReview Law**: `iso.review(iso.view(source.clone())) == source`
//! 2. **ReviewView Law**: `iso.view(iso.review(value.clone())) == value`
//!
//! The laws are not checked at runtime. An Iso built from functions that
//! are not inverses still runs; it just produces wrong answers.
//!
//! # Examples
//!
//! ```
//! use opticore::optics::{FunctionIso, Iso};
//!
//! let chars = FunctionIso::new(
//!     |text: String| text.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! assert_eq!(chars.view("hey".to_string()), vec!['h', 'e', 'y']);
//! assert_eq!(chars.review(vec!['o', 'k']), "ok");
//!
//! let shouted = chars.under(vec!['a', 'b'], |text| text.to_uppercase());
//! assert_eq!(shouted, vec!['A', 'B']);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Lens, Prism};
use crate::control::Maybe;
use crate::typeclass::{Monoid, Semigroup};

/// A lossless, reversible conversion between `S` and `A`.
///
/// The trait is object safe; [`DynIso`] is the shared trait-object form.
pub trait Iso<S, A> {
    /// Converts forward.
    fn view(&self, source: S) -> A;

    /// Converts backward.
    fn review(&self, value: A) -> S;

    /// Modifies a source through its converted form:
    /// `review(function(view(source)))`.
    fn over<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        self.review(function(self.view(source)))
    }

    /// Modifies a converted value through its source form:
    /// `view(function(review(value)))`.
    fn under<F>(&self, value: A, function: F) -> A
    where
        Self: Sized,
        F: FnOnce(S) -> S,
    {
        self.view(function(self.review(value)))
    }

    /// Swaps the two directions.
    ///
    /// # Example
    ///
    /// ```
    /// use opticore::optics::Iso;
    /// use opticore::iso;
    ///
    /// let celsius_to_kelvin = iso!(|c: i64| c + 273, |k: i64| k - 273);
    /// let kelvin_to_celsius = celsius_to_kelvin.reverse();
    /// assert_eq!(kelvin_to_celsius.view(300), 27);
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this iso with an iso from its target.
    ///
    /// `view` runs left to right and `review` right to left.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Views this iso as a total lens whose `set` ignores the old source and
    /// rebuilds it with `review`.
    fn to_lens(self) -> IsoAsLens<Self>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this iso as a prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }

    /// Erases the concrete type behind a shared handle.
    fn into_dyn(self) -> DynIso<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        DynIso::new(self)
    }
}

/// Borrowing form of [`Iso::to_lens`].
pub fn as_lens<S, A, I>(iso: &I) -> IsoAsLens<I>
where
    I: Iso<S, A> + Clone,
{
    iso.clone().to_lens()
}

/// Borrowing form of [`Iso::to_prism`].
pub fn as_prism<S, A, I>(iso: &I) -> IsoAsPrism<I>
where
    I: Iso<S, A> + Clone,
{
    iso.clone().to_prism()
}

// =============================================================================
// FunctionIso
// =============================================================================

/// An iso built from a forward and a backward function.
pub struct FunctionIso<S, A, V, R> {
    viewer: V,
    reviewer: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, V, R> FunctionIso<S, A, V, R>
where
    V: Fn(S) -> A,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionIso`.
    #[must_use]
    pub const fn new(viewer: V, reviewer: R) -> Self {
        Self {
            viewer,
            reviewer,
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, R> Iso<S, A> for FunctionIso<S, A, V, R>
where
    V: Fn(S) -> A,
    R: Fn(A) -> S,
{
    fn view(&self, source: S) -> A {
        (self.viewer)(source)
    }

    fn review(&self, value: A) -> S {
        (self.reviewer)(value)
    }
}

impl<S, A, V: Clone, R: Clone> Clone for FunctionIso<S, A, V, R> {
    fn clone(&self) -> Self {
        Self {
            viewer: self.viewer.clone(),
            reviewer: self.reviewer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, R> fmt::Debug for FunctionIso<S, A, V, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Identity, Reversed and Composed
// =============================================================================

/// The iso that converts nothing.
pub struct IdentityIso<S>(PhantomData<fn(S) -> S>);

/// Returns the identity iso, the unit of iso composition.
#[must_use]
pub const fn identity<S>() -> IdentityIso<S> {
    IdentityIso(PhantomData)
}

impl<S> Iso<S, S> for IdentityIso<S> {
    fn view(&self, source: S) -> S {
        source
    }

    fn review(&self, value: S) -> S {
        value
    }
}

impl<S> Clone for IdentityIso<S> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<S> Copy for IdentityIso<S> {}

impl<S> fmt::Debug for IdentityIso<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityIso")
    }
}

/// An iso with its directions swapped.
#[derive(Debug, Clone, Copy)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the original iso.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn view(&self, source: A) -> S {
        self.inner.review(source)
    }

    fn review(&self, value: S) -> A {
        self.inner.view(value)
    }
}

/// Two isos chained through the intermediate type `A`.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn() -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn view(&self, source: S) -> B {
        self.second.view(self.first.view(source))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: fmt::Debug, I2: fmt::Debug, A> fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// Conversions to Lens and Prism
// =============================================================================

/// An iso used as a lens. `view` clones the source before converting.
#[derive(Debug, Clone, Copy)]
pub struct IsoAsLens<I> {
    iso: I,
}

impl<I> IsoAsLens<I> {
    /// Wraps `iso`.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S: Clone, A, I: Iso<S, A>> Lens<S, A> for IsoAsLens<I> {
    fn view(&self, source: &S) -> A {
        self.iso.view(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.review(value)
    }
}

/// An iso used as a prism. `preview` always matches.
#[derive(Debug, Clone, Copy)]
pub struct IsoAsPrism<I> {
    iso: I,
}

impl<I> IsoAsPrism<I> {
    /// Wraps `iso`.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S: Clone, A, I: Iso<S, A>> Prism<S, A> for IsoAsPrism<I> {
    fn preview(&self, source: &S) -> Maybe<A> {
        Maybe::Just(self.iso.view(source.clone()))
    }

    fn review(&self, value: A) -> S {
        self.iso.review(value)
    }
}

// =============================================================================
// DynIso
// =============================================================================

/// A shared, type-erased iso.
///
/// Endo-isos (`DynIso<S, S>`) form a monoid: `combine` is composition and
/// `empty` is [`identity`].
pub struct DynIso<S, A> {
    inner: Arc<dyn Iso<S, A> + Send + Sync>,
}

impl<S, A> DynIso<S, A> {
    /// Wraps an iso.
    pub fn new<I>(iso: I) -> Self
    where
        I: Iso<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(iso),
        }
    }
}

impl<S, A> Iso<S, A> for DynIso<S, A> {
    fn view(&self, source: S) -> A {
        self.inner.view(source)
    }

    fn review(&self, value: A) -> S {
        self.inner.review(value)
    }

    fn into_dyn(self) -> DynIso<S, A> {
        self
    }
}

impl<S, A> Clone for DynIso<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for DynIso<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DynIso").finish_non_exhaustive()
    }
}

impl<S: 'static> Semigroup for DynIso<S, S> {
    fn combine(self, other: Self) -> Self {
        DynIso::new(self.compose(other))
    }
}

impl<S: 'static> Monoid for DynIso<S, S> {
    fn empty() -> Self {
        DynIso::new(identity())
    }
}

/// Composes every iso in order; an empty sequence yields [`identity`].
pub fn concat<S, I>(isos: I) -> DynIso<S, S>
where
    S: 'static,
    I: IntoIterator<Item = DynIso<S, S>>,
{
    <DynIso<S, S> as Monoid>::concat(isos)
}

static_assertions::assert_impl_all!(DynIso<i64, i64>: Send, Sync, Clone);

/// Creates a [`FunctionIso`] from a forward and a backward closure.
///
/// # Example
///
/// ```
/// use opticore::optics::Iso;
/// use opticore::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// assert_eq!(swap.view((1, "x".to_string())), ("x".to_string(), 1));
/// ```
#[macro_export]
macro_rules! iso {
    ($view:expr, $review:expr $(,)?) => {
        $crate::optics::FunctionIso::new($view, $review)
    };
}
