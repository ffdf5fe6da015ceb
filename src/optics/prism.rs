//! Prism optics for focusing on one branch of a sum.
//!
//! A Prism is a partial accessor: `preview` finds the focus only when the
//! source is in the right shape, and `review` builds a fresh source from a
//! focus value. `review` never sees an original source, so it rebuilds the
//! minimal structure that `preview` would match.
//!
//! # Laws
//!
//! 1. **ReviewPreview Law**: Previewing what was reviewed yields the value.
//!    ```text
//!    prism.preview(&prism.review(value.clone())) == Maybe::Just(value)
//!    ```
//!
//! 2. **PreviewReview Law**: Nothing is promised in this direction.
//!    `review` of a previewed focus need not rebuild the original source.
//!
//! # Examples
//!
//! ```
//! use opticore::control::Maybe;
//! use opticore::optics::Prism;
//! use opticore::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(&Shape::Circle(5.0)), Maybe::Just(5.0));
//! assert_eq!(circle.preview(&Shape::Square(3.0)), Maybe::Nothing);
//! assert_eq!(circle.review(10.0), Shape::Circle(10.0));
//! ```
//!
//! Over a [`Value`] tree, [`path`] reads through nested maps and records,
//! and [`path_typed`] rebuilds typed records on `review`:
//!
//! ```
//! use opticore::control::Maybe;
//! use opticore::optics::{Prism, RecordType, Value, prism};
//!
//! let user = RecordType::new("User", ["name", "profile"]);
//! let profile = RecordType::new("Profile", ["email"]);
//! let email = prism::path_typed(["profile", "email"], [user, profile]);
//!
//! let built = email.review(Value::from("ada@example.com"));
//! assert_eq!(built.type_name(), "User");
//! assert_eq!(built.get("name"), Some(&Value::Null));
//! assert_eq!(email.preview(&built), Maybe::Just(Value::from("ada@example.com")));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::value::{RecordType, Value};
use crate::control::Maybe;
use crate::typeclass::{Monoid, Semigroup};

/// A Prism focuses on a part of `S` that may be absent.
///
/// # Type Parameters
///
/// - `S`: The source type (the sum or container)
/// - `A`: The target type (the focused branch)
///
/// The trait is object safe; [`DynPrism`] is the shared trait-object form.
pub trait Prism<S, A> {
    /// Returns the focus if the source matches.
    fn preview(&self, source: &S) -> Maybe<A>;

    /// Builds a source from a focus value.
    fn review(&self, value: A) -> S;

    /// Returns `true` when `preview` matches.
    fn has(&self, source: &S) -> bool {
        self.preview(source).is_just()
    }

    /// Rewrites the focus when the source matches, otherwise returns the
    /// source unchanged.
    ///
    /// A match is rebuilt through `review`, so anything outside the focus
    /// is whatever `review` produces.
    ///
    /// # Example
    ///
    /// ```
    /// use opticore::optics::Prism;
    /// use opticore::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    /// assert_eq!(circle.over(Shape::Circle(1.0), |r| r * 2.0), Shape::Circle(2.0));
    /// assert_eq!(circle.over(Shape::Square(1.0), |r| r * 2.0), Shape::Square(1.0));
    /// ```
    fn over<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Maybe::Just(value) => self.review(function(value)),
            Maybe::Nothing => source,
        }
    }

    /// Composes this prism with a prism into its focus.
    ///
    /// `preview` must match at both levels; `review` builds inside out.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Erases the concrete type behind a shared handle.
    fn into_dyn(self) -> DynPrism<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        DynPrism::new(self)
    }
}

// =============================================================================
// FunctionPrism
// =============================================================================

/// A prism built from a preview function and a review function.
///
/// # Example
///
/// ```
/// use opticore::control::Maybe;
/// use opticore::optics::{FunctionPrism, Prism};
///
/// let even = FunctionPrism::new(
///     |n: &i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing },
///     |half: i32| half * 2,
/// );
///
/// assert_eq!(even.preview(&8), Maybe::Just(4));
/// assert_eq!(even.preview(&7), Maybe::Nothing);
/// assert_eq!(even.review(5), 10);
/// ```
pub struct FunctionPrism<S, A, P, R> {
    previewer: P,
    reviewer: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, P, R> FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Maybe<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism`.
    #[must_use]
    pub const fn new(previewer: P, reviewer: R) -> Self {
        Self {
            previewer,
            reviewer,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> Prism<S, A> for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Maybe<A>,
    R: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Maybe<A> {
        (self.previewer)(source)
    }

    fn review(&self, value: A) -> S {
        (self.reviewer)(value)
    }
}

impl<S, A, P: Clone, R: Clone> Clone for FunctionPrism<S, A, P, R> {
    fn clone(&self) -> Self {
        Self {
            previewer: self.previewer.clone(),
            reviewer: self.reviewer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> fmt::Debug for FunctionPrism<S, A, P, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedPrism
// =============================================================================

/// Two prisms chained through the intermediate type `A`.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Chains `first` (outer) and `second` (inner).
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Maybe<B> {
        self.first
            .preview(source)
            .bind(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: fmt::Debug, P2: fmt::Debug, A> fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// Identity and None
// =============================================================================

/// The prism that always matches the whole source.
pub struct IdentityPrism<S>(PhantomData<fn(S) -> S>);

/// Returns the identity prism, the unit of prism composition.
#[must_use]
pub const fn identity<S>() -> IdentityPrism<S> {
    IdentityPrism(PhantomData)
}

impl<S: Clone> Prism<S, S> for IdentityPrism<S> {
    fn preview(&self, source: &S) -> Maybe<S> {
        Maybe::Just(source.clone())
    }

    fn review(&self, value: S) -> S {
        value
    }
}

impl<S> Clone for IdentityPrism<S> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<S> Copy for IdentityPrism<S> {}

impl<S> fmt::Debug for IdentityPrism<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityPrism")
    }
}

/// The prism that never matches.
///
/// `review` discards its argument and returns `S::default()`, the neutral
/// value. Composing with `none` on either side never matches.
pub struct NonePrism<S, A>(PhantomData<fn(S) -> A>);

/// Returns the prism that never matches.
#[must_use]
pub const fn none<S, A>() -> NonePrism<S, A> {
    NonePrism(PhantomData)
}

impl<S: Default, A> Prism<S, A> for NonePrism<S, A> {
    fn preview(&self, _source: &S) -> Maybe<A> {
        Maybe::Nothing
    }

    fn review(&self, _value: A) -> S {
        S::default()
    }
}

impl<S, A> Clone for NonePrism<S, A> {
    fn clone(&self) -> Self {
        none()
    }
}

impl<S, A> Copy for NonePrism<S, A> {}

impl<S, A> fmt::Debug for NonePrism<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("NonePrism")
    }
}

// =============================================================================
// Filter and Some
// =============================================================================

/// A prism matching sources that satisfy a predicate.
pub struct FilterPrism<S, P> {
    predicate: P,
    _marker: PhantomData<fn(&S)>,
}

/// Returns a prism whose `preview` keeps the source only when `predicate`
/// holds; `review` is the identity.
///
/// `review` does not check the predicate, so the review law only holds for
/// values that satisfy it.
pub const fn filter<S, P>(predicate: P) -> FilterPrism<S, P>
where
    P: Fn(&S) -> bool,
{
    FilterPrism {
        predicate,
        _marker: PhantomData,
    }
}

impl<S: Clone, P> Prism<S, S> for FilterPrism<S, P>
where
    P: Fn(&S) -> bool,
{
    fn preview(&self, source: &S) -> Maybe<S> {
        if (self.predicate)(source) {
            Maybe::Just(source.clone())
        } else {
            Maybe::Nothing
        }
    }

    fn review(&self, value: S) -> S {
        value
    }
}

impl<S, P: Clone> Clone for FilterPrism<S, P> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, P> fmt::Debug for FilterPrism<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FilterPrism").finish_non_exhaustive()
    }
}

/// A prism onto the head of a non-empty list.
pub struct SomePrism<A>(PhantomData<fn(Vec<A>) -> A>);

/// Returns a prism that previews the first element of a list and reviews a
/// value as a singleton list.
#[must_use]
pub const fn some<A>() -> SomePrism<A> {
    SomePrism(PhantomData)
}

impl<A: Clone> Prism<Vec<A>, A> for SomePrism<A> {
    fn preview(&self, source: &Vec<A>) -> Maybe<A> {
        Maybe::from(source.first().cloned())
    }

    fn review(&self, value: A) -> Vec<A> {
        vec![value]
    }
}

impl<A> Clone for SomePrism<A> {
    fn clone(&self) -> Self {
        some()
    }
}

impl<A> Copy for SomePrism<A> {}

impl<A> fmt::Debug for SomePrism<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SomePrism")
    }
}

// =============================================================================
// Key and Path prisms over Value
// =============================================================================

/// A prism onto one field of a map or record [`Value`].
///
/// A field that is missing or `Null` does not match. `review` builds a
/// one-entry map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPrism {
    key: String,
}

/// Returns a prism onto the field `key`.
pub fn key(key: impl Into<String>) -> KeyPrism {
    KeyPrism { key: key.into() }
}

impl KeyPrism {
    /// The focused key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Prism<Value, Value> for KeyPrism {
    fn preview(&self, source: &Value) -> Maybe<Value> {
        present_field(source, &self.key)
    }

    fn review(&self, value: Value) -> Value {
        Value::map([(self.key.clone(), value)])
    }
}

/// A prism through a chain of fields.
///
/// Built by [`path`] (generic maps on review) or [`path_typed`] (typed
/// records on review where the types allow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrism {
    keys: Vec<String>,
    kinds: Vec<RecordType>,
}

/// Returns a prism through `keys`, outermost first.
///
/// Any missing or `Null` field along the way yields `Nothing`. `review`
/// rebuilds the whole chain as nested one-entry maps. An empty path
/// matches every source.
pub fn path<K, I>(keys: I) -> PathPrism
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    path_typed(keys, [])
}

/// Like [`path`], but `review` builds typed records.
///
/// `kinds[i]` is the record type of the container holding `keys[i]`. From
/// the first level where no type is given, or where the given type has no
/// such field, `review` falls back to generic maps for that level and every
/// level inside it. It never panics.
pub fn path_typed<K, I, T>(keys: I, kinds: T) -> PathPrism
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
    T: IntoIterator<Item = RecordType>,
{
    PathPrism {
        keys: keys.into_iter().map(Into::into).collect(),
        kinds: kinds.into_iter().collect(),
    }
}

impl PathPrism {
    /// The keys, outermost first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of leading levels that `review` builds as typed records.
    fn typed_depth(&self) -> usize {
        self.keys
            .iter()
            .zip(&self.kinds)
            .take_while(|(key, kind)| kind.has_field(key))
            .count()
    }
}

impl Prism<Value, Value> for PathPrism {
    fn preview(&self, source: &Value) -> Maybe<Value> {
        self.keys
            .iter()
            .try_fold(source.clone(), |current, key| {
                present_field(&current, key).to_option()
            })
            .into()
    }

    fn review(&self, value: Value) -> Value {
        let typed_depth = self.typed_depth();
        self.keys
            .iter()
            .enumerate()
            .rev()
            .fold(value, |inner, (level, key)| {
                if level < typed_depth {
                    Value::record(&self.kinds[level], [(key.as_str(), inner)])
                } else {
                    Value::map([(key.clone(), inner)])
                }
            })
    }
}

fn present_field(source: &Value, key: &str) -> Maybe<Value> {
    match source.get(key) {
        Some(value) if !value.is_null() => Maybe::Just(value.clone()),
        _ => Maybe::Nothing,
    }
}

// =============================================================================
// DynPrism
// =============================================================================

/// A shared, type-erased prism.
///
/// Endo-prisms (`DynPrism<S, S>`) form a monoid: `combine` is composition
/// and `empty` is [`identity`].
pub struct DynPrism<S, A> {
    inner: Arc<dyn Prism<S, A> + Send + Sync>,
}

impl<S, A> DynPrism<S, A> {
    /// Wraps a prism.
    pub fn new<P>(prism: P) -> Self
    where
        P: Prism<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(prism),
        }
    }
}

impl<S, A> Prism<S, A> for DynPrism<S, A> {
    fn preview(&self, source: &S) -> Maybe<A> {
        self.inner.preview(source)
    }

    fn review(&self, value: A) -> S {
        self.inner.review(value)
    }

    fn into_dyn(self) -> DynPrism<S, A> {
        self
    }
}

impl<S, A> Clone for DynPrism<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for DynPrism<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DynPrism").finish_non_exhaustive()
    }
}

impl<S: 'static> Semigroup for DynPrism<S, S> {
    fn combine(self, other: Self) -> Self {
        DynPrism::new(self.compose(other))
    }
}

impl<S: Clone + 'static> Monoid for DynPrism<S, S> {
    fn empty() -> Self {
        DynPrism::new(identity())
    }
}

/// Composes every prism in order; an empty sequence yields [`identity`].
pub fn concat<S, I>(prisms: I) -> DynPrism<S, S>
where
    S: Clone + 'static,
    I: IntoIterator<Item = DynPrism<S, S>>,
{
    <DynPrism<S, S> as Monoid>::concat(prisms)
}

static_assertions::assert_impl_all!(DynPrism<Value, Value>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PathPrism: Send, Sync);

/// Creates a prism for a single-field enum variant.
///
/// `preview` clones the payload, so it must be `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, Variant)
/// ```
///
/// # Example
///
/// ```
/// use opticore::control::Maybe;
/// use opticore::optics::Prism;
/// use opticore::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Payment {
///     Card(String),
///     Cash,
/// }
///
/// let card = prism!(Payment, Card);
/// assert_eq!(card.preview(&Payment::Card("visa".into())), Maybe::Just("visa".to_string()));
/// assert_eq!(card.preview(&Payment::Cash), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => {
                    $crate::control::Maybe::Just(::core::clone::Clone::clone(value))
                }
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => {
                    $crate::control::Maybe::Just(::core::clone::Clone::clone(value))
                }
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => {
                    $crate::control::Maybe::Just(::core::clone::Clone::clone(value))
                }
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}
