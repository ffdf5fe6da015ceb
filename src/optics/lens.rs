//! Lens optics for focusing on a single field.
//!
//! A Lens is a total accessor: `view` always finds the focus and `set`
//! always writes it back, leaving every other part of the structure alone.
//! Lenses compose, so a deep field is reached by chaining shallow ones.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Setting what was viewed changes nothing.
//!    ```text
//!    lens.set(source.clone(), lens.view(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Viewing what was set yields the set value.
//!    ```text
//!    lens.view(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **PutPut Law**: Only the last of two consecutive sets matters.
//!    ```text
//!    lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use opticore::optics::Lens;
//! use opticore::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```
//!
//! Over a [`Value`] tree, [`key`] focuses a named field and keeps the
//! record's type and siblings on write:
//!
//! ```
//! use opticore::optics::{Lens, RecordType, Value, lens};
//!
//! let city = RecordType::new("City", ["name", "zip"]);
//! let paris = Value::record(&city, [("name", Value::from("Paris")), ("zip", Value::from(75001))]);
//!
//! let renamed = lens::key("name").set(paris, Value::from("Lyon"));
//! assert_eq!(renamed.get("name"), Some(&Value::from("Lyon")));
//! assert_eq!(renamed.get("zip"), Some(&Value::from(75001)));
//! assert_eq!(renamed.type_name(), "City");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::error::OpticError;
use super::value::Value;
use crate::typeclass::{Monoid, Semigroup};

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// The trait is object safe; [`DynLens`] is the shared trait-object form.
pub trait Lens<S, A> {
    /// Reads the focused field.
    fn view(&self, source: &S) -> A;

    /// Returns a new source with the focused field replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to `set(source, function(view(&source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use opticore::optics::Lens;
    /// use opticore::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let name_lens = lens!(Person, name);
    /// let person = Person { name: "alice".to_string(), age: 30 };
    /// let upper = name_lens.over(person, |name| name.to_uppercase());
    /// assert_eq!(upper.name, "ALICE");
    /// ```
    fn over<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        let current = self.view(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with a lens into its focus.
    ///
    /// Viewing reads through `self` then `other`; setting rewrites the
    /// inner focus and writes the intermediate value back through `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use opticore::optics::Lens;
    /// use opticore::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
    /// };
    ///
    /// assert_eq!(person_street.view(&person), "Main St");
    /// let moved = person_street.set(person, "Oak Ave".to_string());
    /// assert_eq!(moved.address.city, "Tokyo");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Erases the concrete type behind a shared handle.
    fn into_dyn(self) -> DynLens<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        DynLens::new(self)
    }
}

// =============================================================================
// FunctionLens
// =============================================================================

/// A lens built from a view function and a set function.
///
/// The `lens!` macro and `#[derive(Lenses)]` both expand to this.
///
/// # Example
///
/// ```
/// use opticore::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.view(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, V, St> {
    viewer: V,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, V, St> FunctionLens<S, A, V, St>
where
    V: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a view and a set function.
    #[must_use]
    pub const fn new(viewer: V, setter: St) -> Self {
        Self {
            viewer,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, St> Lens<S, A> for FunctionLens<S, A, V, St>
where
    V: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn view(&self, source: &S) -> A {
        (self.viewer)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, V: Clone, St: Clone> Clone for FunctionLens<S, A, V, St> {
    fn clone(&self) -> Self {
        Self {
            viewer: self.viewer.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, V, St> fmt::Debug for FunctionLens<S, A, V, St> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedLens
// =============================================================================

/// Two lenses chained through the intermediate type `A`.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `first` (outer) and `second` (inner).
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn view(&self, source: &S) -> B {
        self.second.view(&self.first.view(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.view(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The lens whose focus is the whole structure.
pub struct IdentityLens<S>(PhantomData<fn(S) -> S>);

/// Returns the identity lens: `view(s) = s` and `set(s, a) = a`.
///
/// It is the unit of lens composition.
#[must_use]
pub const fn identity<S>() -> IdentityLens<S> {
    IdentityLens(PhantomData)
}

impl<S: Clone> Lens<S, S> for IdentityLens<S> {
    fn view(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S> Clone for IdentityLens<S> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<S> Copy for IdentityLens<S> {}

impl<S> fmt::Debug for IdentityLens<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityLens")
    }
}

// =============================================================================
// KeyLens
// =============================================================================

/// A lens onto one field of a map or record [`Value`].
///
/// The field must exist. Viewing or setting a missing field is a
/// contract violation and panics with an [`OpticError`]; use
/// [`KeyLens::try_view`] and [`KeyLens::try_set`] to check first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLens {
    key: String,
}

/// Returns a lens onto the field `key`.
pub fn key(key: impl Into<String>) -> KeyLens {
    KeyLens { key: key.into() }
}

impl KeyLens {
    /// The focused key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the field, reporting why it cannot be read.
    ///
    /// # Errors
    ///
    /// [`OpticError::MissingKey`] when the map or record lacks the field,
    /// [`OpticError::NotARecord`] when the value has no fields at all.
    pub fn try_view(&self, source: &Value) -> Result<Value, OpticError> {
        if !source.is_keyed() {
            return Err(self.not_a_record(source));
        }
        source.get(&self.key).cloned().ok_or_else(|| self.missing())
    }

    /// Replaces the field, keeping the record type and every sibling.
    ///
    /// # Errors
    ///
    /// Same conditions as [`KeyLens::try_view`].
    pub fn try_set(&self, source: Value, value: Value) -> Result<Value, OpticError> {
        match source {
            Value::Map(mut entries) => match entries.get_mut(&self.key) {
                Some(slot) => {
                    *slot = value;
                    Ok(Value::Map(entries))
                }
                None => Err(self.missing()),
            },
            Value::Record(record) => record
                .with(&self.key, value)
                .map(Value::Record)
                .ok_or_else(|| self.missing()),
            other => Err(self.not_a_record(&other)),
        }
    }

    fn missing(&self) -> OpticError {
        OpticError::MissingKey {
            key: self.key.clone(),
        }
    }

    fn not_a_record(&self, found: &Value) -> OpticError {
        OpticError::NotARecord {
            key: self.key.clone(),
            found: found.type_name().to_string(),
        }
    }
}

impl Lens<Value, Value> for KeyLens {
    fn view(&self, source: &Value) -> Value {
        self.try_view(source)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    fn set(&self, source: Value, value: Value) -> Value {
        self.try_set(source, value)
            .unwrap_or_else(|error| panic!("{error}"))
    }
}

// =============================================================================
// DynLens
// =============================================================================

/// A shared, type-erased lens.
///
/// Cloning is cheap. Endo-lenses (`DynLens<S, S>`) form a monoid: `combine`
/// is composition and `empty` is [`identity`].
pub struct DynLens<S, A> {
    inner: Arc<dyn Lens<S, A> + Send + Sync>,
}

impl<S, A> DynLens<S, A> {
    /// Wraps a lens.
    pub fn new<L>(lens: L) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(lens),
        }
    }
}

impl<S, A> Lens<S, A> for DynLens<S, A> {
    fn view(&self, source: &S) -> A {
        self.inner.view(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set(source, value)
    }

    fn into_dyn(self) -> DynLens<S, A> {
        self
    }
}

impl<S, A> Clone for DynLens<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for DynLens<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DynLens").finish_non_exhaustive()
    }
}

impl<S: 'static> Semigroup for DynLens<S, S> {
    fn combine(self, other: Self) -> Self {
        DynLens::new(self.compose(other))
    }
}

impl<S: Clone + 'static> Monoid for DynLens<S, S> {
    fn empty() -> Self {
        DynLens::new(identity())
    }
}

/// Composes every lens in order; an empty sequence yields [`identity`].
pub fn concat<S, I>(lenses: I) -> DynLens<S, S>
where
    S: Clone + 'static,
    I: IntoIterator<Item = DynLens<S, S>>,
{
    <DynLens<S, S> as Monoid>::concat(lenses)
}

static_assertions::assert_impl_all!(DynLens<Value, Value>: Send, Sync, Clone);
static_assertions::assert_impl_all!(KeyLens: Send, Sync);

/// Creates a lens for a struct field.
///
/// The generated [`FunctionLens`] clones the field on `view`, so the field
/// type must be `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use opticore::optics::Lens;
/// use opticore::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.view(&point), 10);
/// assert_eq!(x_lens.set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
