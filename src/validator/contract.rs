//! The validator contract, its shared boxed form and the validation
//! environment.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::ValidationError;
use crate::control::{Either, Maybe};
use crate::optics::Value;

/// Read-only context handed to every validator.
///
/// Validators may consult it (for example to compare against a configured
/// limit) but never change it.
///
/// # Examples
///
/// ```rust
/// use opticore::optics::Value;
/// use opticore::validator::Environment;
///
/// let env = Environment::new().with("max_items", 3);
/// assert_eq!(env.get("max_items"), Some(&Value::Int(3)));
/// assert_eq!(env.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    entries: BTreeMap<String, Value>,
}

impl Environment {
    /// An empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns a copy with `key` bound to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up a binding.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over the bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self {
            entries: iterator
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// A check that gates a possibly absent value.
///
/// `Nothing` means the value is not present. Every validator except
/// [`Required`](super::Required) treats absence as success and returns
/// `Right(Nothing)`. On success a validator returns its input unchanged;
/// validators gate values, they never transform them.
///
/// The trait is dyn-compatible, so heterogeneous validators share one list
/// through [`BoxedValidator`].
pub trait Validator<T> {
    /// Checks `value` in `env`.
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>>;

    /// Erases the concrete validator type.
    fn boxed(self) -> BoxedValidator<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedValidator(Arc::new(self))
    }
}

/// A shared, type-erased validator.
pub struct BoxedValidator<T>(Arc<dyn Validator<T> + Send + Sync>);

impl<T> BoxedValidator<T> {
    /// Boxes `validator`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<T> + Send + Sync + 'static,
    {
        Self(Arc::new(validator))
    }
}

impl<T> Validator<T> for BoxedValidator<T> {
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>> {
        self.0.validate(value, env)
    }

    fn boxed(self) -> BoxedValidator<T> {
        self
    }
}

impl<T> Clone for BoxedValidator<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for BoxedValidator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BoxedValidator(<validator>)")
    }
}

static_assertions::assert_impl_all!(BoxedValidator<i64>: Send, Sync, Clone);

/// Runs every validator against `value` and accumulates every failure.
///
/// Returns `Right(value)` unchanged when all validators pass, otherwise one
/// `Left` carrying every message in validator order. An empty validator
/// list passes.
///
/// # Examples
///
/// ```rust
/// use opticore::control::Either;
/// use opticore::validator::{Environment, MinLength, Positive, Range, Validator, validate};
///
/// let env = Environment::new();
/// assert_eq!(validate(5, &[Positive.boxed(), Range::at_most(10).boxed()], &env), Either::Right(5));
///
/// let failed = validate(-20, &[Positive.boxed(), Range::at_least(-10).boxed()], &env);
/// assert_eq!(
///     failed.unwrap_left().messages(),
///     ["must be positive", "must be at least -10"]
/// );
///
/// let name = validate(String::new(), &[MinLength::new(1).boxed()], &env);
/// assert!(name.is_left());
/// ```
pub fn validate<T: Clone>(
    value: T,
    validators: &[BoxedValidator<T>],
    env: &Environment,
) -> Either<ValidationError, T> {
    tracing::debug!(validators = validators.len(), "validating value");
    let outcome = Either::<ValidationError, T>::validate(
        value,
        validators
            .iter()
            .map(|validator| move |value: &T| validator.validate(Maybe::Just(value.clone()), env)),
    );
    if let Either::Left(error) = &outcome {
        tracing::debug!(errors = error.len(), "validation failed");
    }
    outcome
}
