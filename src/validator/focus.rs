//! Validation of a part of a structure, reached through an optic.

use super::contract::{BoxedValidator, Environment, Validator};
use super::error::ValidationError;
use crate::control::{Either, Maybe};
use crate::optics::{Focus, Lens, Prism};

/// Validates the focus of a lens or prism and gates the whole structure on
/// the result.
///
/// A prism that misses hands `Nothing` to the inner validator, so only a
/// [`Required`](super::Required) can fail there. On success the structure is
/// returned unchanged, unless the focus was absent: then the result is
/// `Nothing`, so a surrounding [`Not`](super::Not) leaves it alone. A label, when set, prefixes every message as
/// `"label: message"`.
///
/// # Examples
///
/// ```rust
/// use opticore::control::Maybe;
/// use opticore::optics::{Value, prism};
/// use opticore::validator::{At, Environment, MinLength, Required, Validator, validate};
///
/// let zip_present = At::prism(prism::path(["address", "zip"]), Required::default().boxed()).labelled("zip");
/// let zip_long_enough = At::prism(prism::path(["address", "zip"]), MinLength::new(5).boxed());
/// let validators = [zip_present.boxed(), zip_long_enough.boxed()];
///
/// let without_zip = Value::map([("address", Value::map([("city", Value::from("Paris"))]))]);
/// assert_eq!(
///     validate(without_zip, &validators, &Environment::new()).unwrap_left().messages(),
///     ["zip: is required"]
/// );
///
/// let with_zip = Value::map([("address", Value::map([("zip", Value::from("75001"))]))]);
/// assert!(validate(with_zip, &validators, &Environment::new()).is_right());
/// ```
#[derive(Debug, Clone)]
pub struct At<S, A> {
    focus: Focus<S, A>,
    validator: BoxedValidator<A>,
    label: Option<String>,
}

impl<S, A> At<S, A> {
    /// Validates the field a lens focuses on.
    pub fn lens<L>(lens: L, validator: BoxedValidator<A>) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
    {
        Self::focus(Focus::lens(lens), validator)
    }

    /// Validates the branch a prism focuses on, when present.
    pub fn prism<P>(prism: P, validator: BoxedValidator<A>) -> Self
    where
        P: Prism<S, A> + Send + Sync + 'static,
    {
        Self::focus(Focus::prism(prism), validator)
    }

    /// Validates an already wrapped focus.
    pub const fn focus(focus: Focus<S, A>, validator: BoxedValidator<A>) -> Self {
        Self {
            focus,
            validator,
            label: None,
        }
    }

    /// Prefixes every failure message with `label`.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl<S, A> Validator<S> for At<S, A> {
    fn validate(&self, value: Maybe<S>, env: &Environment) -> Either<ValidationError, Maybe<S>> {
        let focused = value.as_ref().bind(|source| self.focus.read(source));
        tracing::trace!(
            present = focused.is_just(),
            partial = self.focus.is_partial(),
            "validating focus"
        );
        let present = focused.is_just();
        match self.validator.validate(focused, env) {
            Either::Right(_) if present => Either::Right(value),
            Either::Right(_) => Either::Right(Maybe::Nothing),
            Either::Left(error) => Either::Left(match &self.label {
                Some(label) => error.map_messages(|message| format!("{label}: {message}")),
                None => error,
            }),
        }
    }
}
