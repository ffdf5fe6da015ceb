//! Validator combinators.
//!
//! - [`Any`]: the first passing alternative wins
//! - [`Not`]: inverts a validator, leaving absence alone
//! - [`Each`]: checks every list element, accumulating failures
//! - [`All`]: checks one value against several validators, accumulating
//!   failures

use super::contract::{BoxedValidator, Environment, Validator};
use super::error::ValidationError;
use super::options::{AnyOptions, EachOptions, NotOptions, message_or};
use crate::control::{Either, Maybe};
use crate::optics::Value;

const ANY_DEFAULT_MESSAGE: &str = "value must satisfy at least one alternative";
const NOT_DEFAULT_MESSAGE: &str = "value must not satisfy the negated validator";

// =============================================================================
// Any
// =============================================================================

/// Disjunction of validators.
///
/// Alternatives run left to right and stop at the first success, which
/// returns the input unchanged. When none passes, including when there are
/// no alternatives, the failures of the alternatives are discarded in favor
/// of one aggregated message.
///
/// # Examples
///
/// ```rust
/// use opticore::control::{Either, Maybe};
/// use opticore::validator::{Any, Environment, Negative, Positive, Validator};
///
/// let nonzero = Any::new([Positive.boxed(), Negative.boxed()]);
/// let env = Environment::new();
///
/// assert_eq!(nonzero.validate(Maybe::Just(10), &env), Either::Right(Maybe::Just(10)));
/// assert_eq!(
///     nonzero.validate(Maybe::Just(0), &env).unwrap_left().messages(),
///     ["value must satisfy at least one alternative"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Any<T> {
    alternatives: Vec<BoxedValidator<T>>,
    options: AnyOptions,
}

impl<T> Any<T> {
    /// Alternatives with the default message.
    pub fn new<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<T>>,
    {
        Self::with_options(alternatives, AnyOptions::default())
    }

    /// Alternatives with explicit options.
    pub fn with_options<I>(alternatives: I, options: AnyOptions) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<T>>,
    {
        Self {
            alternatives: alternatives.into_iter().collect(),
            options,
        }
    }
}

impl<T: Clone> Validator<T> for Any<T> {
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>> {
        tracing::trace!(alternatives = self.alternatives.len(), "checking alternatives");
        let matched = self
            .alternatives
            .iter()
            .position(|alternative| alternative.validate(value.clone(), env).is_right());
        if let Some(index) = matched {
            tracing::trace!(alternative = index, "alternative matched");
            return Either::Right(value);
        }
        tracing::debug!(
            alternatives = self.alternatives.len(),
            "no alternative matched"
        );
        Either::Left(ValidationError::new(message_or(
            self.options.message.as_ref(),
            || ANY_DEFAULT_MESSAGE.to_string(),
        )))
    }
}

// =============================================================================
// Not
// =============================================================================

/// Negation of a validator.
///
/// A failure of the inner validator becomes success with the original
/// input, and a success becomes failure. When the inner validator succeeds
/// with `Nothing` the value was absent, and absence is passed on as
/// `Right(Nothing)` rather than negated.
///
/// # Examples
///
/// ```rust
/// use opticore::control::{Either, Maybe};
/// use opticore::validator::{Environment, Not, Positive};
/// use opticore::validator::Validator as _;
///
/// let not_positive = Not::new(Positive.boxed());
/// let env = Environment::new();
///
/// assert_eq!(not_positive.validate(Maybe::Just(0), &env), Either::Right(Maybe::Just(0)));
/// assert!(not_positive.validate(Maybe::Just(10), &env).is_left());
/// assert_eq!(not_positive.validate(Maybe::Nothing, &env), Either::Right(Maybe::Nothing));
/// ```
#[derive(Debug, Clone)]
pub struct Not<T> {
    inner: BoxedValidator<T>,
    options: NotOptions,
}

impl<T> Not<T> {
    /// Negates `inner` with the default message.
    pub fn new(inner: BoxedValidator<T>) -> Self {
        Self::with_options(inner, NotOptions::default())
    }

    /// Negates `inner` with explicit options.
    pub const fn with_options(inner: BoxedValidator<T>, options: NotOptions) -> Self {
        Self { inner, options }
    }
}

impl<T: Clone> Validator<T> for Not<T> {
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>> {
        tracing::trace!("checking negation");
        match self.inner.validate(value.clone(), env) {
            Either::Right(Maybe::Nothing) => Either::Right(Maybe::Nothing),
            Either::Right(Maybe::Just(_)) => {
                tracing::debug!("negated validator passed");
                Either::Left(ValidationError::new(message_or(
                    self.options.message.as_ref(),
                    || NOT_DEFAULT_MESSAGE.to_string(),
                )))
            }
            Either::Left(_) => Either::Right(value),
        }
    }
}

// =============================================================================
// Each
// =============================================================================

/// Applies validators to every element of a list.
///
/// Every element is checked against every validator and all failures are
/// kept, each message prefixed with the element index as `"[i] "`. An empty
/// list passes, as does an absent one. A custom message replaces the whole
/// list of element failures.
///
/// `Each<T>` validates `Vec<T>`. `Each<Value>` also validates a [`Value`],
/// where a non-list value fails with a message naming its type and `Null`
/// counts as absent.
///
/// # Examples
///
/// ```rust
/// use opticore::control::Maybe;
/// use opticore::validator::{Each, Environment, Positive, Validator};
///
/// let all_positive = Each::new(Positive.boxed());
/// let outcome = all_positive.validate(Maybe::Just(vec![1, -2, 3, -4]), &Environment::new());
/// assert_eq!(
///     outcome.unwrap_left().messages(),
///     ["[1] must be positive", "[3] must be positive"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Each<T> {
    validators: Vec<BoxedValidator<T>>,
    options: EachOptions,
}

impl<T> Each<T> {
    /// Checks every element against one validator.
    pub fn new(validator: BoxedValidator<T>) -> Self {
        Self::all([validator])
    }

    /// Checks every element against every validator.
    pub fn all<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<T>>,
    {
        Self::with_options(validators, EachOptions::default())
    }

    /// Validators with explicit options.
    pub fn with_options<I>(validators: I, options: EachOptions) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<T>>,
    {
        Self {
            validators: validators.into_iter().collect(),
            options,
        }
    }
}

impl<T: Clone> Each<T> {
    fn check_elements(&self, elements: &[T], env: &Environment) -> Either<ValidationError, ()> {
        tracing::trace!(elements = elements.len(), "checking elements");
        let outcome = Either::<ValidationError, T>::traverse_a(
            elements.iter().enumerate(),
            |(index, element)| {
                Either::<ValidationError, T>::validate(
                    element.clone(),
                    self.validators.iter().map(|validator| {
                        move |element: &T| validator.validate(Maybe::Just(element.clone()), env)
                    }),
                )
                .map_left(|error| error.map_messages(|message| format!("[{index}] {message}")))
            },
        );
        match outcome {
            Either::Right(_) => Either::Right(()),
            Either::Left(error) => {
                tracing::debug!(errors = error.len(), "elements failed validation");
                Either::Left(match &self.options.message {
                    Some(message) => ValidationError::new(message.clone()),
                    None => error,
                })
            }
        }
    }
}

impl<T: Clone> Validator<Vec<T>> for Each<T> {
    fn validate(
        &self,
        value: Maybe<Vec<T>>,
        env: &Environment,
    ) -> Either<ValidationError, Maybe<Vec<T>>> {
        match value {
            Maybe::Nothing => Either::Right(Maybe::Nothing),
            Maybe::Just(elements) => self
                .check_elements(&elements, env)
                .map(|()| Maybe::Just(elements)),
        }
    }
}

impl Validator<Value> for Each<Value> {
    fn validate(&self, value: Maybe<Value>, env: &Environment) -> Either<ValidationError, Maybe<Value>> {
        match value {
            Maybe::Nothing | Maybe::Just(Value::Null) => Either::Right(Maybe::Nothing),
            Maybe::Just(Value::List(elements)) => self
                .check_elements(&elements, env)
                .map(|()| Maybe::Just(Value::List(elements))),
            Maybe::Just(other) => Either::Left(ValidationError::new(format!(
                "must be a list, got {}",
                other.type_name()
            ))),
        }
    }
}

// =============================================================================
// All
// =============================================================================

/// Conjunction of validators with error accumulation.
///
/// Every validator runs, even after a failure, and every message is kept in
/// validator order. This is [`validate`](super::validate) packaged as a
/// validator, so it nests inside other combinators. Absence is handed to
/// each validator, so a [`Required`](super::Required) inside still fires.
#[derive(Debug, Clone)]
pub struct All<T> {
    validators: Vec<BoxedValidator<T>>,
}

impl<T> All<T> {
    /// Conjunction of `validators`.
    pub fn new<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<T>>,
    {
        Self {
            validators: validators.into_iter().collect(),
        }
    }
}

impl<T: Clone> Validator<T> for All<T> {
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>> {
        Either::<ValidationError, Maybe<T>>::validate(
            value,
            self.validators
                .iter()
                .map(|validator| move |value: &Maybe<T>| validator.validate(value.clone(), env)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{MaxLength, MinLength, Negative, Positive, Required};
    use rstest::rstest;

    fn env() -> Environment {
        Environment::new()
    }

    fn nonzero() -> Any<i64> {
        Any::new([Positive.boxed(), Negative.boxed()])
    }

    #[rstest]
    #[case(10)]
    #[case(-3)]
    fn any_returns_the_input_on_first_success(#[case] value: i64) {
        assert_eq!(
            nonzero().validate(Maybe::Just(value), &env()),
            Either::Right(Maybe::Just(value))
        );
    }

    #[rstest]
    fn any_aggregates_failure_into_one_message() {
        assert_eq!(
            nonzero().validate(Maybe::Just(0), &env()),
            Either::Left(ValidationError::new(
                "value must satisfy at least one alternative"
            ))
        );
    }

    #[rstest]
    fn any_without_alternatives_fails_with_custom_message() {
        let never = Any::<i64>::with_options(
            [],
            AnyOptions {
                message: Some("no rule".to_string()),
            },
        );
        assert_eq!(
            never.validate(Maybe::Just(1), &env()).unwrap_left().messages(),
            ["no rule"]
        );
    }

    #[rstest]
    #[case(Maybe::Just(0), Either::Right(Maybe::Just(0)))]
    #[case(Maybe::Nothing, Either::Right(Maybe::Nothing))]
    fn not_passes_failures_and_absence(
        #[case] value: Maybe<i64>,
        #[case] expected: Either<ValidationError, Maybe<i64>>,
    ) {
        assert_eq!(Not::new(Positive.boxed()).validate(value, &env()), expected);
    }

    #[rstest]
    fn not_rejects_inner_success() {
        let outcome = Not::new(Positive.boxed()).validate(Maybe::Just(10_i64), &env());
        assert_eq!(
            outcome.unwrap_left().messages(),
            ["value must not satisfy the negated validator"]
        );
    }

    #[rstest]
    fn not_of_required_turns_absence_into_success() {
        let absent = Not::new(Required::default().boxed());
        assert_eq!(
            absent.validate(Maybe::<i64>::Nothing, &env()),
            Either::Right(Maybe::Nothing)
        );
        assert!(absent.validate(Maybe::Just(1_i64), &env()).is_left());
    }

    #[rstest]
    fn each_passes_empty_and_absent_lists() {
        let each = Each::<i64>::new(Positive.boxed());
        assert_eq!(
            each.validate(Maybe::Just(Vec::new()), &env()),
            Either::Right(Maybe::Just(Vec::new()))
        );
        assert_eq!(
            each.validate(Maybe::<Vec<i64>>::Nothing, &env()),
            Either::Right(Maybe::Nothing)
        );
    }

    #[rstest]
    fn each_collects_every_validator_for_every_element() {
        let each = Each::<String>::all([MinLength::new(2).boxed(), MaxLength::new(3).boxed()]);
        let words = vec!["a".to_string(), "ok".to_string(), "long".to_string()];
        assert_eq!(
            each.validate(Maybe::Just(words), &env()).unwrap_left().messages(),
            ["[0] length must be at least 2", "[2] length must be at most 3"]
        );
    }

    #[rstest]
    fn each_custom_message_replaces_element_errors() {
        let each = Each::with_options(
            [Positive.boxed()],
            EachOptions {
                message: Some("all amounts must be positive".to_string()),
            },
        );
        assert_eq!(
            each.validate(Maybe::Just(vec![-1, -2]), &env()).unwrap_left().messages(),
            ["all amounts must be positive"]
        );
    }

    #[rstest]
    fn each_over_values_rejects_non_lists() {
        let each: Each<Value> = Each::new(MinLength::new(1).boxed());
        let outcome: Either<ValidationError, Maybe<Value>> =
            each.validate(Maybe::Just(Value::from(3)), &env());
        assert_eq!(outcome.unwrap_left().messages(), ["must be a list, got int"]);

        let list = Value::from(vec!["x", "y"]);
        assert_eq!(
            each.validate(Maybe::Just(list.clone()), &env()),
            Either::Right(Maybe::Just(list))
        );
    }

    #[rstest]
    fn each_over_null_passes_as_absence() {
        let each: Each<Value> = Each::new(MinLength::new(1).boxed());
        assert_eq!(
            each.validate(Maybe::Just(Value::Null), &env()),
            Either::Right(Maybe::Nothing)
        );

        let negated = Not::new(Each::<Value>::new(MinLength::new(1).boxed()).boxed());
        assert_eq!(
            negated.validate(Maybe::Just(Value::Null), &env()),
            Either::Right(Maybe::Nothing)
        );
    }

    #[rstest]
    fn all_accumulates_and_sees_absence() {
        let all = All::new([Required::default().boxed(), Positive.boxed()]);
        assert_eq!(
            all.validate(Maybe::<i64>::Nothing, &env()).unwrap_left().messages(),
            ["is required"]
        );
        let strict = All::new([Positive.boxed(), Negative.boxed()]);
        assert_eq!(strict.validate(Maybe::Just(0_i64), &env()).unwrap_left().len(), 2);
    }
}
