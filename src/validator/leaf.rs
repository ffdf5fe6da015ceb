//! A small set of leaf validators.
//!
//! All of them pass `Nothing` through as success except [`Required`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::contract::{Environment, Validator};
use super::error::ValidationError;
use super::options::{
    EqualOptions, LengthOptions, PredicateOptions, RangeOptions, RequiredOptions, message_or,
};
use super::predicate::Predicate;
use crate::control::{Either, Maybe};
use crate::optics::Value;
use crate::typeclass::{EqBy, Structural};

/// Passes `Just` values through and fails with `message` when `check`
/// rejects one.
fn gate<T, F, M>(value: Maybe<T>, check: F, message: M) -> Either<ValidationError, Maybe<T>>
where
    F: FnOnce(&T) -> bool,
    M: FnOnce() -> String,
{
    match value {
        Maybe::Nothing => Either::Right(Maybe::Nothing),
        Maybe::Just(inner) if check(&inner) => Either::Right(Maybe::Just(inner)),
        Maybe::Just(_) => Either::Left(ValidationError::new(message())),
    }
}

// =============================================================================
// Required
// =============================================================================

/// Fails on absence. The only built-in validator that does.
#[derive(Debug, Clone, Default)]
pub struct Required {
    options: RequiredOptions,
}

impl Required {
    /// `Required` with a custom message.
    pub fn with_options(options: RequiredOptions) -> Self {
        Self { options }
    }
}

impl<T> Validator<T> for Required {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        match value {
            Maybe::Nothing => Either::Left(ValidationError::new(message_or(
                self.options.message.as_ref(),
                || "is required".to_string(),
            ))),
            present => Either::Right(present),
        }
    }
}

// =============================================================================
// Sign
// =============================================================================

/// Accepts values strictly greater than `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

impl<T: PartialOrd + Default> Validator<T> for Positive {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(value, |inner| *inner > T::default(), || "must be positive".to_string())
    }
}

/// Accepts values strictly less than `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

impl<T: PartialOrd + Default> Validator<T> for Negative {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(value, |inner| *inner < T::default(), || "must be negative".to_string())
    }
}

// =============================================================================
// Range
// =============================================================================

/// Inclusive bounds check.
///
/// # Panics
///
/// Building a `Range` with neither bound panics: such a validator could never
/// fail, which means it was configured wrong.
///
/// # Examples
///
/// ```rust
/// use opticore::control::{Either, Maybe};
/// use opticore::validator::{Environment, Range, Validator};
///
/// let percent = Range::between(0, 100);
/// assert_eq!(percent.validate(Maybe::Just(42), &Environment::new()), Either::Right(Maybe::Just(42)));
/// assert!(percent.validate(Maybe::Just(101), &Environment::new()).is_left());
/// ```
#[derive(Debug, Clone)]
pub struct Range<T> {
    options: RangeOptions<T>,
}

impl<T> Range<T> {
    /// A range from fully specified options.
    ///
    /// # Panics
    ///
    /// Panics when both `min` and `max` are `None`.
    pub fn new(options: RangeOptions<T>) -> Self {
        assert!(
            options.min.is_some() || options.max.is_some(),
            "Range requires at least one of `min` or `max`"
        );
        Self { options }
    }

    /// `min <= value <= max`.
    pub fn between(min: T, max: T) -> Self {
        Self::new(RangeOptions {
            min: Some(min),
            max: Some(max),
            message: None,
        })
    }

    /// `min <= value`.
    pub fn at_least(min: T) -> Self {
        Self::new(RangeOptions {
            min: Some(min),
            ..RangeOptions::default()
        })
    }

    /// `value <= max`.
    pub fn at_most(max: T) -> Self {
        Self::new(RangeOptions {
            max: Some(max),
            ..RangeOptions::default()
        })
    }

    /// Replaces the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.message = Some(message.into());
        self
    }
}

impl<T: PartialOrd + fmt::Display> Range<T> {
    fn contains(&self, value: &T) -> bool {
        self.options.min.as_ref().is_none_or(|min| value >= min)
            && self.options.max.as_ref().is_none_or(|max| value <= max)
    }

    fn describe(&self) -> String {
        match (&self.options.min, &self.options.max) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => unreachable!("Range is built with at least one bound"),
        }
    }
}

impl<T: PartialOrd + fmt::Display> Validator<T> for Range<T> {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(
            value,
            |inner| self.contains(inner),
            || message_or(self.options.message.as_ref(), || self.describe()),
        )
    }
}

// =============================================================================
// Length
// =============================================================================

/// Values with a measurable length.
///
/// `None` marks a value that has no length at all, such as a number inside
/// a [`Value`].
pub trait Length {
    /// The length, in characters for text and in entries for collections.
    fn length(&self) -> Option<usize>;
}

impl Length for String {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Length for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Self::Text(text) => text.length(),
            Self::List(values) => Some(values.len()),
            Self::Map(entries) => Some(entries.len()),
            Self::Record(record) => Some(record.iter().count()),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) => None,
        }
    }
}

/// Requires a length of at least `min`.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    options: LengthOptions,
}

impl MinLength {
    /// At least `min` characters or entries.
    pub fn new(min: usize) -> Self {
        Self::with_options(min, LengthOptions::default())
    }

    /// `MinLength` with a custom message.
    pub const fn with_options(min: usize, options: LengthOptions) -> Self {
        Self { min, options }
    }
}

impl<T: Length> Validator<T> for MinLength {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(
            value,
            |inner| inner.length().is_some_and(|length| length >= self.min),
            || {
                message_or(self.options.message.as_ref(), || {
                    format!("length must be at least {}", self.min)
                })
            },
        )
    }
}

/// Requires a length of at most `max`.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    options: LengthOptions,
}

impl MaxLength {
    /// At most `max` characters or entries.
    pub fn new(max: usize) -> Self {
        Self::with_options(max, LengthOptions::default())
    }

    /// `MaxLength` with a custom message.
    pub const fn with_options(max: usize, options: LengthOptions) -> Self {
        Self { max, options }
    }
}

impl<T: Length> Validator<T> for MaxLength {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(
            value,
            |inner| inner.length().is_some_and(|length| length <= self.max),
            || {
                message_or(self.options.message.as_ref(), || {
                    format!("length must be at most {}", self.max)
                })
            },
        )
    }
}

// =============================================================================
// Equal
// =============================================================================

/// Requires equality with an expected value under a comparator.
#[derive(Debug, Clone)]
pub struct Equal<T, C = Structural> {
    options: EqualOptions<T>,
    comparator: C,
}

impl<T> Equal<T> {
    /// Structural equality with `expected`.
    pub const fn to(expected: T) -> Self {
        Self {
            options: EqualOptions::new(expected),
            comparator: Structural,
        }
    }
}

impl<T, C> Equal<T, C> {
    /// Equality with `expected` decided by `comparator`.
    pub const fn by(expected: T, comparator: C) -> Self {
        Self {
            options: EqualOptions::new(expected),
            comparator,
        }
    }

    /// Equality from fully specified options.
    pub const fn with_options(options: EqualOptions<T>, comparator: C) -> Self {
        Self {
            options,
            comparator,
        }
    }
}

impl<T: fmt::Debug, C: EqBy<T>> Validator<T> for Equal<T, C> {
    fn validate(&self, value: Maybe<T>, _env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(
            value,
            |inner| self.comparator.eq(inner, &self.options.expected),
            || {
                message_or(self.options.message.as_ref(), || {
                    format!("must be equal to {:?}", self.options.expected)
                })
            },
        )
    }
}

// =============================================================================
// Satisfies
// =============================================================================

type Check<T> = Arc<dyn Fn(&T, &Environment) -> bool + Send + Sync>;

/// Lifts a boolean check into a validator.
///
/// The check sees the environment, so limits can come from configuration.
///
/// # Examples
///
/// ```rust
/// use opticore::control::{Either, Maybe};
/// use opticore::validator::{Environment, Satisfies, Validator};
///
/// let within_quota = Satisfies::with_environment(|count: &i64, env: &Environment| {
///     env.get("quota").and_then(|quota| quota.as_int()).is_some_and(|quota| *count <= quota)
/// })
/// .message("over quota");
///
/// let env = Environment::new().with("quota", 3);
/// assert_eq!(within_quota.validate(Maybe::Just(2), &env), Either::Right(Maybe::Just(2)));
/// assert_eq!(within_quota.validate(Maybe::Just(4), &env).unwrap_left().messages(), ["over quota"]);
/// ```
pub struct Satisfies<T> {
    check: Check<T>,
    options: PredicateOptions,
}

impl<T: 'static> Satisfies<T> {
    /// A check on the value alone.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::with_environment(move |value, _| check(value))
    }

    /// A check on the value and the environment.
    pub fn with_environment<F>(check: F) -> Self
    where
        F: Fn(&T, &Environment) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            options: PredicateOptions::default(),
        }
    }

    /// Lifts a [`Predicate`].
    pub fn predicate(predicate: Predicate<T>) -> Self {
        Self::new(move |value| predicate.test(value))
    }
}

impl<T> Satisfies<T> {
    /// Replaces "is invalid".
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.message = Some(message.into());
        self
    }

    /// Replaces the options.
    #[must_use]
    pub fn options(mut self, options: PredicateOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T> Validator<T> for Satisfies<T> {
    fn validate(&self, value: Maybe<T>, env: &Environment) -> Either<ValidationError, Maybe<T>> {
        gate(
            value,
            |inner| (self.check)(inner, env),
            || message_or(self.options.message.as_ref(), || "is invalid".to_string()),
        )
    }
}

impl<T> Clone for Satisfies<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for Satisfies<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Satisfies")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::EqFn;
    use rstest::rstest;

    fn env() -> Environment {
        Environment::new()
    }

    #[rstest]
    #[case(Maybe::Nothing, false)]
    #[case(Maybe::Just(0), true)]
    fn required_fails_only_on_absence(#[case] value: Maybe<i64>, #[case] passes: bool) {
        assert_eq!(Required::default().validate(value, &env()).is_right(), passes);
    }

    #[rstest]
    fn required_uses_custom_message() {
        let required = Required::with_options(RequiredOptions {
            message: Some("name is mandatory".to_string()),
        });
        let outcome: Either<ValidationError, Maybe<String>> = required.validate(Maybe::Nothing, &env());
        assert_eq!(outcome.unwrap_left().messages(), ["name is mandatory"]);
    }

    #[rstest]
    #[case(1, true, false)]
    #[case(0, false, false)]
    #[case(-1, false, true)]
    fn sign_validators(#[case] value: i64, #[case] positive: bool, #[case] negative: bool) {
        assert_eq!(Positive.validate(Maybe::Just(value), &env()).is_right(), positive);
        assert_eq!(Negative.validate(Maybe::Just(value), &env()).is_right(), negative);
    }

    #[rstest]
    fn leaves_pass_absence_through() {
        assert_eq!(
            Positive.validate(Maybe::<i64>::Nothing, &env()),
            Either::Right(Maybe::Nothing)
        );
        assert_eq!(
            MinLength::new(3).validate(Maybe::<String>::Nothing, &env()),
            Either::Right(Maybe::Nothing)
        );
        assert_eq!(
            Equal::to(1).validate(Maybe::Nothing, &env()),
            Either::Right(Maybe::Nothing)
        );
    }

    #[rstest]
    #[case(Range::between(1, 5), 5, true)]
    #[case(Range::between(1, 5), 6, false)]
    #[case(Range::at_least(1), 0, false)]
    #[case(Range::at_most(1), -9, true)]
    fn range_bounds_are_inclusive(#[case] range: Range<i64>, #[case] value: i64, #[case] passes: bool) {
        assert_eq!(range.validate(Maybe::Just(value), &env()).is_right(), passes);
    }

    #[rstest]
    fn range_messages_describe_the_bounds() {
        let outcome = Range::between(1, 5).validate(Maybe::Just(9), &env());
        assert_eq!(outcome.unwrap_left().messages(), ["must be between 1 and 5"]);
        let custom = Range::at_most(2).message("too many").validate(Maybe::Just(9), &env());
        assert_eq!(custom.unwrap_left().messages(), ["too many"]);
    }

    #[rstest]
    #[should_panic(expected = "Range requires at least one of `min` or `max`")]
    fn range_without_bounds_panics() {
        let _ = Range::<i64>::new(RangeOptions::default());
    }

    #[rstest]
    #[case(Value::from("abc"), true)]
    #[case(Value::from("ab"), false)]
    #[case(Value::from(vec![1, 2, 3]), true)]
    #[case(Value::from(7), false)]
    fn min_length_over_values(#[case] value: Value, #[case] passes: bool) {
        assert_eq!(MinLength::new(3).validate(Maybe::Just(value), &env()).is_right(), passes);
    }

    #[rstest]
    fn max_length_counts_characters() {
        let max = MaxLength::new(2);
        assert!(max.validate(Maybe::Just("éé".to_string()), &env()).is_right());
        assert_eq!(
            max.validate(Maybe::Just(vec![1, 2, 3]), &env()).unwrap_left().messages(),
            ["length must be at most 2"]
        );
    }

    #[rstest]
    fn equal_uses_the_comparator() {
        let case_insensitive = Equal::by(
            "Tokyo".to_string(),
            EqFn(|left: &String, right: &String| left.eq_ignore_ascii_case(right)),
        );
        assert!(case_insensitive.validate(Maybe::Just("TOKYO".to_string()), &env()).is_right());
        assert_eq!(
            Equal::to(3).validate(Maybe::Just(4), &env()).unwrap_left().messages(),
            ["must be equal to 3"]
        );
    }

    #[rstest]
    fn satisfies_lifts_a_predicate() {
        let even = Satisfies::predicate(Predicate::new(|value: &i64| value % 2 == 0));
        assert!(even.validate(Maybe::Just(4), &env()).is_right());
        assert_eq!(
            even.validate(Maybe::Just(3), &env()).unwrap_left().messages(),
            ["is invalid"]
        );
    }
}
