//! Tests for the validator combinators and predicates.

#![cfg(feature = "validator")]

use opticore::control::{Either, Maybe};
use opticore::optics::{Value, lens, prism};
use opticore::typeclass::EqFn;
use opticore::validator::{
    All, Any, AnyOptions, At, Each, EachOptions, Environment, Equal, MaxLength, MinLength,
    Negative, Not, NotOptions, Positive, Predicate, Range, Required, Satisfies, ValidationError,
    Validator, p_all, p_any, p_none, p_not, validate,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

#[fixture]
fn env() -> Environment {
    Environment::new()
}

fn messages<T>(outcome: Either<ValidationError, T>) -> Vec<String> {
    match outcome {
        Either::Left(error) => error.into_messages(),
        Either::Right(_) => Vec::new(),
    }
}

// =============================================================================
// Any / Not
// =============================================================================

#[rstest]
fn any_returns_the_value_on_first_success(env: Environment) {
    let sign = Any::new([Positive.boxed(), Negative.boxed()]);
    assert_eq!(sign.validate(Maybe::Just(10), &env), Either::Right(Maybe::Just(10)));
    assert_eq!(sign.validate(Maybe::Just(-3), &env), Either::Right(Maybe::Just(-3)));
}

#[rstest]
fn any_reports_one_aggregated_message(env: Environment) {
    let sign = Any::new([Positive.boxed(), Negative.boxed()]);
    assert_eq!(
        sign.validate(Maybe::Just(0), &env),
        Either::Left(ValidationError::new("value must satisfy at least one alternative"))
    );
}

#[rstest]
fn any_custom_message_overrides_default(env: Environment) {
    let sign = Any::with_options(
        [Positive.boxed(), Negative.boxed()],
        AnyOptions {
            message: Some("zero is not signed".to_string()),
        },
    );
    assert_eq!(messages(sign.validate(Maybe::Just(0), &env)), ["zero is not signed"]);
}

#[rstest]
fn any_with_no_alternatives_fails(env: Environment) {
    let nothing_allowed = Any::<i64>::new([]);
    assert!(nothing_allowed.validate(Maybe::Just(1), &env).is_left());
}

#[rstest]
#[case(Maybe::Just(0), Either::Right(Maybe::Just(0)))]
#[case(Maybe::Nothing, Either::Right(Maybe::Nothing))]
fn not_inverts_failure_and_keeps_absence(
    env: Environment,
    #[case] input: Maybe<i64>,
    #[case] expected: Either<ValidationError, Maybe<i64>>,
) {
    assert_eq!(Not::new(Positive.boxed()).validate(input, &env), expected);
}

#[rstest]
fn not_fails_when_inner_passes(env: Environment) {
    let outcome = Not::with_options(
        Positive.boxed(),
        NotOptions {
            message: Some("must not be positive".to_string()),
        },
    )
    .validate(Maybe::Just(10), &env);
    assert_eq!(messages(outcome), ["must not be positive"]);
}

#[rstest]
fn double_negation_restores_the_verdict(env: Environment) {
    let twice = Not::new(Not::new(Positive.boxed()).boxed());
    assert!(twice.validate(Maybe::Just(5), &env).is_right());
    assert!(twice.validate(Maybe::Just(-5), &env).is_left());
}

// =============================================================================
// Each
// =============================================================================

#[rstest]
fn each_accumulates_every_element_failure(env: Environment) {
    let each = Each::<i64>::all([Positive.boxed(), Range::at_most(10).boxed()]);
    assert_eq!(
        messages(each.validate(Maybe::Just(vec![-1, 5, 20]), &env)),
        ["[0] must be positive", "[2] must be at most 10"]
    );
}

#[rstest]
fn each_passes_empty_and_absent_lists(env: Environment) {
    let each = Each::<i64>::new(Positive.boxed());
    assert_eq!(each.validate(Maybe::Just(vec![]), &env), Either::Right(Maybe::Just(vec![])));
    assert_eq!(each.validate(Maybe::Nothing, &env), Either::Right(Maybe::Nothing));
}

#[rstest]
fn each_custom_message_replaces_element_errors(env: Environment) {
    let each = Each::<i64>::with_options(
        [Positive.boxed()],
        EachOptions {
            message: Some("all quantities must be positive".to_string()),
        },
    );
    assert_eq!(
        messages(each.validate(Maybe::Just(vec![-1, -2]), &env)),
        ["all quantities must be positive"]
    );
}

#[rstest]
fn each_over_value_rejects_non_lists(env: Environment) {
    let each: Each<Value> = Each::new(Required::default().boxed());
    assert_eq!(
        messages(each.validate(Maybe::Just(Value::from(3)), &env)),
        ["must be a list, got int"]
    );
    assert!(each.validate(Maybe::Just(Value::Null), &env).is_right());
    assert!(
        each.validate(Maybe::Just(Value::from(vec![1, 2])), &env)
            .is_right()
    );
}

// =============================================================================
// validate / All
// =============================================================================

#[rstest]
fn validate_returns_the_value_unchanged(env: Environment) {
    let rules = [MinLength::new(2).boxed(), MaxLength::new(5).boxed()];
    assert_eq!(validate("abc".to_string(), &rules, &env), Either::Right("abc".to_string()));
}

#[rstest]
fn validate_accumulates_in_validator_order(env: Environment) {
    let rules = [
        Positive.boxed(),
        Range::between(5, 10).boxed(),
        Equal::to(7).boxed(),
    ];
    assert_eq!(
        messages(validate(-1, &rules, &env)),
        ["must be positive", "must be between 5 and 10", "must be equal to 7"]
    );
}

#[rstest]
fn all_behaves_like_validate_inside_combinators(env: Environment) {
    let bounded = All::new([Positive.boxed(), Range::at_most(3).boxed()]);
    let either_bounded_or_negative = Any::new([bounded.boxed(), Negative.boxed()]);
    assert!(either_bounded_or_negative.validate(Maybe::Just(2), &env).is_right());
    assert!(either_bounded_or_negative.validate(Maybe::Just(-2), &env).is_right());
    assert!(either_bounded_or_negative.validate(Maybe::Just(9), &env).is_left());
}

#[rstest]
fn only_required_rejects_absence(env: Environment) {
    assert!(Required::default().validate(Maybe::<i64>::Nothing, &env).is_left());
    assert!(Positive.validate(Maybe::<i64>::Nothing, &env).is_right());
    assert!(Range::at_least(1).validate(Maybe::Nothing, &env).is_right());
    assert!(MinLength::new(1).validate(Maybe::<String>::Nothing, &env).is_right());
}

#[rstest]
#[should_panic(expected = "Range requires at least one of `min` or `max`")]
fn range_without_bounds_panics() {
    let _ = Range::<i64>::new(opticore::validator::RangeOptions::default());
}

#[rstest]
fn equal_by_custom_comparator(env: Environment) {
    let case_insensitive = Equal::by(
        "Paris".to_string(),
        EqFn(|left: &String, right: &String| left.eq_ignore_ascii_case(right)),
    );
    assert!(case_insensitive.validate(Maybe::Just("PARIS".to_string()), &env).is_right());
    assert!(case_insensitive.validate(Maybe::Just("Lyon".to_string()), &env).is_left());
}

#[rstest]
fn satisfies_reads_the_environment() {
    let env = Environment::new().with("limit", 3);
    let under_limit = Satisfies::with_environment(|value: &i64, env: &Environment| {
        env.get("limit").and_then(Value::as_int).is_some_and(|limit| *value <= limit)
    })
    .message("over the limit");
    assert!(under_limit.validate(Maybe::Just(3), &env).is_right());
    assert_eq!(messages(under_limit.validate(Maybe::Just(4), &env)), ["over the limit"]);
}

// =============================================================================
// At
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
enum Contact {
    Email(String),
    Phone(String),
}

#[derive(Clone, Debug, PartialEq)]
struct Account {
    name: String,
    contact: Contact,
}

#[rstest]
fn at_lens_labels_messages_and_keeps_the_parent(env: Environment) {
    let name = At::lens(opticore::lens!(Account, name), MinLength::new(3).boxed()).labelled("name");
    let account = Account {
        name: "al".to_string(),
        contact: Contact::Phone("555".to_string()),
    };
    assert_eq!(messages(name.validate(Maybe::Just(account.clone()), &env)), ["name: length must be at least 3"]);

    let fixed = Account {
        name: "alice".to_string(),
        ..account
    };
    assert_eq!(name.validate(Maybe::Just(fixed.clone()), &env), Either::Right(Maybe::Just(fixed)));
}

#[rstest]
fn at_prism_skips_non_matching_branches(env: Environment) {
    let email = At::prism(
        opticore::prism!(Contact, Email),
        Satisfies::new(|address: &String| address.contains('@'))
            .message("must contain @")
            .boxed(),
    );
    let required_email = At::prism(opticore::prism!(Contact, Email), Required::default().boxed());

    let phone = Contact::Phone("555".to_string());
    assert!(email.validate(Maybe::Just(phone.clone()), &env).is_right());
    assert!(required_email.validate(Maybe::Just(phone), &env).is_left());
    assert_eq!(
        messages(email.validate(Maybe::Just(Contact::Email("nope".to_string())), &env)),
        ["must contain @"]
    );
}

#[rstest]
fn at_over_values_uses_key_optics(env: Environment) {
    let order = Value::map([
        ("total", Value::from(20)),
        ("items", Value::from(vec![5, -1])),
    ]);
    let rules = [
        At::lens(lens::key("total"), Satisfies::new(|total: &Value| total.as_int().is_some_and(|n| n > 0)).boxed())
            .labelled("total")
            .boxed(),
        At::prism(prism::key("items"), Each::new(
            Satisfies::new(|item: &Value| item.as_int().is_some_and(|n| n > 0))
                .message("must be positive")
                .boxed(),
        )
        .boxed())
        .labelled("items")
        .boxed(),
    ];
    assert_eq!(messages(validate(order, &rules, &env)), ["items: [1] must be positive"]);
}

#[rstest]
fn negation_keeps_a_missing_focus_absent(env: Environment) {
    let parent = Value::map([("other", Value::from(1))]);

    let inside = At::prism(prism::key("amount"), Not::new(MinLength::new(1).boxed()).boxed());
    let outside = Not::new(At::prism(prism::key("amount"), MinLength::new(1).boxed()).boxed());

    assert!(inside.validate(Maybe::Just(parent.clone()), &env).is_right());
    assert_eq!(
        outside.validate(Maybe::Just(parent.clone()), &env),
        Either::Right(Maybe::Nothing)
    );
    assert!(validate(parent, &[outside.boxed()], &env).is_right());
}

#[rstest]
fn negated_each_leaves_null_alone(env: Environment) {
    let positive = Satisfies::new(|item: &Value| item.as_int().is_some_and(|n| n > 0));
    let negated = Not::new(Each::<Value>::new(positive.boxed()).boxed());
    assert_eq!(
        negated.validate(Maybe::Just(Value::Null), &env),
        Either::Right(Maybe::Nothing)
    );
    assert!(
        negated
            .validate(Maybe::Just(Value::from(Vec::<i64>::new())), &env)
            .is_left()
    );
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(4, true, true, false)]
#[case(7, false, true, false)]
#[case(-3, false, false, true)]
fn predicate_combinators(
    #[case] value: i64,
    #[case] all: bool,
    #[case] any: bool,
    #[case] none: bool,
) {
    let positive = Predicate::new(|n: &i64| *n > 0);
    let even = Predicate::new(|n: &i64| n % 2 == 0);
    assert_eq!(p_all([positive.clone(), even.clone()]).test(&value), all);
    assert_eq!(p_any([positive.clone(), even.clone()]).test(&value), any);
    assert_eq!(p_none([positive.clone(), even]).test(&value), none);
    assert_eq!(p_not(positive).test(&value), value <= 0);
}

#[rstest]
fn empty_predicate_lists_follow_identities() {
    assert!(p_all(Vec::<Predicate<i64>>::new()).test(&0));
    assert!(!p_any(Vec::<Predicate<i64>>::new()).test(&0));
    assert!(p_none(Vec::<Predicate<i64>>::new()).test(&0));
}

#[rstest]
fn contramap_reads_through_a_projection(env: Environment) {
    let long_name = Predicate::new(|length: &usize| *length > 3)
        .contramap(|account: &Account| account.name.chars().count());
    let check = Satisfies::predicate(long_name).message("name too short");
    let account = Account {
        name: "bob".to_string(),
        contact: Contact::Email("b@x".to_string()),
    };
    assert_eq!(messages(check.validate(Maybe::Just(account), &env)), ["name too short"]);
}

// =============================================================================
// Logging
// =============================================================================

#[rstest]
fn validation_runs_under_a_subscriber(env: Environment) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("opticore=trace"))
        .with_test_writer()
        .finish();
    let outcome = tracing::subscriber::with_default(subscriber, || {
        validate(0, &[Positive.boxed(), Any::new([Negative.boxed()]).boxed()], &env)
    });
    assert_eq!(outcome.unwrap_left().len(), 2);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_validate_passes_iff_no_validator_fails(value in -50_i64..50) {
        let rules = [Positive.boxed(), Range::at_most(20).boxed()];
        let expected_failures = usize::from(value <= 0) + usize::from(value > 20);
        match validate(value, &rules, &Environment::new()) {
            Either::Right(unchanged) => {
                prop_assert_eq!(unchanged, value);
                prop_assert_eq!(expected_failures, 0);
            }
            Either::Left(error) => prop_assert_eq!(error.len(), expected_failures),
        }
    }

    #[test]
    fn prop_not_flips_any_verdict_on_present_values(value in any::<i64>()) {
        let env = Environment::new();
        let plain = Positive.validate(Maybe::Just(value), &env).is_right();
        let negated = Not::new(Positive.boxed()).validate(Maybe::Just(value), &env).is_right();
        prop_assert_ne!(plain, negated);
    }
}
