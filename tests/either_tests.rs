//! Tests for `Either<L, R>`: right-biased operations, the two traversals,
//! ordering and the monad laws.

#![cfg(feature = "control")]

use opticore::control::{Either, Maybe};
use opticore::typeclass::{Functor, Monad};
use proptest::prelude::*;
use rstest::rstest;

fn parse(text: &str) -> Either<Vec<String>, i32> {
    text.parse::<i32>()
        .map_err(|_| vec![format!("Invalid: {text}")])
        .into()
}

fn halve(value: i32) -> Either<String, i32> {
    if value % 2 == 0 {
        Either::Right(value / 2)
    } else {
        Either::Left(format!("{value} is odd"))
    }
}

// =============================================================================
// Right-biased Operations
// =============================================================================

#[rstest]
fn map_touches_only_right() {
    let right: Either<String, i32> = Either::Right(2);
    let left: Either<String, i32> = Either::Left("boom".to_string());
    assert_eq!(right.map(|n| n * 10), Either::Right(20));
    assert_eq!(left.map(|n| n * 10), Either::Left("boom".to_string()));
}

#[rstest]
fn bind_short_circuits_on_first_left() {
    let result = Either::Right(8).bind(halve).bind(halve).bind(halve).bind(halve);
    assert_eq!(result, Either::Left("1 is odd".to_string()));
}

#[rstest]
#[case(Either::Left("function"), Either::Left("argument"), Either::Left("function"))]
#[case(Either::Left("function"), Either::Right(1), Either::Left("function"))]
#[case(Either::Right(()), Either::Left("argument"), Either::Left("argument"))]
#[case(Either::Right(()), Either::Right(1), Either::Right(2))]
fn ap_prefers_the_function_operand_left(
    #[case] function: Either<&'static str, ()>,
    #[case] argument: Either<&'static str, i32>,
    #[case] expected: Either<&'static str, i32>,
) {
    let function = function.map(|()| |n: i32| n + 1);
    assert_eq!(function.ap(argument), expected);
}

#[rstest]
fn fold_exits_the_monad() {
    let report = |either: Either<String, i32>| either.fold(|n| format!("ok {n}"), |e| format!("error {e}"));
    assert_eq!(report(Either::Right(1)), "ok 1");
    assert_eq!(report(Either::Left("x".to_string())), "error x");
}

#[rstest]
fn lifting_helpers() {
    assert_eq!(
        Either::lift_predicate(4, |n| n % 2 == 0, |n| format!("{n} is odd")),
        Either::<String, i32>::Right(4)
    );
    assert_eq!(
        Either::lift_predicate(3, |n| n % 2 == 0, |n| format!("{n} is odd")),
        Either::<String, i32>::Left("3 is odd".to_string())
    );
    assert_eq!(
        Either::lift_maybe(Maybe::<i32>::Nothing, || "absent"),
        Either::Left("absent")
    );
    assert_eq!(Either::lift_maybe(Maybe::Just(1), || "absent"), Either::<&str, i32>::Right(1));
}

#[rstest]
fn result_conversions_round_trip() {
    let either: Either<String, i32> = Ok::<i32, String>(3).into();
    assert_eq!(either, Either::Right(3));
    let result: Result<i32, String> = Either::Left("bad".to_string()).into();
    assert_eq!(result, Err("bad".to_string()));
}

// =============================================================================
// Traversals
// =============================================================================

#[rstest]
fn traverse_reports_only_the_first_failure() {
    assert_eq!(
        Either::traverse(["1", "invalid", "3", "bad"], parse),
        Either::Left(vec!["Invalid: invalid".to_string()])
    );
}

#[rstest]
fn traverse_a_accumulates_every_failure_in_order() {
    assert_eq!(
        Either::traverse_a(["1", "invalid", "3", "bad"], parse),
        Either::Left(vec!["Invalid: invalid".to_string(), "Invalid: bad".to_string()])
    );
}

#[rstest]
fn sequences_of_rights_keep_order() {
    let items = vec![Either::<Vec<String>, i32>::Right(1), Either::Right(2)];
    assert_eq!(Either::sequence(items.clone()), Either::Right(vec![1, 2]));
    assert_eq!(Either::sequence_a(items), Either::Right(vec![1, 2]));
}

#[rstest]
fn empty_traversals_succeed() {
    assert_eq!(Either::traverse(Vec::<&str>::new(), parse), Either::Right(vec![]));
    assert_eq!(Either::traverse_a(Vec::<&str>::new(), parse), Either::Right(vec![]));
}

#[rstest]
fn rights_and_lefts_partition() {
    let items = [Either::Left("a"), Either::Right(1), Either::Left("b"), Either::Right(2)];
    assert_eq!(Either::rights(items), vec![1, 2]);
    assert_eq!(Either::lefts(items), vec!["a", "b"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case(Either::Left(100), Either::Right(-100))]
#[case(Either::Left(1), Either::Left(2))]
#[case(Either::Right(1), Either::Right(2))]
fn ordering(#[case] smaller: Either<i32, i32>, #[case] larger: Either<i32, i32>) {
    assert!(smaller < larger);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(value in any::<i32>()) {
        let either: Either<String, i32> = Either::Right(value);
        prop_assert_eq!(either.clone().fmap(|n| n), either);
    }

    #[test]
    fn prop_functor_composition(value in any::<i16>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(3);
        let either: Either<String, i32> = Either::Right(i32::from(value));
        prop_assert_eq!(either.clone().map(f).map(g), either.map(|n| g(f(n))));
    }

    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::<String, i32>::Right(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_monad_right_identity(value in any::<i32>()) {
        let either: Either<String, i32> = Either::Right(value);
        prop_assert_eq!(either.clone().bind(Either::Right), either);
    }

    #[test]
    fn prop_monad_associativity(value in any::<i32>()) {
        let left = Either::Right(value).bind(halve).bind(halve);
        let right = Either::Right(value).bind(|n| halve(n).bind(halve));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_bind_on_left_never_calls_function(error in ".*") {
        let either: Either<String, i32> = Either::Left(error.clone());
        prop_assert_eq!(either.bind(|_| -> Either<String, i32> { panic!("called") }), Either::Left(error));
    }

    #[test]
    fn prop_traverse_a_collects_one_error_per_bad_input(inputs in prop::collection::vec(prop_oneof![Just("1"), Just("x")], 0..12)) {
        let bad = inputs.iter().filter(|text| **text == "x").count();
        match Either::traverse_a(inputs.iter().copied(), parse) {
            Either::Left(errors) => prop_assert_eq!(errors.len(), bad),
            Either::Right(values) => {
                prop_assert_eq!(bad, 0);
                prop_assert_eq!(values.len(), inputs.len());
            }
        }
    }
}
