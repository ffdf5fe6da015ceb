//! Tests for `Traversal`: collection versus enforcement reads over mixed
//! lens and prism foci.

#![cfg(feature = "optics")]

use opticore::control::Maybe;
use opticore::optics::{Focus, FunctionPrism, Traversal, Value, lens, prism};
use opticore::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card(i64),
    Cash(i64),
}

#[derive(Clone, PartialEq, Debug)]
struct Order {
    item_amount: i64,
    payment: Payment,
}

#[fixture]
fn amounts() -> Traversal<Value, Value> {
    Traversal::empty()
        .with_prism(prism::key("card_amount"))
        .with_prism(prism::key("item_amount"))
}

// =============================================================================
// Co-presence
// =============================================================================

#[rstest]
fn collection_mode_keeps_what_matched(amounts: Traversal<Value, Value>) {
    let partial = Value::map([("card_amount", Value::from(5))]);
    assert_eq!(amounts.to_list(&partial), vec![Value::from(5)]);
}

#[rstest]
fn enforcement_mode_needs_every_prism(amounts: Traversal<Value, Value>) {
    let partial = Value::map([("card_amount", Value::from(5))]);
    assert_eq!(amounts.to_list_maybe(&partial), Maybe::Nothing);

    let complete = Value::map([
        ("card_amount", Value::from(5)),
        ("item_amount", Value::from(5)),
    ]);
    assert_eq!(
        amounts.to_list_maybe(&complete),
        Maybe::Just(vec![Value::from(5), Value::from(5)])
    );
}

#[rstest]
fn null_fields_count_as_missing(amounts: Traversal<Value, Value>) {
    let nulled = Value::map([
        ("card_amount", Value::Null),
        ("item_amount", Value::from(5)),
    ]);
    assert_eq!(amounts.to_list(&nulled), vec![Value::from(5)]);
    assert_eq!(amounts.to_list_maybe(&nulled), Maybe::Nothing);
}

#[rstest]
fn card_amount_must_equal_item_amount() {
    let card_amount = FunctionPrism::new(
        |order: &Order| match order.payment {
            Payment::Card(amount) => Maybe::Just(amount),
            Payment::Cash(_) => Maybe::Nothing,
        },
        |amount: i64| Order {
            item_amount: amount,
            payment: Payment::Card(amount),
        },
    );
    let amounts = Traversal::empty()
        .with_prism(card_amount)
        .with_lens(opticore::lens!(Order, item_amount));

    let paid = Order {
        item_amount: 12,
        payment: Payment::Card(12),
    };
    let cash = Order {
        item_amount: 12,
        payment: Payment::Cash(12),
    };

    let equal_when_present = |order: &Order| match amounts.to_list_maybe(order) {
        Maybe::Just(values) => values.windows(2).all(|pair| pair[0] == pair[1]),
        Maybe::Nothing => true,
    };
    assert!(equal_when_present(&paid));
    assert!(equal_when_present(&cash));
    assert_eq!(amounts.to_list(&cash), vec![12]);
}

#[rstest]
#[should_panic(expected = "missing key `total`")]
fn enforcement_mode_still_reads_lenses_after_a_miss() {
    let traversal = Traversal::empty()
        .with_prism(prism::key("card"))
        .with_lens(lens::key("total"));
    let _ = traversal.to_list_maybe(&Value::map([("other", Value::from(1))]));
}

// =============================================================================
// Structure
// =============================================================================

#[rstest]
fn preview_is_first_match_in_focus_order() {
    let source = Value::map([("b", Value::from(2)), ("c", Value::from(3))]);
    let traversal = Traversal::new([
        Focus::prism(prism::key("a")),
        Focus::prism(prism::key("c")),
        Focus::lens(lens::key("b")),
    ]);
    assert_eq!(traversal.preview(&source), Maybe::Just(Value::from(3)));
    assert!(traversal.has(&source));
}

#[rstest]
fn foci_report_partiality() {
    let traversal: Traversal<Value, Value> = [
        Focus::lens(lens::key("a")),
        Focus::prism(prism::key("b")),
    ]
    .into_iter()
    .collect();
    let partial: Vec<bool> = traversal.foci().iter().map(Focus::is_partial).collect();
    assert_eq!(partial, vec![false, true]);
    assert_eq!(traversal.len(), 2);
}

#[rstest]
fn monoid_identity_and_concat() {
    let source = Value::map([("a", Value::from(1)), ("b", Value::from(2))]);
    let a = Traversal::empty().with_lens(lens::key("a"));
    let b = Traversal::empty().with_prism(prism::key("b"));

    assert!(Traversal::<Value, Value>::empty().is_empty());
    assert_eq!(
        <Traversal<Value, Value> as Monoid>::empty()
            .combine(a.clone())
            .to_list(&source),
        a.to_list(&source)
    );
    assert_eq!(
        <Traversal<Value, Value> as Monoid>::concat([a, b]).to_list_maybe(&source),
        Maybe::Just(vec![Value::from(1), Value::from(2)])
    );
}

proptest! {
    #[test]
    fn prop_to_list_maybe_is_just_iff_every_prism_matches(present in prop::collection::vec(any::<bool>(), 0..6)) {
        let keys: Vec<String> = (0..present.len()).map(|index| format!("k{index}")).collect();
        let source = Value::map(
            keys.iter()
                .zip(&present)
                .filter(|(_, here)| **here)
                .map(|(key, _)| (key.clone(), Value::from(1))),
        );
        let traversal: Traversal<Value, Value> =
            keys.iter().map(|key| Focus::prism(prism::key(key.clone()))).collect();

        let matched = present.iter().filter(|here| **here).count();
        prop_assert_eq!(traversal.to_list(&source).len(), matched);
        prop_assert_eq!(traversal.to_list_maybe(&source).is_just(), matched == present.len());
    }
}
