//! Property-based tests for Iso laws.
//!
//! - **ViewReview**: `iso.review(iso.view(source)) == source`
//! - **ReviewView**: `iso.view(iso.review(value)) == value`

#![cfg(feature = "optics")]

use opticore::control::Maybe;
use opticore::iso;
use opticore::optics::{DynIso, Iso, Lens, Prism, iso as isos};
use opticore::typeclass::Monoid;
use proptest::prelude::*;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Meters(i64);

fn offset() -> impl Iso<i64, i64> + Clone + Send + Sync + 'static {
    iso!(|n: i64| n.wrapping_add(7), |n: i64| n.wrapping_sub(7))
}

fn negate() -> impl Iso<i64, i64> + Clone + Send + Sync + 'static {
    iso!(|n: i64| n.wrapping_neg(), |n: i64| n.wrapping_neg())
}

fn meters() -> impl Iso<Meters, i64> + Clone {
    iso!(|meters: Meters| meters.0, Meters)
}

fn pair_swap() -> impl Iso<(i64, String), (String, i64)> + Clone {
    iso!(|(a, b): (i64, String)| (b, a), |(b, a): (String, i64)| (a, b))
}

proptest! {
    #[test]
    fn prop_view_review(source in any::<i64>()) {
        prop_assert_eq!(offset().review(offset().view(source)), source);
    }

    #[test]
    fn prop_review_view(value in any::<i64>()) {
        prop_assert_eq!(offset().view(offset().review(value)), value);
    }

    #[test]
    fn prop_newtype_round_trip(value in any::<i64>()) {
        prop_assert_eq!(meters().view(meters().review(value)), value);
        prop_assert_eq!(meters().review(value), Meters(value));
    }

    #[test]
    fn prop_swap_round_trip(number in any::<i64>(), text in ".{0,6}") {
        let source = (number, text);
        prop_assert_eq!(pair_swap().review(pair_swap().view(source.clone())), source);
    }

    #[test]
    fn prop_reverse_reverses(value in any::<i64>()) {
        let reversed = offset().reverse();
        prop_assert_eq!(reversed.view(value), offset().review(value));
        prop_assert_eq!(reversed.review(value), offset().view(value));
    }

    #[test]
    fn prop_composition_laws_and_order(value in any::<i64>()) {
        let composed = offset().compose(negate());
        prop_assert_eq!(composed.view(value), value.wrapping_add(7).wrapping_neg());
        prop_assert_eq!(composed.review(composed.view(value)), value);
    }

    #[test]
    fn prop_composition_is_associative(value in any::<i64>()) {
        let left = offset().compose(negate()).compose(offset());
        let right = offset().compose(negate().compose(offset()));
        prop_assert_eq!(left.view(value), right.view(value));
        prop_assert_eq!(left.review(value), right.review(value));
    }

    #[test]
    fn prop_identity_is_unit(value in any::<i64>()) {
        let left = isos::identity().compose(offset());
        let right = offset().compose(isos::identity());
        prop_assert_eq!(left.view(value), offset().view(value));
        prop_assert_eq!(right.review(value), offset().review(value));
    }

    #[test]
    fn prop_over_and_under(value in -1_000_i64..1_000) {
        prop_assert_eq!(offset().over(value, |n| n * 2), (value + 7) * 2 - 7);
        prop_assert_eq!(offset().under(value, |n| n * 2), (value - 7) * 2 + 7);
    }
}

#[rstest]
fn as_lens_obeys_lens_laws() {
    let lens = isos::as_lens::<i64, i64, _>(&offset());
    assert_eq!(lens.view(&3), 10);
    assert_eq!(lens.set(3, lens.view(&3)), 3);
    assert_eq!(lens.view(&lens.set(99, 20)), 20);
}

#[rstest]
fn as_prism_always_matches() {
    let prism = isos::as_prism::<i64, i64, _>(&offset());
    assert_eq!(prism.preview(&3), Maybe::Just(10));
    assert_eq!(prism.review(10), 3);
    assert_eq!(offset().to_prism().preview(&prism.review(42)), Maybe::Just(42));
}

#[rstest]
fn concat_composes_in_order() {
    let folded = isos::concat([offset().into_dyn(), negate().into_dyn()]);
    assert_eq!(folded.view(1), -8);
    assert_eq!(folded.review(-8), 1);
}

#[rstest]
fn empty_concat_is_identity() {
    let identity = <DynIso<i64, i64> as Monoid>::empty();
    assert_eq!(identity.view(5), 5);
    assert_eq!(isos::concat(Vec::<DynIso<i64, i64>>::new()).review(5), 5);
}
