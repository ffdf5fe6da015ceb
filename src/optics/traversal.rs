//! Traversal optics for reading several foci at once.
//!
//! A Traversal holds an ordered list of foci, each a lens or a prism over
//! the same source. Lens foci always contribute; prism foci contribute
//! only when they match. Two read modes follow from that:
//!
//! - [`Traversal::to_list`] is best effort: it collects whatever matched.
//! - [`Traversal::to_list_maybe`] is all or nothing: one missing prism focus
//!   turns the whole result into `Nothing`. This is how a caller demands that
//!   independently optional fields are present together.
//!
//! # Examples
//!
//! ```
//! use opticore::control::Maybe;
//! use opticore::optics::{Traversal, Value, prism};
//!
//! let amounts = Traversal::empty()
//!     .with_prism(prism::key("card_amount"))
//!     .with_prism(prism::key("item_amount"));
//!
//! let complete = Value::map([("card_amount", Value::from(5)), ("item_amount", Value::from(5))]);
//! let partial = Value::map([("card_amount", Value::from(5))]);
//!
//! assert_eq!(amounts.to_list_maybe(&complete), Maybe::Just(vec![Value::from(5), Value::from(5)]));
//! assert_eq!(amounts.to_list(&partial), vec![Value::from(5)]);
//! assert_eq!(amounts.to_list_maybe(&partial), Maybe::Nothing);
//! ```

use std::fmt;

use super::lens::{DynLens, Lens};
use super::prism::{DynPrism, Prism};
use crate::control::Maybe;
use crate::typeclass::{Monoid, Semigroup};

/// One focus of a [`Traversal`].
pub enum Focus<S, A> {
    /// A total focus. Its `view` must succeed on every source it is given.
    Lens(DynLens<S, A>),
    /// A partial focus.
    Prism(DynPrism<S, A>),
}

impl<S, A> Focus<S, A> {
    /// Wraps a lens.
    pub fn lens<L>(lens: L) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
    {
        Self::Lens(lens.into_dyn())
    }

    /// Wraps a prism.
    pub fn prism<P>(prism: P) -> Self
    where
        P: Prism<S, A> + Send + Sync + 'static,
    {
        Self::Prism(prism.into_dyn())
    }

    /// Reads this focus. Lenses always yield `Just`.
    pub fn read(&self, source: &S) -> Maybe<A> {
        match self {
            Self::Lens(lens) => Maybe::Just(lens.view(source)),
            Self::Prism(prism) => prism.preview(source),
        }
    }

    /// Returns `true` for a prism focus.
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Prism(_))
    }
}

impl<S, A> Clone for Focus<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Lens(lens) => Self::Lens(lens.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
        }
    }
}

impl<S, A> fmt::Debug for Focus<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lens(lens) => formatter.debug_tuple("Lens").field(lens).finish(),
            Self::Prism(prism) => formatter.debug_tuple("Prism").field(prism).finish(),
        }
    }
}

impl<S, A> From<DynLens<S, A>> for Focus<S, A> {
    fn from(lens: DynLens<S, A>) -> Self {
        Self::Lens(lens)
    }
}

impl<S, A> From<DynPrism<S, A>> for Focus<S, A> {
    fn from(prism: DynPrism<S, A>) -> Self {
        Self::Prism(prism)
    }
}

/// An ordered collection of lens and prism foci over `S`.
///
/// Traversals combine by concatenating their foci, with [`Traversal::empty`]
/// as the identity.
pub struct Traversal<S, A> {
    foci: Vec<Focus<S, A>>,
}

impl<S, A> Traversal<S, A> {
    /// Builds a traversal from foci, kept in the given order.
    pub fn new<I>(foci: I) -> Self
    where
        I: IntoIterator<Item = Focus<S, A>>,
    {
        Self {
            foci: foci.into_iter().collect(),
        }
    }

    /// A traversal with no foci.
    #[must_use]
    pub const fn empty() -> Self {
        Self { foci: Vec::new() }
    }

    /// Appends a lens focus.
    #[must_use]
    pub fn with_lens<L>(mut self, lens: L) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
    {
        self.foci.push(Focus::lens(lens));
        self
    }

    /// Appends a prism focus.
    #[must_use]
    pub fn with_prism<P>(mut self, prism: P) -> Self
    where
        P: Prism<S, A> + Send + Sync + 'static,
    {
        self.foci.push(Focus::prism(prism));
        self
    }

    /// The foci, in order.
    pub fn foci(&self) -> &[Focus<S, A>] {
        &self.foci
    }

    /// Number of foci.
    pub fn len(&self) -> usize {
        self.foci.len()
    }

    /// Returns `true` when there are no foci.
    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }

    /// Collects every focus that yields a value, in focus order.
    ///
    /// Lens foci always contribute. A lens applied to data without its
    /// field panics, as lenses are total.
    pub fn to_list(&self, source: &S) -> Vec<A> {
        self.foci
            .iter()
            .filter_map(|focus| focus.read(source).to_option())
            .collect()
    }

    /// Collects every focus, or `Nothing` if any prism focus misses.
    ///
    /// Every focus is read before deciding, so a lens over a missing field
    /// panics here just as in [`Traversal::to_list`]. An empty traversal
    /// yields `Just(vec![])`.
    pub fn to_list_maybe(&self, source: &S) -> Maybe<Vec<A>> {
        let mut values = Vec::with_capacity(self.foci.len());
        let mut missed = 0;
        for (index, focus) in self.foci.iter().enumerate() {
            match focus.read(source) {
                Maybe::Just(value) => values.push(value),
                Maybe::Nothing => {
                    tracing::trace!(focus = index, foci = self.foci.len(), "traversal focus missed");
                    missed += 1;
                }
            }
        }
        if missed == 0 {
            Maybe::Just(values)
        } else {
            Maybe::Nothing
        }
    }

    /// The first focus that yields a value.
    pub fn preview(&self, source: &S) -> Maybe<A> {
        self.foci
            .iter()
            .find_map(|focus| focus.read(source).to_option())
            .into()
    }

    /// Returns `true` when [`Traversal::preview`] finds a value.
    pub fn has(&self, source: &S) -> bool {
        self.preview(source).is_just()
    }
}

impl<S, A> Default for Traversal<S, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, A> Clone for Traversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            foci: self.foci.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Traversal<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Traversal")
            .field("foci", &self.foci)
            .finish()
    }
}

impl<S, A> FromIterator<Focus<S, A>> for Traversal<S, A> {
    fn from_iter<I: IntoIterator<Item = Focus<S, A>>>(iterator: I) -> Self {
        Self::new(iterator)
    }
}

impl<S, A> Semigroup for Traversal<S, A> {
    fn combine(mut self, other: Self) -> Self {
        self.foci.extend(other.foci);
        self
    }
}

impl<S, A> Monoid for Traversal<S, A> {
    fn empty() -> Self {
        Self::empty()
    }
}
