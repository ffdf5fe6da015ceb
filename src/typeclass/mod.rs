//! Type class traits for functional programming abstractions.
//!
//! The container type classes are resolved at compile time through trait
//! bounds:
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Semigroup`] / [`Monoid`]: associative combination with identity
//!
//! Comparison is a separate capability, decoupled from the standard
//! `PartialEq`/`Ord` so that callers can swap in their own rules:
//!
//! - [`EqBy`]: pluggable equality, [`Structural`] by default
//! - [`OrdBy`]: pluggable total ordering, [`Structural`] by default
//!
//! ## Higher-Kinded Types Emulation
//!
//! [`TypeConstructor`] uses Generic Associated Types to let a trait talk
//! about "the same container with a different element type".
//!
//! # Examples
//!
//! ```rust
//! use opticore::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(String::concat(vec!["a".to_string(), "b".to_string()]), "ab");
//! ```

mod applicative;
mod eq;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod ord;
mod semigroup;

pub use applicative::Applicative;
pub use eq::{EqBy, EqContramap, EqFn, Structural, eq_contramap};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use ord::{OrdBy, OrdContramap, OrdFn, Reversed, Then, ord_contramap, ord_reverse, ord_then};
pub use semigroup::Semigroup;

#[cfg(feature = "control")]
pub use eq::{EitherEq, MaybeEq, either_eq, maybe_eq};
#[cfg(feature = "control")]
pub use ord::{EitherOrd, MaybeOrd, either_ord, maybe_ord};
