//! Validators and predicates built on [`Either`](crate::control::Either).
//!
//! A validator gates a possibly absent value in an [`Environment`]:
//!
//! ```text
//! validate(Maybe<T>, &Environment) -> Either<ValidationError, Maybe<T>>
//! ```
//!
//! Absence (`Nothing`) is not failure. Every validator except [`Required`]
//! passes it through as `Right(Nothing)`.
//!
//! # Composition
//!
//! - [`validate`] and [`All`] run every validator and accumulate every
//!   message
//! - [`Any`] stops at the first alternative that passes
//! - [`Not`] inverts a validator but never negates absence
//! - [`Each`] checks every element of a list, keeping per-element failures
//! - [`At`] validates the focus of a lens or prism
//!
//! Predicates ([`Predicate`], [`p_all`], [`p_any`], [`p_none`], [`p_not`]) are
//! the boolean counterpart and lift into validators through [`Satisfies`].
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::Either;
//! use opticore::lens;
//! use opticore::validator::{
//!     At, Each, Environment, MaxLength, MinLength, Positive, Validator, validate,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Cart {
//!     owner: String,
//!     quantities: Vec<i64>,
//! }
//!
//! let rules = [
//!     At::lens(lens!(Cart, owner), MinLength::new(1).boxed()).labelled("owner").boxed(),
//!     At::lens(lens!(Cart, quantities), Each::new(Positive.boxed()).boxed()).boxed(),
//!     At::lens(lens!(Cart, quantities), MaxLength::new(3).boxed()).labelled("quantities").boxed(),
//! ];
//!
//! let cart = Cart { owner: String::new(), quantities: vec![1, 0, 2, 5] };
//! assert_eq!(
//!     validate(cart, &rules, &Environment::new()).unwrap_left().messages(),
//!     [
//!         "owner: length must be at least 1",
//!         "[1] must be positive",
//!         "quantities: length must be at most 3",
//!     ]
//! );
//! ```

mod combinator;
mod contract;
mod error;
mod focus;
mod leaf;
mod options;
mod predicate;

pub use combinator::{All, Any, Each, Not};
pub use contract::{BoxedValidator, Environment, Validator, validate};
pub use error::ValidationError;
pub use focus::At;
pub use leaf::{Equal, Length, MaxLength, MinLength, Negative, Positive, Range, Required, Satisfies};
pub use options::{
    AnyOptions, EachOptions, EqualOptions, LengthOptions, NotOptions, PredicateOptions,
    RangeOptions, RequiredOptions,
};
pub use predicate::{Predicate, p_all, p_any, p_none, p_not};
