//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors: each one focuses on part of a larger
//! structure and knows how to read it and how to rebuild the structure
//! around a new focus.
//!
//! # Available Optics
//!
//! - [`Lens`]: a total focus on one field (`view` / `set`)
//! - [`Prism`]: a partial focus on one branch (`preview` / `review`)
//! - [`Iso`]: a lossless conversion (`view` / `review`), usable as either
//! - [`Traversal`]: an ordered list of lens and prism foci
//!
//! Optics work on Rust types through closures, the `lens!`, `prism!` and
//! `iso!` macros and `#[derive(Lenses, Prisms)]`, and on the dynamic
//! [`Value`] tree through [`lens::key`], [`prism::key`], [`prism::path`]
//! and [`prism::path_typed`].
//!
//! Every optic kind composes associatively and has an identity. The
//! type-erased forms [`DynLens`], [`DynPrism`] and [`DynIso`] over a single
//! type are monoids under composition, so a list of them folds with
//! `concat` in each module.
//!
//! # Example with Lens
//!
//! ```
//! use opticore::optics::Lens;
//! use opticore::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Company { name: String, address: Address }
//!
//! let city = lens!(Company, address).compose(lens!(Address, city));
//!
//! let company = Company {
//!     name: "Acme".to_string(),
//!     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
//! };
//!
//! assert_eq!(city.view(&company), "Tokyo");
//!
//! let moved = city.set(company, "Osaka".to_string());
//! assert_eq!(moved.address.city, "Osaka");
//! assert_eq!(moved.address.street, "Main St");
//! assert_eq!(moved.name, "Acme");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use opticore::control::Maybe;
//! use opticore::optics::{Prism, Value, prism};
//!
//! let zip = prism::path(["address", "zip"]);
//! let data = Value::map([("address", Value::map([("zip", Value::from("75001"))]))]);
//!
//! assert_eq!(zip.preview(&data), Maybe::Just(Value::from("75001")));
//! assert_eq!(zip.preview(&Value::map([("address", Value::Null)])), Maybe::Nothing);
//! ```
//!
//! # Laws
//!
//! - Lens: `view(set(s, a)) == a`, `set(s, view(s)) == s`,
//!   `set(set(s, a1), a2) == set(s, a2)`
//! - Prism: `preview(review(a)) == Just(a)`
//! - Iso: `review(view(s)) == s`, `view(review(a)) == a`

mod error;
pub mod iso;
pub mod lens;
pub mod prism;
mod traversal;
mod value;

pub use error::OpticError;

pub use lens::{ComposedLens, DynLens, FunctionLens, IdentityLens, KeyLens, Lens};

pub use prism::{
    ComposedPrism, DynPrism, FilterPrism, FunctionPrism, IdentityPrism, KeyPrism, NonePrism,
    PathPrism, Prism, SomePrism,
};

pub use iso::{ComposedIso, DynIso, FunctionIso, IdentityIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso};

pub use traversal::{Focus, Traversal};

pub use value::{Record, RecordType, Value};
