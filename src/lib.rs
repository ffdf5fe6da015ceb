//! # opticore
//!
//! Composable optics, right-biased monads and an error-accumulating
//! validation engine.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup,
//!   Monoid, plus pluggable equality ([`typeclass::EqBy`]) and ordering
//!   ([`typeclass::OrdBy`])
//! - **Control Structures**: `Maybe`, `Either` and the deferred `Effect`
//! - **Optics**: Lens, Prism, Iso and Traversal, over Rust structs or over
//!   the dynamic [`optics::Value`] tree
//! - **Validation**: validators and predicates composed with `Any`, `Not`,
//!   `Each`, `All` and `validate`, accumulating every failure
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Either`, `Effect`
//! - `optics`: Optics and the `Value` tree
//! - `validator`: Validator and predicate engine
//! - `derive`: `#[derive(Lenses, Prisms)]`
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use opticore::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! let balance = lens!(Account, balance);
//! let account = Account { owner: "ada".to_string(), balance: 10 };
//!
//! let checked = validate(
//!     balance.view(&account),
//!     &[Positive.boxed(), Range::between(0, 100).boxed()],
//!     &Environment::new(),
//! );
//! assert_eq!(checked, Either::Right(10));
//!
//! let updated = balance.over(account, |amount| amount * 2);
//! assert_eq!(updated.balance, 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use opticore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "optics")]
    pub use crate::{iso, lens, prism};

    #[cfg(feature = "validator")]
    pub use crate::validator::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "validator")]
pub mod validator;

#[cfg(feature = "derive")]
pub use opticore_derive::{Lenses, Prisms};
