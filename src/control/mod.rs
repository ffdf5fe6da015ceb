//! Control structures: absence, failure and deferred computation.
//!
//! - [`Maybe`]: an optional value, `Just(T)` or `Nothing`
//! - [`Either`]: a right-biased `Left(L)` / `Right(R)` result
//! - [`Effect`]: a deferred computation that yields an `Either` when run
//!
//! # Examples
//!
//! ```rust
//! use opticore::control::{Either, Maybe};
//!
//! let port = Maybe::Just("8080")
//!     .to_either(|| "port is required")
//!     .bind(|text| text.parse::<u16>().map_err(|_| "port is not a number").into());
//! assert_eq!(port, Either::Right(8080));
//! ```

mod effect;
mod either;
mod maybe;

pub use effect::Effect;
pub use either::Either;
pub use maybe::Maybe;
