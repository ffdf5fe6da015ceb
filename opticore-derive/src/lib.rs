//! Derive macros for opticore optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! Generated optics view by value, so focused fields must be `Clone`.
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use opticore::Lenses;
//! use opticore::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().view(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use opticore::Prisms;
//! use opticore::control::Maybe;
//! use opticore::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(Shape::circle_prism().preview(&circle), Maybe::Just(5.0));
//! assert_eq!(Shape::rectangle_prism().preview(&circle), Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating lenses for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields
/// - Every field type must implement `Clone`
///
/// # Compile Errors
///
/// Deriving on an enum, a union, a tuple struct or a unit struct is a
/// compile error.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating prisms for enum variants.
///
/// For each variant `FooBar`, generates `foo_bar_prism()`. The focus type
/// depends on the variant's shape:
///
/// - unit variant: `()`
/// - single-field tuple variant: the field type
/// - multi-field tuple or struct variant: a tuple of the field types, in
///   declaration order
///
/// # Requirements
///
/// - Every field type must implement `Clone`
///
/// # Compile Errors
///
/// Deriving on a struct or a union is a compile error.
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
