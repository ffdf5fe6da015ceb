//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! `TypeConstructor` records the element type of a container and how to
//! re-apply the same constructor to another element type, which is enough
//! to state `Functor`, `Applicative` and `Monad` once and resolve them at
//! compile time for every concrete container.
//!
//! # Example
//!
//! ```rust
//! use opticore::control::Maybe;
//! use opticore::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_int: Maybe<i32> = Maybe::Just(42);
//! let nothing: Maybe<String> = rewrap(just_int);
//! assert_eq!(nothing, Maybe::Nothing);
//! ```

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A trait for emulating higher-kinded types.
///
/// # Type Parameters
///
/// - `Inner`: the element type currently held by the container
/// - `WithType<B>`: the same container holding `B` instead
pub trait TypeConstructor {
    /// The element type of this container.
    type Inner;

    /// The same container constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

#[cfg(feature = "control")]
impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn vec_with_type_changes_element() {
        fn assert_with<T: TypeConstructor<WithType<String> = Vec<String>>>() {}
        assert_with::<Vec<i32>>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = u8>>() {}
        assert_inner::<Maybe<u8>>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn either_keeps_left_type_when_rewrapped() {
        fn assert_with<T: TypeConstructor<WithType<bool> = Either<String, bool>>>() {}
        assert_with::<Either<String, i32>>();
    }
}
