//! Effect - a deferred computation that ends in an `Either`.
//!
//! `Effect<E, A>` describes work without performing it. Nothing runs until
//! [`Effect::run`] is called, which evaluates the whole chain once and
//! returns `Either<E, A>`. A `Left` produced anywhere in the chain skips the
//! remaining `map`/`bind` steps, exactly like `Either` itself.
//!
//! `run` is synchronous. Scheduling, suspension and cancellation belong to
//! whatever drives the effect, not to this type.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use opticore::control::{Effect, Either};
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//!
//! let effect = Effect::<String, i32>::new(move || {
//!     counter.set(counter.get() + 1);
//!     Either::Right(20)
//! })
//! .map(|n| n + 1)
//! .bind(|n| Effect::pure(n * 2));
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(effect.run(), Either::Right(42));
//! assert_eq!(calls.get(), 1);
//! ```

use std::fmt;

use super::Either;

/// A deferred computation yielding `Either<E, A>` when run.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Effect::pure(a).bind(f)` runs like `f(a)`
/// 2. **Right Identity**: `m.bind(Effect::pure)` runs like `m`
/// 3. **Associativity**: `m.bind(f).bind(g)` runs like `m.bind(|x| f(x).bind(g))`
pub struct Effect<E, A> {
    computation: Box<dyn FnOnce() -> Either<E, A>>,
}

impl<E: 'static, A: 'static> Effect<E, A> {
    /// Defers `computation` until [`Effect::run`].
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> Either<E, A> + 'static,
    {
        Self {
            computation: Box::new(computation),
        }
    }

    /// An effect that succeeds with `value`.
    pub fn pure(value: A) -> Self {
        Self::new(move || Either::Right(value))
    }

    /// An effect that fails with `error`.
    pub fn fail(error: E) -> Self {
        Self::new(move || Either::Left(error))
    }

    /// Lifts an already computed `Either`.
    pub fn from_either(either: Either<E, A>) -> Self {
        Self::new(move || either)
    }

    /// Evaluates the computation.
    ///
    /// This is the only way to observe the outcome. A panic raised inside a
    /// caller's closure propagates from here unchanged.
    pub fn run(self) -> Either<E, A> {
        (self.computation)()
    }

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> Effect<E, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Effect::new(move || self.run().map(function))
    }

    /// Transforms the failure value.
    pub fn map_left<T, F>(self, function: F) -> Effect<T, A>
    where
        F: FnOnce(E) -> T + 'static,
        T: 'static,
    {
        Effect::new(move || self.run().map_left(function))
    }

    /// Sequences a dependent effect. The continuation is never called if
    /// this effect fails.
    pub fn bind<B, F>(self, function: F) -> Effect<E, B>
    where
        F: FnOnce(A) -> Effect<E, B> + 'static,
        B: 'static,
    {
        Effect::new(move || match self.run() {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value).run(),
        })
    }

    /// Applies the function produced by this effect to the value produced
    /// by `argument`.
    ///
    /// This effect runs first. If it fails, `argument` is never run and its
    /// failure is discarded, matching [`Either::ap`].
    pub fn ap<T, B>(self, argument: Effect<E, T>) -> Effect<E, B>
    where
        A: FnOnce(T) -> B,
        T: 'static,
        B: 'static,
    {
        Effect::new(move || match self.run() {
            Either::Left(error) => Either::Left(error),
            Either::Right(function) => argument.run().map(function),
        })
    }
}

impl<E: 'static, A: 'static> From<Either<E, A>> for Effect<E, A> {
    fn from(either: Either<E, A>) -> Self {
        Self::from_either(either)
    }
}

impl<E, A> fmt::Debug for Effect<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Effect(<deferred>)")
    }
}
