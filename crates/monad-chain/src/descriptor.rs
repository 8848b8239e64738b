//! Monad descriptors
//!
//! A descriptor is the pair of operations that decides how a chain composes:
//!
//! - [`Ret`] lifts a plain value into the monadic representation.
//! - [`Bind`] unwraps a monadic value, feeds it to the next step and yields
//!   that step's result.
//!
//! Both traits are implemented for ordinary closures, so any `Fn(T) -> M`
//! is a valid `ret` and any `Fn(M, F) -> U` is a valid `bind`. When a caller
//! does not supply one, [`DefaultRet`] and [`DefaultBind`] give plain function
//! application over a deferred value.
//!
//! # Example
//!
//! ```
//! use monad_chain::descriptor::{Bind, DefaultBind, DefaultRet, Ret};
//!
//! let wrapped = DefaultRet.ret(20);
//! let doubled = DefaultBind.bind(wrapped, |x: i32| x * 2);
//! assert_eq!(doubled, 40);
//! ```

// ============================================================
// Deferred Values
// ============================================================

/// A zero-argument computation.
///
/// This is the shape the default [`Bind`] expects of a monadic value: it
/// forces the value and hands the result to the next step. Every
/// `FnOnce() -> T` is a thunk, as is [`Deferred`].
pub trait Thunk {
    /// The value produced when forced.
    type Output;

    /// Run the computation.
    fn force(self) -> Self::Output;
}

impl<F, T> Thunk for F
where
    F: FnOnce() -> T,
{
    type Output = T;

    #[inline]
    fn force(self) -> T {
        self()
    }
}

/// The default monadic value: a plain value held until it is forced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deferred<T>(T);

impl<T> Deferred<T> {
    /// Hold a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Deferred(value)
    }

    /// Consume the deferred value and return what it holds.
    #[inline]
    pub fn force(self) -> T {
        self.0
    }

    /// Return a copy of the held value, leaving `self` usable.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.clone()
    }

    /// Borrow the held value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }
}

impl<T> Thunk for Deferred<T> {
    type Output = T;

    #[inline]
    fn force(self) -> T {
        self.0
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Deferred(value)
    }
}

// ============================================================
// Return
// ============================================================

/// The `ret` operation: lift a plain `T` into a monadic value.
pub trait Ret<T> {
    /// The monadic value produced.
    type Wrapped;

    /// Wrap `value`.
    fn ret(&self, value: T) -> Self::Wrapped;
}

/// The default `ret`: wraps a value in a [`Deferred`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultRet;

impl<T> Ret<T> for DefaultRet {
    type Wrapped = Deferred<T>;

    #[inline]
    fn ret(&self, value: T) -> Deferred<T> {
        Deferred::new(value)
    }
}

impl<G, T, M> Ret<T> for G
where
    G: Fn(T) -> M,
{
    type Wrapped = M;

    #[inline]
    fn ret(&self, value: T) -> M {
        self(value)
    }
}

// ============================================================
// Bind
// ============================================================

/// The `bind` operation: feed a monadic value `M` to a step `F`.
///
/// Implementations are free to decide what "feeding" means. Nothing checks
/// that a `ret`/`bind` pair obeys the monad laws; see [`crate::laws`] for
/// opt-in checks.
pub trait Bind<M, F> {
    /// The result of the step.
    type Output;

    /// Unwrap `wrapped`, apply `f` and return its result.
    fn bind(&self, wrapped: M, f: F) -> Self::Output;
}

/// The default `bind`: forces the monadic value and applies the step to it.
///
/// The step's result is returned as-is, not re-wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultBind;

impl<M, F, U> Bind<M, F> for DefaultBind
where
    M: Thunk,
    F: FnOnce(M::Output) -> U,
{
    type Output = U;

    #[inline]
    fn bind(&self, wrapped: M, f: F) -> U {
        f(wrapped.force())
    }
}

impl<G, M, F, U> Bind<M, F> for G
where
    G: Fn(M, F) -> U,
{
    type Output = U;

    #[inline]
    fn bind(&self, wrapped: M, f: F) -> U {
        self(wrapped, f)
    }
}

// ============================================================
// Descriptor
// ============================================================

/// An immutable `{ret, bind}` pair.
///
/// Built once by [`crate::Monad`] and never changed afterwards; every chain
/// run through the owning monad uses these two operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Descriptor<R = DefaultRet, B = DefaultBind> {
    ret: R,
    bind: B,
}

impl<R, B> Descriptor<R, B> {
    pub(crate) const fn new(ret: R, bind: B) -> Self {
        Descriptor { ret, bind }
    }

    /// The installed `ret` operation.
    #[inline]
    pub const fn ret(&self) -> &R {
        &self.ret
    }

    /// The installed `bind` operation.
    #[inline]
    pub const fn bind(&self) -> &B {
        &self.bind
    }
}

// ============================================================
// Tests
// ============================================================
