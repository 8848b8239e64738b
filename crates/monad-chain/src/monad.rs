//! Monad construction
//!
//! [`Monad`] owns a [`Descriptor`] and is the entry point for running
//! chains. Either operation may be left out, in which case the default
//! ([`DefaultRet`] or [`DefaultBind`]) takes its place.
//!
//! # Example
//!
//! ```
//! use monad_chain::Monad;
//!
//! // Defaults on both sides: plain function application.
//! let identity = Monad::new();
//! let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 2];
//! assert_eq!(identity.pass(5).to(steps).force(), 12);
//!
//! // A custom `bind` with the default `ret`.
//! let logged = Monad::builder()
//!     .bind(|m: monad_chain::Deferred<i32>, f: fn(i32) -> i32| f(m.force()) + 100)
//!     .build();
//! let steps: [fn(i32) -> i32; 1] = [|x| x];
//! assert_eq!(logged.pass(1).to(steps).force(), 101);
//! ```

use crate::chain::Chain;
use crate::descriptor::{Bind, DefaultBind, DefaultRet, Descriptor, Ret};

/// A monad instance: a fixed `{ret, bind}` descriptor plus the chain entry
/// point.
///
/// The descriptor is chosen at construction and cannot be replaced; build a
/// new instance to use different operations.
#[derive(Clone, Copy, Debug)]
pub struct Monad<R = DefaultRet, B = DefaultBind> {
    descriptor: Descriptor<R, B>,
}

impl Monad {
    /// Create a monad with the default `ret` and `bind`.
    #[must_use]
    pub const fn new() -> Self {
        Monad::from_parts(DefaultRet, DefaultBind)
    }

    /// Start building a monad, with both operations defaulted.
    #[must_use]
    pub const fn builder() -> MonadBuilder {
        MonadBuilder::new()
    }
}

impl Default for Monad {
    fn default() -> Self {
        Monad::new()
    }
}

impl<R, B> Monad<R, B> {
    /// Create a monad from both operations.
    #[must_use]
    pub const fn from_parts(ret: R, bind: B) -> Self {
        Monad {
            descriptor: Descriptor::new(ret, bind),
        }
    }

    /// The installed descriptor.
    #[inline]
    pub const fn descriptor(&self) -> &Descriptor<R, B> {
        &self.descriptor
    }

    /// Apply the installed `ret`.
    #[inline]
    pub fn ret<T>(&self, value: T) -> <R as Ret<T>>::Wrapped
    where
        R: Ret<T>,
    {
        self.descriptor.ret().ret(value)
    }

    /// Apply the installed `bind`.
    #[inline]
    pub fn bind<M, F>(&self, wrapped: M, f: F) -> <B as Bind<M, F>>::Output
    where
        B: Bind<M, F>,
    {
        self.descriptor.bind().bind(wrapped, f)
    }

    /// Begin a chain over `value`.
    ///
    /// Nothing runs until [`Chain::to`] is called.
    #[inline]
    pub fn pass<T>(&self, value: T) -> Chain<'_, R, B, T> {
        Chain::new(self, value)
    }

    /// Run a whole chain at once. Same as `self.pass(value).to(functions)`.
    pub fn run<T, F, I>(&self, value: T, functions: I) -> <R as Ret<T>>::Wrapped
    where
        R: Ret<T>,
        B: Bind<<R as Ret<T>>::Wrapped, F, Output = T>,
        I: IntoIterator<Item = F>,
    {
        self.pass(value).to(functions)
    }
}

// ============================================================
// Builder
// ============================================================

/// Assembles a [`Monad`] from optional `ret` and `bind` operations.
///
/// Each setter replaces one slot and leaves the other as it was, so a
/// caller can supply either, both or neither.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonadBuilder<R = DefaultRet, B = DefaultBind> {
    ret: R,
    bind: B,
}

impl MonadBuilder {
    /// A builder with both operations defaulted.
    #[must_use]
    pub const fn new() -> Self {
        MonadBuilder {
            ret: DefaultRet,
            bind: DefaultBind,
        }
    }
}

impl<R, B> MonadBuilder<R, B> {
    /// Use `ret` as the return operation.
    #[must_use]
    pub fn ret<R2>(self, ret: R2) -> MonadBuilder<R2, B> {
        MonadBuilder {
            ret,
            bind: self.bind,
        }
    }

    /// Use `bind` as the bind operation.
    #[must_use]
    pub fn bind<B2>(self, bind: B2) -> MonadBuilder<R, B2> {
        MonadBuilder {
            ret: self.ret,
            bind,
        }
    }

    /// Finish construction.
    #[must_use]
    pub fn build(self) -> Monad<R, B> {
        Monad::from_parts(self.ret, self.bind)
    }
}

// ============================================================
// Tests
// ============================================================
