//! Chain execution
//!
//! A [`Chain`] is created by [`Monad::pass`] and consumed by [`Chain::to`]
//! (or [`Chain::try_to`]). Execution is a strict left fold:
//!
//! ```text
//! output = ret(value)
//! for f in functions:
//!     output = ret(bind(output, f))
//! return output
//! ```
//!
//! The seed is wrapped once before any step runs and every step's result is
//! wrapped again, so the final value is always monadic, even for an empty
//! chain. Nothing is caught: a panic inside `ret`, `bind` or a step unwinds
//! straight through to the caller.

use crate::descriptor::{Bind, Ret};
use crate::monad::Monad;

/// A pending chain: a seed value waiting for its steps.
///
/// Holds a borrow of the monad that created it, so the descriptor cannot
/// change underneath it. Running the chain consumes it.
#[must_use = "a chain does nothing until `to` is called"]
#[derive(Debug)]
pub struct Chain<'m, R, B, T> {
    monad: &'m Monad<R, B>,
    value: T,
}

impl<'m, R, B, T> Chain<'m, R, B, T> {
    pub(crate) fn new(monad: &'m Monad<R, B>, value: T) -> Self {
        Chain { monad, value }
    }

    /// Run the chain over `functions`, in order.
    ///
    /// With no functions the result is `ret(value)`. Intermediate results are
    /// passed on unchanged whatever they are; there is no short-circuit
    /// unless the descriptor's `bind` implements one.
    ///
    /// # Example
    ///
    /// ```
    /// use monad_chain::Monad;
    ///
    /// let monad = Monad::new();
    /// let steps: [fn(i32) -> i32; 2] = [|x| x - 1, |x| x * 10];
    /// assert_eq!(monad.pass(3).to(steps).force(), 20);
    ///
    /// let none: [fn(i32) -> i32; 0] = [];
    /// assert_eq!(monad.pass(7).to(none).force(), 7);
    /// ```
    pub fn to<F, I>(self, functions: I) -> <R as Ret<T>>::Wrapped
    where
        R: Ret<T>,
        B: Bind<<R as Ret<T>>::Wrapped, F, Output = T>,
        I: IntoIterator<Item = F>,
    {
        let monad = self.monad;
        let mut output = monad.ret(self.value);
        let mut steps = 0usize;
        for f in functions {
            output = monad.ret(monad.bind(output, f));
            steps += 1;
            tracing::trace!(step = steps, "bound chain step");
        }
        tracing::trace!(steps, "chain complete");
        output
    }

    /// Run the chain over fallible steps.
    ///
    /// Behaves like [`Chain::to`] while `bind` returns `Ok`. The first `Err`
    /// is handed back to the caller exactly as `bind` produced it and the
    /// remaining steps are never run.
    ///
    /// # Example
    ///
    /// ```
    /// use monad_chain::Monad;
    ///
    /// let monad = Monad::new();
    /// let steps: [fn(u32) -> Result<u32, String>; 2] = [
    ///     |x| x.checked_sub(5).ok_or_else(|| format!("{x} is too small")),
    ///     |x| Ok(x * 2),
    /// ];
    /// assert_eq!(monad.pass(8).try_to(steps).unwrap().force(), 6);
    /// assert_eq!(monad.pass(2).try_to(steps).unwrap_err(), "2 is too small");
    /// ```
    pub fn try_to<F, I, E>(self, functions: I) -> Result<<R as Ret<T>>::Wrapped, E>
    where
        R: Ret<T>,
        B: Bind<<R as Ret<T>>::Wrapped, F, Output = Result<T, E>>,
        I: IntoIterator<Item = F>,
    {
        let monad = self.monad;
        let mut output = monad.ret(self.value);
        let mut steps = 0usize;
        for f in functions {
            steps += 1;
            let bound = monad.bind(output, f);
            if bound.is_err() {
                tracing::trace!(step = steps, "chain stopped");
            }
            output = monad.ret(bound?);
            tracing::trace!(step = steps, "bound chain step");
        }
        tracing::trace!(steps, "chain complete");
        Ok(output)
    }
}

// ============================================================
// Tests
// ============================================================
