//! Monad chains
//!
//! Compose a sequence of functions through a pluggable "wrap" (`ret`) and
//! "sequence" (`bind`) pair, without having to build a monad type first.
//!
//! # Overview
//!
//! A [`Monad`] owns a fixed `{ret, bind}` [`Descriptor`]. Either operation
//! may be left out, in which case a default is installed:
//!
//! - [`DefaultRet`] wraps a value in a [`Deferred`].
//! - [`DefaultBind`] forces the deferred value and applies the next step to
//!   it, returning the step's result untouched.
//!
//! [`Monad::pass`] starts a [`Chain`] over a seed value and [`Chain::to`]
//! folds the steps through the descriptor:
//!
//! ```text
//! output = ret(value)
//! for f in functions:
//!     output = ret(bind(output, f))
//! ```
//!
//! # Example
//!
//! ```
//! use monad_chain::Monad;
//!
//! let monad = Monad::new();
//! let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 2];
//! let result = monad.pass(5).to(steps);
//! assert_eq!(result.force(), 12);
//! ```
//!
//! A custom pair replaces plain application. Here `bind` skips the
//! remaining steps once a value is missing:
//!
//! ```
//! use monad_chain::Monad;
//!
//! let maybe = Monad::builder()
//!     .ret(|m: Option<i32>| m)
//!     .bind(|m: Option<i32>, f: fn(i32) -> Option<i32>| m.and_then(f))
//!     .build();
//!
//! let steps: [fn(i32) -> Option<i32>; 2] = [|x| x.checked_sub(10), |x| Some(x * 2)];
//! assert_eq!(maybe.pass(Some(15)).to(steps), Some(10));
//! assert_eq!(maybe.pass(None).to(steps), None);
//! ```
//!
//! No check is made that a supplied pair obeys the monad laws. The
//! [`laws`] module has helpers for authors who want to test their own.

#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod chain;
pub mod descriptor;
pub mod laws;
pub mod monad;

// Re-export main types at crate level
pub use chain::Chain;
pub use descriptor::{Bind, DefaultBind, DefaultRet, Deferred, Descriptor, Ret, Thunk};
pub use laws::{LawResult, LawViolation, Step};
pub use monad::{Monad, MonadBuilder};
