//! Monad law checks
//!
//! [`Monad`] accepts any `ret`/`bind` pair without checking it. Whether a
//! pair composes sensibly is up to whoever supplies it, and these helpers
//! let that author test it:
//!
//! - Left identity: `bind(unit(a), f) == f(a)`
//! - Right identity: `bind(m, unit) == m`
//! - Associativity: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
//!
//! `unit` is the function that lifts a plain value into the monad as a
//! chain step would produce it. For the default descriptor that is
//! [`Deferred::new`](crate::Deferred::new). Steps are handed to `bind` as
//! boxed [`Step`]s, so a custom closure `bind` used with these checks must
//! accept that type.
//!
//! Nothing in the chain executor calls these functions.
//!
//! # Example
//!
//! ```
//! use monad_chain::laws::{check_left_identity, check_right_identity};
//! use monad_chain::{Deferred, Monad};
//!
//! let monad = Monad::new();
//! let f = |x: i32| Deferred::new(x * 2);
//! assert!(check_left_identity(&monad, Deferred::new, 21, f).is_ok());
//! assert!(check_right_identity(&monad, Deferred::new, Deferred::new(5)).is_ok());
//! ```

use std::fmt::Debug;

use thiserror::Error;

use crate::descriptor::Bind;
use crate::monad::Monad;

/// A boxed chain step from `A` to the monadic value `M`.
pub type Step<A, M> = Box<dyn Fn(A) -> M>;

/// A failed law check.
///
/// Both sides of the offending equation are kept in their `Debug` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// `bind(unit(a), f)` differed from `f(a)`.
    #[error("left identity violated: bind(unit(a), f) = {left}, f(a) = {right}")]
    LeftIdentity {
        /// `bind(unit(a), f)`.
        left: String,
        /// `f(a)`.
        right: String,
    },

    /// `bind(m, unit)` differed from `m`.
    #[error("right identity violated: bind(m, unit) = {left}, m = {right}")]
    RightIdentity {
        /// `bind(m, unit)`.
        left: String,
        /// `m`.
        right: String,
    },

    /// The two groupings of `f` and `g` disagreed.
    #[error("associativity violated: bind(bind(m, f), g) = {left}, bind(m, f >=> g) = {right}")]
    Associativity {
        /// `bind(bind(m, f), g)`.
        left: String,
        /// `bind(m, |x| bind(f(x), g))`.
        right: String,
    },
}

/// Result of a single law check.
pub type LawResult = Result<(), LawViolation>;

/// Check `bind(unit(a), f) == f(a)`.
pub fn check_left_identity<R, B, A, M, U, F>(monad: &Monad<R, B>, unit: U, a: A, f: F) -> LawResult
where
    A: Clone,
    M: PartialEq + Debug,
    U: Fn(A) -> M,
    F: Fn(A) -> M + 'static,
    B: Bind<M, Step<A, M>, Output = M>,
{
    let right = f(a.clone());
    let left = monad.bind(unit(a), Box::new(f) as Step<A, M>);
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::LeftIdentity {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Check `bind(m, unit) == m`.
pub fn check_right_identity<R, B, A, M, U>(monad: &Monad<R, B>, unit: U, m: M) -> LawResult
where
    M: Clone + PartialEq + Debug,
    U: Fn(A) -> M + 'static,
    B: Bind<M, Step<A, M>, Output = M>,
{
    let left = monad.bind(m.clone(), Box::new(unit) as Step<A, M>);
    if left == m {
        Ok(())
    } else {
        Err(LawViolation::RightIdentity {
            left: format!("{left:?}"),
            right: format!("{m:?}"),
        })
    }
}

/// Check `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`.
///
/// The composed step carries its own copy of the installed `bind`, hence
/// the `Clone + 'static` bound on `B`.
pub fn check_associativity<R, B, A, M, F, G>(monad: &Monad<R, B>, m: M, f: F, g: G) -> LawResult
where
    A: 'static,
    M: Clone + PartialEq + Debug + 'static,
    F: Fn(A) -> M + Clone + 'static,
    G: Fn(A) -> M + Clone + 'static,
    B: Bind<M, Step<A, M>, Output = M> + Clone + 'static,
{
    let first = monad.bind(m.clone(), Box::new(f.clone()) as Step<A, M>);
    let left = monad.bind(first, Box::new(g.clone()) as Step<A, M>);

    let bind = monad.descriptor().bind().clone();
    let composed: Step<A, M> =
        Box::new(move |x| bind.bind(f(x), Box::new(g.clone()) as Step<A, M>));
    let right = monad.bind(m, composed);

    if left == right {
        Ok(())
    } else {
        Err(LawViolation::Associativity {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

// ============================================================
// Tests
// ============================================================
