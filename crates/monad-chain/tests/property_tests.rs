//! Property tests for monad-chain
//!
//! These check the fold itself against the default descriptor, and the
//! monad laws for a Maybe-like descriptor defined here. The library never
//! checks the laws on its own; holding them is the job of whoever writes
//! the descriptor, which is what the second half of this file does.

use monad_chain::laws::{check_associativity, check_left_identity, check_right_identity};
use monad_chain::{Bind, Deferred, Monad};
use proptest::prelude::*;

/// `ret` for the Maybe-like descriptor: the value is already an `Option`.
#[derive(Clone, Copy, Debug)]
struct MaybeRet;

impl monad_chain::Ret<Option<i32>> for MaybeRet {
    type Wrapped = Option<i32>;

    fn ret(&self, value: Option<i32>) -> Option<i32> {
        value
    }
}

/// `bind` for the Maybe-like descriptor: skip the step on `None`.
#[derive(Clone, Copy, Debug)]
struct MaybeBind;

impl<F> Bind<Option<i32>, F> for MaybeBind
where
    F: FnOnce(i32) -> Option<i32>,
{
    type Output = Option<i32>;

    fn bind(&self, wrapped: Option<i32>, f: F) -> Option<i32> {
        wrapped.and_then(f)
    }
}

fn maybe() -> Monad<MaybeRet, MaybeBind> {
    Monad::from_parts(MaybeRet, MaybeBind)
}

fn half(x: i32) -> Option<i32> {
    if x % 2 == 0 {
        Some(x / 2)
    } else {
        None
    }
}

fn dec(x: i32) -> Option<i32> {
    x.checked_sub(1)
}

// ============================================================
// Default descriptor
// ============================================================

proptest! {
    #[test]
    fn default_chain_matches_direct_fold(seed in any::<i32>(), adds in prop::collection::vec(any::<i32>(), 0..16)) {
        let monad = Monad::new();
        let steps = adds.iter().map(|&n| move |x: i32| x.wrapping_add(n));
        let expected = adds.iter().fold(seed, |acc, &n| acc.wrapping_add(n));
        prop_assert_eq!(monad.pass(seed).to(steps).force(), expected);
    }

    #[test]
    fn default_empty_chain_is_seed(seed in any::<i64>()) {
        let monad = Monad::new();
        let none: [fn(i64) -> i64; 0] = [];
        prop_assert_eq!(monad.pass(seed).to(none), Deferred::new(seed));
    }

    #[test]
    fn default_chain_is_left_to_right(x in -1000i32..1000) {
        let monad = Monad::new();
        let f: fn(i32) -> i32 = |x| x - 1;
        let g: fn(i32) -> i32 = |x| x * 10;
        prop_assert_eq!(monad.pass(x).to([f, g]).force(), (x - 1) * 10);
        prop_assert_eq!(monad.pass(x).to([g, f]).force(), x * 10 - 1);
    }

    #[test]
    fn default_left_identity(x in any::<i32>()) {
        let monad = Monad::new();
        let f = |a: i32| Deferred::new(a.wrapping_mul(2));
        prop_assert_eq!(check_left_identity(&monad, Deferred::new, x, f), Ok(()));
    }

    #[test]
    fn default_right_identity(x in any::<i32>()) {
        let monad = Monad::new();
        prop_assert_eq!(check_right_identity(&monad, Deferred::new, Deferred::new(x)), Ok(()));
    }

    #[test]
    fn default_associativity(x in any::<i32>()) {
        let monad = Monad::new();
        let f = |a: i32| Deferred::new(a.wrapping_add(1));
        let g = |a: i32| Deferred::new(a.wrapping_mul(3));
        prop_assert_eq!(check_associativity(&monad, Deferred::new(x), f, g), Ok(()));
    }
}

// ============================================================
// Maybe-like descriptor
// ============================================================

proptest! {
    #[test]
    fn maybe_left_identity(x in any::<i32>()) {
        prop_assert_eq!(check_left_identity(&maybe(), Some, x, half), Ok(()));
    }

    #[test]
    fn maybe_right_identity(m in any::<Option<i32>>()) {
        prop_assert_eq!(check_right_identity(&maybe(), Some, m), Ok(()));
    }

    #[test]
    fn maybe_associativity(m in any::<Option<i32>>()) {
        prop_assert_eq!(check_associativity(&maybe(), m, dec, half), Ok(()));
    }

    #[test]
    fn maybe_chain_stops_at_none(x in any::<i32>()) {
        let steps: [fn(i32) -> Option<i32>; 2] = [half, dec];
        let expected = half(x).and_then(dec);
        prop_assert_eq!(maybe().pass(Some(x)).to(steps), expected);
    }

    #[test]
    fn maybe_none_seed_skips_every_step(len in 0usize..8) {
        let steps = vec![dec as fn(i32) -> Option<i32>; len];
        prop_assert_eq!(maybe().pass(None).to(steps), None);
    }
}
