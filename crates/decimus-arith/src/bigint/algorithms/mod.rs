//! Multiplication and squaring algorithms.
//!
//! Each submodule implements one algorithm family; [`dispatch`] selects
//! among them by operand size. The kernels multiply magnitudes: input
//! signs are ignored and results are non-negative. Signs are applied once,
//! by the dispatcher.

pub mod dispatch;
pub mod karatsuba;
pub mod schoolbook;
pub mod toom3;
pub mod toom4;
pub mod toom6h;

use super::limbs;
use super::BigInt;

/// Splits a magnitude into `parts` polynomial coefficients of `a` limbs
/// each (the top part takes the remainder). Little-endian: index 0 is the
/// least significant part.
pub(crate) fn split(x: &BigInt, a: usize, parts: usize) -> Vec<BigInt> {
    let limbs = x.limbs();
    let mut out = Vec::with_capacity(parts);
    for i in 0..parts {
        let lo = (i * a).min(limbs.len());
        let hi = if i + 1 == parts { limbs.len() } else { ((i + 1) * a).min(limbs.len()) };
        out.push(BigInt::from_limbs(true, limbs[lo..hi].to_vec()));
    }
    out
}

/// Recomposes `sum(parts[k] * B^(a*k))` from non-negative parts.
pub(crate) fn compose(parts: &[BigInt], a: usize) -> BigInt {
    let mut acc: Vec<u64> = Vec::new();
    for (i, p) in parts.iter().enumerate() {
        debug_assert!(!p.is_negative(), "recomposed coefficients must be non-negative");
        limbs::add_at(&mut acc, p.limbs(), i * a);
    }
    BigInt::from_limbs(true, acc)
}
