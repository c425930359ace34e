//! Factorials by binary splitting.

use decimus_arith::BigInt;
use num_traits::One;

/// Computes `n!` exactly.
///
/// The index range is split recursively so the partial products stay
/// balanced in size, which keeps the multiplication kernels in their
/// sub-quadratic regimes for large `n`.
#[must_use]
pub fn factorial(n: u64) -> BigInt {
    if n < 2 {
        return BigInt::one();
    }
    product(1, n + 1)
}

/// Product of the integers in `[lo, hi)`.
fn product(lo: u64, hi: u64) -> BigInt {
    if hi - lo <= 8 {
        let mut acc = BigInt::from(lo);
        for k in lo + 1..hi {
            acc = &acc * &BigInt::from(k);
        }
        return acc;
    }
    let mid = lo + (hi - lo) / 2;
    &product(lo, mid) * &product(mid, hi)
}
