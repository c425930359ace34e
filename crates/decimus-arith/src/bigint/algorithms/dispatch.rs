//! Size-directed selection of the multiplication and squaring kernels.
//!
//! Let m >= n be the operand limb counts. The smaller count picks the
//! algorithm; strongly unequal operands are rebalanced for the recursive
//! kernels by shifting the short one up by m - n zero limbs and stripping
//! the same number of (zero) limbs from the low end of the product.
//!
//! Operand equality is tested by value, not identity, so `x * x` takes the
//! squaring paths transparently.

use num_traits::Zero;

use super::{karatsuba, schoolbook, toom3, toom4, toom6h};
use crate::bigint::BigInt;

/// Below this limb count multiplication stays schoolbook.
pub const KARATSUBA_THRESHOLD: usize = 50;

/// Below this limb count Karatsuba beats Toom-3.
pub const TOOM3_THRESHOLD: usize = 300;

/// Below this limb count Toom-3 beats Toom-4.5.
pub const TOOM4_THRESHOLD: usize = 700;

/// Below this limb count Toom-4.5 beats Toom-6.5h.
pub const TOOM6H_THRESHOLD: usize = 900;

/// Squaring keeps Toom-4 far beyond the multiplication crossover; only
/// truly enormous operands profit from Toom-6.5h squaring.
pub const TOOM6H_SQR_THRESHOLD: usize = 50 * TOOM6H_THRESHOLD;

/// Multiplies two signed big integers, dispatching on operand size.
#[must_use]
pub fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    if x.is_zero() || y.is_zero() {
        return BigInt::zero();
    }
    let non_negative = x.sign() == y.sign();
    let mag = if x.limbs() == y.limbs() {
        sqr_magnitude(x)
    } else {
        let (big, small) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        mul_magnitude(big, small)
    };
    if non_negative {
        mag
    } else {
        -mag
    }
}

/// Squares a signed big integer; the result is non-negative.
#[must_use]
pub fn sqr(x: &BigInt) -> BigInt {
    if x.is_zero() {
        return BigInt::zero();
    }
    sqr_magnitude(x)
}

/// Magnitude product for `len(x) >= len(y)`.
fn mul_magnitude(x: &BigInt, y: &BigInt) -> BigInt {
    let (m, n) = (x.len(), y.len());
    if n < KARATSUBA_THRESHOLD {
        return schoolbook::schoolbook_mul(x, y);
    }
    if m > n {
        let pad = m - n;
        let y_pad = y.shl_limbs(pad);
        let mut p = mul_balanced(x, &y_pad, m);
        p.shr_limbs_exact(pad);
        p
    } else {
        mul_balanced(x, y, n)
    }
}

fn mul_balanced(x: &BigInt, y: &BigInt, n: usize) -> BigInt {
    if n < TOOM3_THRESHOLD {
        karatsuba::karatsuba_mul(x, y)
    } else if n < TOOM4_THRESHOLD {
        toom3::toom3_mul(x, y)
    } else if n < TOOM6H_THRESHOLD {
        toom4::toom4h_mul(x, y)
    } else {
        toom6h::toom6h_mul(x, y)
    }
}

fn sqr_magnitude(x: &BigInt) -> BigInt {
    let n = x.len();
    if n < KARATSUBA_THRESHOLD {
        schoolbook::schoolbook_sqr(x)
    } else if n < TOOM3_THRESHOLD {
        karatsuba::karatsuba_sqr(x)
    } else if n < TOOM4_THRESHOLD {
        toom3::toom3_sqr(x)
    } else if n < TOOM6H_SQR_THRESHOLD {
        toom4::toom4_sqr(x)
    } else {
        toom6h::toom6h_sqr(x)
    }
}
