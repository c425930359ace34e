//! Karatsuba multiplication and squaring.
//!
//! One split at `a = min(m, n) / 2` turns the product into three
//! half-sized products: with x = x1*B^a + x0 and y = y1*B^a + y0,
//!
//! ```text
//! x*y = P2*B^(2a) + (P2 + P0 - P1)*B^a + P0
//! P2 = x1*y1,  P0 = x0*y0,  P1 = (x1 - x0)*(y1 - y0)
//! ```
//!
//! The middle term is assembled destructively: the split halves are
//! consumed to form the differences, and the residue accumulates into a
//! copy of P2 in place.

use super::{compose, dispatch, schoolbook, split};
use crate::bigint::BigInt;

/// Multiplies two magnitudes by one Karatsuba step, recursing through the
/// dispatcher for the three sub-products.
///
/// Input signs are ignored; the result is non-negative.
#[must_use]
pub fn karatsuba_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let a = x.len().min(y.len()) / 2;
    if a == 0 {
        return schoolbook::schoolbook_mul(x, y);
    }
    let mut xs = split(x, a, 2);
    let mut ys = split(y, a, 2);
    let (x0, x1) = (xs.remove(0), xs.remove(0));
    let (y0, y1) = (ys.remove(0), ys.remove(0));

    let p2 = dispatch::mul(&x1, &y1);
    let p0 = dispatch::mul(&x0, &y0);

    // x1/x0/y1/y0 are dead after these moves.
    let mut dx = x1;
    dx -= &x0;
    let mut dy = y1;
    dy -= &y0;
    let p1 = dispatch::mul(&dx, &dy);

    let mut mid = p2.clone();
    mid += &p0;
    mid -= &p1;

    compose(&[p0, mid, p2], a)
}

/// Squares a magnitude by one Karatsuba step.
///
/// The specialisation of `karatsuba_mul` with x == y; the middle residue
/// `P2 + P0 - P1` reduces to `2*x1*x0`.
#[must_use]
pub fn karatsuba_sqr(x: &BigInt) -> BigInt {
    let a = x.len() / 2;
    if a == 0 {
        return schoolbook::schoolbook_sqr(x);
    }
    let mut xs = split(x, a, 2);
    let (x0, x1) = (xs.remove(0), xs.remove(0));

    let p2 = dispatch::sqr(&x1);
    let p0 = dispatch::sqr(&x0);

    let mut dx = x1;
    dx -= &x0;
    let p1 = dispatch::sqr(&dx);

    let mut mid = p2.clone();
    mid += &p0;
    mid -= &p1;

    compose(&[p0, mid, p2], a)
}
