//! Toom-Cook-3 multiplication and squaring.
//!
//! Operands split three ways at `a = min(m, n) / 3` become quadratic
//! polynomials A, B over B^a; the product C = A*B has degree 4 and is
//! recovered from its values at the points {0, 1, -1, -2, inf}. The
//! interpolation divisions (by 2 and 3) are exact for every well-formed
//! input.

use super::{compose, dispatch, karatsuba, split};
use crate::bigint::BigInt;

/// Values of a 3-part polynomial at {1, -1, -2}; the values at 0 and inf
/// are the outer coefficients themselves.
fn evaluate(p: &[BigInt]) -> (BigInt, BigInt, BigInt) {
    let e = &p[0] + &p[2];
    let a1 = &e + &p[1];
    let am1 = &e - &p[1];
    let mut am2 = p[2].mul_small(4);
    am2 += &p[0];
    am2 -= &p[1].mul_small(2);
    (a1, am1, am2)
}

/// Recovers the five product coefficients from the pointwise products.
pub(crate) fn interpolate(
    v0: BigInt,
    v1: BigInt,
    vm1: BigInt,
    vm2: BigInt,
    vinf: BigInt,
) -> [BigInt; 5] {
    // (C(1) + C(-1))/2 = z0 + z2 + z4
    let mut z2 = &v1 + &vm1;
    z2.div_small_exact_assign(2);
    z2 -= &v0;
    z2 -= &vinf;

    // (C(1) - C(-1))/2 = z1 + z3
    let mut t = v1;
    t -= &vm1;
    t.div_small_exact_assign(2);

    // z0 + 4*z2 + 16*z4 - C(-2) = 2*z1 + 8*z3
    let mut s = z2.mul_small(4);
    s += &v0;
    s += &vinf.mul_small(16);
    s -= &vm2;
    s.div_small_exact_assign(2);

    // s = z1 + 4*z3 and t = z1 + z3
    let mut z3 = s;
    z3 -= &t;
    z3.div_small_exact_assign(3);
    let mut z1 = t;
    z1 -= &z3;

    [v0, z1, z2, z3, vinf]
}

/// Multiplies two magnitudes by one Toom-3 step.
///
/// Input signs are ignored; the result is non-negative.
#[must_use]
pub fn toom3_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let a = x.len().min(y.len()) / 3;
    if a == 0 {
        return karatsuba::karatsuba_mul(x, y);
    }
    let xs = split(x, a, 3);
    let ys = split(y, a, 3);
    let (ax1, axm1, axm2) = evaluate(&xs);
    let (by1, bym1, bym2) = evaluate(&ys);

    let v0 = dispatch::mul(&xs[0], &ys[0]);
    let v1 = dispatch::mul(&ax1, &by1);
    let vm1 = dispatch::mul(&axm1, &bym1);
    let vm2 = dispatch::mul(&axm2, &bym2);
    let vinf = dispatch::mul(&xs[2], &ys[2]);

    compose(&interpolate(v0, v1, vm1, vm2, vinf), a)
}

/// Squares a magnitude by one Toom-3 step.
#[must_use]
pub fn toom3_sqr(x: &BigInt) -> BigInt {
    let a = x.len() / 3;
    if a == 0 {
        return karatsuba::karatsuba_sqr(x);
    }
    let xs = split(x, a, 3);
    let (a1, am1, am2) = evaluate(&xs);

    let v0 = dispatch::sqr(&xs[0]);
    let v1 = dispatch::sqr(&a1);
    let vm1 = dispatch::sqr(&am1);
    let vm2 = dispatch::sqr(&am2);
    let vinf = dispatch::sqr(&xs[2]);

    compose(&interpolate(v0, v1, vm1, vm2, vinf), a)
}
