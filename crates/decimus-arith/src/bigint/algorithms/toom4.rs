//! Toom-Cook-4 squaring and Toom-Cook-4.5 multiplication.
//!
//! Operands split four ways become cubic polynomials; the degree-6 product
//! is recovered from seven pointwise values. Squaring evaluates at
//! {0, 1, -1, 2, -2, -1/2, inf}; multiplication uses the symmetric
//! half-point set {0, 1, -1, 2, -2, 1/2, -1/2} with no point at infinity.
//! Half-point evaluations are scaled by 2^3, so every pointwise product is
//! the integer 2^6 * C(+-1/2), and all interpolation divisions (by 2, 3,
//! 4, 5, 12, 15) are exact.

use super::{compose, dispatch, split, toom3};
use crate::bigint::BigInt;

/// Values of a 4-part polynomial at {1, -1, 2, -2} and the scaled half
/// points 8*A(1/2), 8*A(-1/2).
struct Eval4 {
    a1: BigInt,
    am1: BigInt,
    a2: BigInt,
    am2: BigInt,
    ah: BigInt,
    amh: BigInt,
}

fn evaluate(p: &[BigInt]) -> Eval4 {
    let e = &p[0] + &p[2];
    let o = &p[1] + &p[3];
    let a1 = &e + &o;
    let am1 = &e - &o;

    let mut e2 = p[2].mul_small(4);
    e2 += &p[0];
    let mut o2 = p[1].mul_small(2);
    o2 += &p[3].mul_small(8);
    let a2 = &e2 + &o2;
    let am2 = &e2 - &o2;

    // 8*A(1/2) = 8*p0 + 4*p1 + 2*p2 + p3
    let mut eh = p[0].mul_small(8);
    eh += &p[2].mul_small(2);
    let mut oh = p[1].mul_small(4);
    oh += &p[3];
    let ah = &eh + &oh;
    let amh = &eh - &oh;

    Eval4 { a1, am1, a2, am2, ah, amh }
}

/// Shared solve for the odd coefficients z1, z3, z5 from
/// s1 = z1+z3+z5, s2 = z1+4*z3+16*z5, s3 = 16*z1+4*z3+z5.
fn solve_odd(s1: &BigInt, s2: BigInt, s3: BigInt) -> (BigInt, BigInt, BigInt) {
    let mut u = s2;
    u -= s1;
    u.div_small_exact_assign(3); // z3 + 5*z5

    let mut v = s1.mul_small(16);
    v -= &s3;
    v.div_small_exact_assign(3); // 4*z3 + 5*z5

    let mut z3 = v;
    z3 -= &u;
    z3.div_small_exact_assign(3);

    let mut z5 = u;
    z5 -= &z3;
    z5.div_small_exact_assign(5);

    let mut z1 = s1.clone();
    z1 -= &z3;
    z1 -= &z5;
    (z1, z3, z5)
}

/// Recovers the seven product coefficients for the multiplication point
/// set {0, 1, -1, 2, -2, 1/2, -1/2}; `wp`/`wm` are 2^6 * C(+-1/2).
pub(crate) fn interpolate_mul(
    v0: BigInt,
    v1: BigInt,
    vm1: BigInt,
    v2: BigInt,
    vm2: BigInt,
    wp: BigInt,
    wm: BigInt,
) -> [BigInt; 7] {
    let mut e1 = &v1 + &vm1;
    e1.div_small_exact_assign(2);
    e1 -= &v0; // z2 + z4 + z6

    let mut e2 = &v2 + &vm2;
    e2.div_small_exact_assign(2);
    e2 -= &v0; // 4*z2 + 16*z4 + 64*z6

    let mut e3 = &wp + &wm;
    e3.div_small_exact_assign(2);
    e3 -= &v0.mul_small(64); // 16*z2 + 4*z4 + z6

    let mut alpha = e2;
    alpha -= &e1.mul_small(4);
    alpha.div_small_exact_assign(12); // z4 + 5*z6

    let mut beta = e1.mul_small(16);
    beta -= &e3;
    beta.div_small_exact_assign(3); // 4*z4 + 5*z6

    let mut z4 = beta;
    z4 -= &alpha;
    z4.div_small_exact_assign(3);
    let mut z6 = alpha;
    z6 -= &z4;
    z6.div_small_exact_assign(5);
    let mut z2 = e1;
    z2 -= &z4;
    z2 -= &z6;

    let mut s1 = &v1 - &vm1;
    s1.div_small_exact_assign(2); // z1 + z3 + z5
    let mut s2 = v2;
    s2 -= &vm2;
    s2.div_small_exact_assign(4); // z1 + 4*z3 + 16*z5
    let mut s3 = wp;
    s3 -= &wm;
    s3.div_small_exact_assign(4); // 16*z1 + 4*z3 + z5

    let (z1, z3, z5) = solve_odd(&s1, s2, s3);

    [v0, z1, z2, z3, z4, z5, z6]
}

/// Recovers the seven product coefficients for the squaring point set
/// {0, 1, -1, 2, -2, -1/2, inf}; `wm` is 2^6 * C(-1/2).
pub(crate) fn interpolate_sqr(
    v0: BigInt,
    v1: BigInt,
    vm1: BigInt,
    v2: BigInt,
    vm2: BigInt,
    wm: BigInt,
    vinf: BigInt,
) -> [BigInt; 7] {
    let mut p = &v1 + &vm1;
    p.div_small_exact_assign(2);
    p -= &v0;
    p -= &vinf; // z2 + z4

    let mut q = &v2 + &vm2;
    q.div_small_exact_assign(2);
    q -= &v0;
    q -= &vinf.mul_small(64);
    q.div_small_exact_assign(4); // z2 + 4*z4

    let mut z4 = q;
    z4 -= &p;
    z4.div_small_exact_assign(3);
    let mut z2 = p;
    z2 -= &z4;

    let mut s1 = &v1 - &vm1;
    s1.div_small_exact_assign(2); // z1 + z3 + z5
    let mut s2 = v2;
    s2 -= &vm2;
    s2.div_small_exact_assign(4); // z1 + 4*z3 + 16*z5

    // 64*z0 + 16*z2 + 4*z4 + z6 - wm = 2*(16*z1 + 4*z3 + z5)
    let mut s3 = v0.mul_small(64);
    s3 += &z2.mul_small(16);
    s3 += &z4.mul_small(4);
    s3 += &vinf;
    s3 -= &wm;
    s3.div_small_exact_assign(2);

    let (z1, z3, z5) = solve_odd(&s1, s2, s3);

    [v0, z1, z2, z3, z4, z5, vinf]
}

/// Multiplies two magnitudes by one Toom-4.5 step (symmetric half points,
/// no point at infinity).
///
/// Input signs are ignored; the result is non-negative.
#[must_use]
pub fn toom4h_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let a = x.len().min(y.len()) / 4;
    if a == 0 {
        return toom3::toom3_mul(x, y);
    }
    let xs = split(x, a, 4);
    let ys = split(y, a, 4);
    let ex = evaluate(&xs);
    let ey = evaluate(&ys);

    let v0 = dispatch::mul(&xs[0], &ys[0]);
    let v1 = dispatch::mul(&ex.a1, &ey.a1);
    let vm1 = dispatch::mul(&ex.am1, &ey.am1);
    let v2 = dispatch::mul(&ex.a2, &ey.a2);
    let vm2 = dispatch::mul(&ex.am2, &ey.am2);
    let wp = dispatch::mul(&ex.ah, &ey.ah);
    let wm = dispatch::mul(&ex.amh, &ey.amh);

    compose(&interpolate_mul(v0, v1, vm1, v2, vm2, wp, wm), a)
}

/// Squares a magnitude by one Toom-4 step.
#[must_use]
pub fn toom4_sqr(x: &BigInt) -> BigInt {
    let a = x.len() / 4;
    if a == 0 {
        return toom3::toom3_sqr(x);
    }
    let xs = split(x, a, 4);
    let ex = evaluate(&xs);

    let v0 = dispatch::sqr(&xs[0]);
    let v1 = dispatch::sqr(&ex.a1);
    let vm1 = dispatch::sqr(&ex.am1);
    let v2 = dispatch::sqr(&ex.a2);
    let vm2 = dispatch::sqr(&ex.am2);
    let wm = dispatch::sqr(&ex.amh);
    let vinf = dispatch::sqr(&xs[3]);

    compose(&interpolate_sqr(v0, v1, vm1, v2, vm2, wm, vinf), a)
}
