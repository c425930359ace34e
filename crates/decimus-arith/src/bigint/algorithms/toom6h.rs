//! Toom-Cook-6.5h multiplication and squaring.
//!
//! Operands split six ways become degree-5 polynomials; the degree-10
//! product is recovered from eleven pointwise values: the trivial product
//! at 0 and the ten symmetric points +-1, +-2, +-3, +-1/2, +-1/3.
//! Half- and third-point evaluations are scaled by 2^5 and 3^5, so the
//! pointwise products are the integers 2^10 * C(+-1/2) and
//! 3^10 * C(+-1/3).
//!
//! Interpolation separates even and odd coefficients; both subsystems
//! reduce to the same 5-unknown elimination (`solve5`). Every division
//! along the way (by 2, 3, 4, 5, 8, 9, 15, 35, 80) is exact for
//! well-formed input.

use super::{compose, dispatch, split, toom4};
use crate::bigint::BigInt;

/// Values of a 6-part polynomial at the ten symmetric points.
struct Eval6 {
    a1: BigInt,
    am1: BigInt,
    a2: BigInt,
    am2: BigInt,
    a3: BigInt,
    am3: BigInt,
    ah: BigInt,
    amh: BigInt,
    at: BigInt,
    amt: BigInt,
}

fn evaluate(p: &[BigInt]) -> Eval6 {
    // +-1
    let mut e = &p[0] + &p[2];
    e += &p[4];
    let mut o = &p[1] + &p[3];
    o += &p[5];
    let a1 = &e + &o;
    let am1 = &e - &o;

    // +-2
    let mut e = p[2].mul_small(4);
    e += &p[0];
    e += &p[4].mul_small(16);
    let mut o = p[1].mul_small(2);
    o += &p[3].mul_small(8);
    o += &p[5].mul_small(32);
    let a2 = &e + &o;
    let am2 = &e - &o;

    // +-3
    let mut e = p[2].mul_small(9);
    e += &p[0];
    e += &p[4].mul_small(81);
    let mut o = p[1].mul_small(3);
    o += &p[3].mul_small(27);
    o += &p[5].mul_small(243);
    let a3 = &e + &o;
    let am3 = &e - &o;

    // 32*A(+-1/2) = 32*p0 + 16*p1 + 8*p2 + 4*p3 + 2*p4 + p5
    let mut e = p[0].mul_small(32);
    e += &p[2].mul_small(8);
    e += &p[4].mul_small(2);
    let mut o = p[1].mul_small(16);
    o += &p[3].mul_small(4);
    o += &p[5];
    let ah = &e + &o;
    let amh = &e - &o;

    // 243*A(+-1/3) = 243*p0 + 81*p1 + 27*p2 + 9*p3 + 3*p4 + p5
    let mut e = p[0].mul_small(243);
    e += &p[2].mul_small(27);
    e += &p[4].mul_small(3);
    let mut o = p[1].mul_small(81);
    o += &p[3].mul_small(9);
    o += &p[5];
    let at = &e + &o;
    let amt = &e - &o;

    Eval6 { a1, am1, a2, am2, a3, am3, ah, amh, at, amt }
}

/// Solves the shared 5-unknown system
///
/// ```text
///    u0 +    u1 +   u2 +   u3 +   u4 = g1
///    u0 +   4u1 +  16u2 +  64u3 + 256u4 = g2
///    u0 +   9u1 +  81u2 + 729u3 + 6561u4 = g3
///  256u0 +  64u1 +  16u2 +   4u3 +   u4 = g4
/// 6561u0 + 729u1 +  81u2 +   9u3 +   u4 = g5
/// ```
///
/// by sequential elimination with exact divisions. Both the even and the
/// odd halves of the interpolation are instances of this system.
fn solve5(g1: BigInt, g2: BigInt, g3: BigInt, g4: BigInt, g5: BigInt) -> [BigInt; 5] {
    let mut d1 = g2;
    d1 -= &g1;
    d1.div_small_exact_assign(3); // u1 + 5u2 + 21u3 + 85u4

    let mut d2 = g3;
    d2 -= &g1;
    d2.div_small_exact_assign(8); // u1 + 10u2 + 91u3 + 820u4

    let mut d3 = g1.mul_small(256);
    d3 -= &g4;
    d3.div_small_exact_assign(3); // 64u1 + 80u2 + 84u3 + 85u4

    let mut d4 = g1.mul_small(6561);
    d4 -= &g5;
    d4.div_small_exact_assign(8); // 729u1 + 810u2 + 819u3 + 820u4

    let mut e1 = d2;
    e1 -= &d1;
    e1.div_small_exact_assign(5); // u2 + 14u3 + 147u4

    let mut e2 = d1.mul_small(64);
    e2 -= &d3;
    e2.div_small_exact_assign(15); // 16u2 + 84u3 + 357u4

    let mut e3 = d1.mul_small(729);
    e3 -= &d4;
    e3.div_small_exact_assign(5); // 567u2 + 2898u3 + 12229u4

    let mut f1 = e1.mul_small(16);
    f1 -= &e2;
    f1.div_small_exact_assign(35); // 4u3 + 57u4

    let mut f2 = e1.mul_small(567);
    f2 -= &e3;
    f2.div_small_exact_assign(80); // 63u3 + 889u4

    let mut u4 = f1.mul_small(63);
    u4 -= &f2.mul_small(4);
    u4.div_small_exact_assign(35);

    let mut u3 = f1;
    u3 -= &u4.mul_small(57);
    u3.div_small_exact_assign(4);

    let mut u2 = e1;
    u2 -= &u3.mul_small(14);
    u2 -= &u4.mul_small(147);

    let mut u1 = d1;
    u1 -= &u2.mul_small(5);
    u1 -= &u3.mul_small(21);
    u1 -= &u4.mul_small(85);

    let mut u0 = g1;
    u0 -= &u1;
    u0 -= &u2;
    u0 -= &u3;
    u0 -= &u4;

    [u0, u1, u2, u3, u4]
}

/// Pointwise products feeding the interpolation; `h*` carry the 2^10 and
/// `t*` the 3^10 scale.
pub(crate) struct Products6 {
    pub v0: BigInt,
    pub p1: BigInt,
    pub m1: BigInt,
    pub p2: BigInt,
    pub m2: BigInt,
    pub p3: BigInt,
    pub m3: BigInt,
    pub hp: BigInt,
    pub hm: BigInt,
    pub tp: BigInt,
    pub tm: BigInt,
}

/// Recovers the eleven product coefficients from the pointwise products.
pub(crate) fn interpolate(v: Products6) -> [BigInt; 11] {
    let half = |plus: &BigInt, minus: &BigInt| {
        let mut s = plus + minus;
        s.div_small_exact_assign(2);
        let mut d = plus - minus;
        d.div_small_exact_assign(2);
        (s, d)
    };

    let (a1, b1) = half(&v.p1, &v.m1);
    let (a2, b2) = half(&v.p2, &v.m2);
    let (a3, b3) = half(&v.p3, &v.m3);
    let (a4, b4) = half(&v.hp, &v.hm);
    let (a5, b5) = half(&v.tp, &v.tm);

    // Odd half: nodes 1, 4, 9 and the reversed rows from the scaled
    // half/third points.
    let mut g2 = b2;
    g2.div_small_exact_assign(2);
    let mut g3 = b3;
    g3.div_small_exact_assign(3);
    let mut g4 = b4;
    g4.div_small_exact_assign(2);
    let mut g5 = b5;
    g5.div_small_exact_assign(3);
    let [z1, z3, z5, z7, z9] = solve5(b1, g2, g3, g4, g5);

    // Even half: peel the known z0 off every row first.
    let z0 = v.v0;
    let mut h1 = a1;
    h1 -= &z0;
    let mut h2 = a2;
    h2 -= &z0;
    h2.div_small_exact_assign(4);
    let mut h3 = a3;
    h3 -= &z0;
    h3.div_small_exact_assign(9);
    let mut h4 = a4;
    h4 -= &z0.mul_small(1024);
    let mut h5 = a5;
    h5 -= &z0.mul_small(59049);
    let [z2, z4, z6, z8, z10] = solve5(h1, h2, h3, h4, h5);

    [z0, z1, z2, z3, z4, z5, z6, z7, z8, z9, z10]
}

/// Multiplies two magnitudes by one Toom-6.5h step.
///
/// Input signs are ignored; the result is non-negative.
#[must_use]
pub fn toom6h_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let a = x.len().min(y.len()) / 6;
    if a == 0 {
        return toom4::toom4h_mul(x, y);
    }
    let xs = split(x, a, 6);
    let ys = split(y, a, 6);
    let ex = evaluate(&xs);
    let ey = evaluate(&ys);

    let v = Products6 {
        v0: dispatch::mul(&xs[0], &ys[0]),
        p1: dispatch::mul(&ex.a1, &ey.a1),
        m1: dispatch::mul(&ex.am1, &ey.am1),
        p2: dispatch::mul(&ex.a2, &ey.a2),
        m2: dispatch::mul(&ex.am2, &ey.am2),
        p3: dispatch::mul(&ex.a3, &ey.a3),
        m3: dispatch::mul(&ex.am3, &ey.am3),
        hp: dispatch::mul(&ex.ah, &ey.ah),
        hm: dispatch::mul(&ex.amh, &ey.amh),
        tp: dispatch::mul(&ex.at, &ey.at),
        tm: dispatch::mul(&ex.amt, &ey.amt),
    };

    compose(&interpolate(v), a)
}

/// Squares a magnitude by one Toom-6.5h step; every pointwise product is a
/// square and goes through the squaring side of the dispatcher.
#[must_use]
pub fn toom6h_sqr(x: &BigInt) -> BigInt {
    let a = x.len() / 6;
    if a == 0 {
        return toom4::toom4_sqr(x);
    }
    let xs = split(x, a, 6);
    let ex = evaluate(&xs);

    let v = Products6 {
        v0: dispatch::sqr(&xs[0]),
        p1: dispatch::sqr(&ex.a1),
        m1: dispatch::sqr(&ex.am1),
        p2: dispatch::sqr(&ex.a2),
        m2: dispatch::sqr(&ex.am2),
        p3: dispatch::sqr(&ex.a3),
        m3: dispatch::sqr(&ex.am3),
        hp: dispatch::sqr(&ex.ah),
        hm: dispatch::sqr(&ex.amh),
        tp: dispatch::sqr(&ex.at),
        tm: dispatch::sqr(&ex.amt),
    };

    compose(&interpolate(v), a)
}
