//! Pi from the Chudnovsky series.
//!
//! ```text
//! 1/pi = 12 * sum_{k>=0} (-1)^k (6k)! (13591409 + 545140134 k)
//!                        / ((3k)! (k!)^3 640320^(3k + 3/2))
//! ```
//!
//! Binary splitting carries the triple (P, Q, T) over index ranges, with
//! each term contributing about 14.18 digits; the series total reduces to
//! `pi = 426880 * sqrt(10005) * Q / T`.

use decimus_arith::{get_prec, set_prec, BigFloat, BigInt};
use num_traits::One;

const A: u64 = 13_591_409;
const B: u64 = 545_140_134;

/// 640320^3 / 24.
const C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Decimal digits contributed by each series term.
const DIGITS_PER_TERM: u64 = 14;

/// Computes pi to at least `digits` correct decimal digits.
///
/// The caller's working precision is left untouched.
#[must_use]
pub fn pi_chudnovsky(digits: usize) -> BigFloat {
    let terms = digits as u64 / DIGITS_PER_TERM + 2;
    let (_, q, t) = split(0, terms);

    let saved = get_prec();
    set_prec(digits + 16);
    let scaled_q = BigFloat::from(&q * &BigInt::from(426_880u64));
    let root = BigFloat::from(10_005u64).sqrt().expect("radicand is positive");
    let pi = &(&scaled_q * &root) * &BigFloat::from(t).recip().expect("series tail is non-zero");
    let out = pi.trunc_to(digits + 2);
    set_prec(saved);
    out
}

/// Binary splitting of the series over `[a, b)`: returns (P, Q, T) with
/// `P` the product of term numerators, `Q` the product of term
/// denominators, and `T` the alternating partial-sum numerator.
fn split(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if b - a == 1 {
        if a == 0 {
            return (BigInt::one(), BigInt::one(), BigInt::from(A));
        }
        let p = &(&BigInt::from(6 * a - 5) * &BigInt::from(2 * a - 1)) * &BigInt::from(6 * a - 1);
        let q = &BigInt::from(a).pow(3) * &BigInt::from(C3_OVER_24);
        let mut t = &p * &(&BigInt::from(A) + &(&BigInt::from(B) * &BigInt::from(a)));
        if a % 2 == 1 {
            t = -t;
        }
        return (p, q, t);
    }
    let m = a + (b - a) / 2;
    let (p_am, q_am, t_am) = split(a, m);
    let (p_mb, q_mb, t_mb) = split(m, b);
    let p = &p_am * &p_mb;
    let q = &q_am * &q_mb;
    let t = &(&q_mb * &t_am) + &(&p_am * &t_mb);
    (p, q, t)
}
