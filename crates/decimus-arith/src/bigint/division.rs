//! Integer division.
//!
//! The default backend is classical long division (Knuth's algorithm D)
//! in base 10^16. Once both operands are large, dividing through the
//! floating-point reciprocal is asymptotically cheaper: compute
//! `x * (1/y) + eps` at a precision covering the full quotient, truncate
//! at the decimal point, and repair the at-most-one-ulp slack against the
//! exact remainder.

use num_traits::One;

use super::algorithms::dispatch;
use super::limbs::{self, B};
use super::BigInt;
use crate::bigfloat::context::PrecGuard;
use crate::bigfloat::BigFloat;

/// Limb count from which division goes through the reciprocal.
pub const RECIP_DIV_THRESHOLD: usize = 64;

/// Divides magnitudes, returning (quotient, remainder).
///
/// `y` must be non-zero; the caller applies signs.
pub(crate) fn div_rem_magnitudes(x: &[u64], y: &[u64]) -> (Vec<u64>, Vec<u64>) {
    debug_assert!(!limbs::is_zero(y));
    match limbs::ucmp(x, y) {
        std::cmp::Ordering::Less => return (vec![0], x.to_vec()),
        std::cmp::Ordering::Equal => return (vec![1], vec![0]),
        std::cmp::Ordering::Greater => {}
    }
    if y.len() == 1 {
        let mut q = x.to_vec();
        let rem = limbs::udiv_small(&mut q, y[0]);
        return (q, vec![rem]);
    }
    if y.len() >= RECIP_DIV_THRESHOLD {
        let (q, r) = div_rem_recip(
            &BigInt::from_limbs(true, x.to_vec()),
            &BigInt::from_limbs(true, y.to_vec()),
        );
        return (q.limbs().to_vec(), r.limbs().to_vec());
    }
    div_rem_knuth(x, y)
}

/// Algorithm D. Requires `x > y` and `y` at least two limbs long.
fn div_rem_knuth(x: &[u64], y: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let n = y.len();
    let m = x.len() - n;
    let b = u128::from(B);

    // Normalise so the divisor's top limb is at least B/2.
    let d = B / (y[n - 1] + 1);
    let mut vn = y.to_vec();
    limbs::umul_small(&mut vn, d);
    debug_assert_eq!(vn.len(), n);
    debug_assert!(vn[n - 1] >= B / 2);
    let mut un = x.to_vec();
    limbs::umul_small(&mut un, d);
    un.resize(x.len() + 1, 0);

    let mut q = vec![0u64; m + 1];
    for j in (0..=m).rev() {
        let num = u128::from(un[j + n]) * b + u128::from(un[j + n - 1]);
        let mut qhat = num / u128::from(vn[n - 1]);
        let mut rhat = num % u128::from(vn[n - 1]);
        while qhat >= b
            || qhat * u128::from(vn[n - 2]) > rhat * b + u128::from(un[j + n - 2])
        {
            qhat -= 1;
            rhat += u128::from(vn[n - 1]);
            if rhat >= b {
                break;
            }
        }

        // Multiply and subtract qhat * v from the current window.
        let mut carry = 0u128;
        let mut borrow = 0i128;
        for i in 0..n {
            let p = qhat * u128::from(vn[i]) + carry;
            carry = p / b;
            let mut t = i128::from(un[j + i]) - (p % b) as i128 - borrow;
            if t < 0 {
                t += B as i128;
                borrow = 1;
            } else {
                borrow = 0;
            }
            un[j + i] = t as u64;
        }
        let t = i128::from(un[j + n]) - carry as i128 - borrow;
        if t < 0 {
            // qhat was one too large; add the divisor back.
            qhat -= 1;
            let mut c = 0u64;
            for i in 0..n {
                let mut s = un[j + i] + vn[i] + c;
                if s >= B {
                    s -= B;
                    c = 1;
                } else {
                    c = 0;
                }
                un[j + i] = s;
            }
            un[j + n] = (t + i128::from(c)) as u64;
        } else {
            un[j + n] = t as u64;
        }
        q[j] = qhat as u64;
    }

    let mut rem = un[..n].to_vec();
    let back = limbs::udiv_small(&mut rem, d);
    debug_assert_eq!(back, 0);
    limbs::normalize(&mut q);
    (q, rem)
}

/// Reciprocal-based division of magnitudes; requires `x > y > 0`.
fn div_rem_recip(x: &BigInt, y: &BigInt) -> (BigInt, BigInt) {
    let prec = 2 * (16 * x.len() + 16);
    let _guard = PrecGuard::set(prec);

    let fx = BigFloat::from(x.clone());
    let inv = BigFloat::from(y.clone())
        .recip()
        .expect("divisor magnitude is non-zero");
    let eps = BigFloat::pow10(-(prec as i64) / 2);
    let mut q = (&(&fx * &inv) + &eps).trunc_to_bigint();

    // The reciprocal can be off in the last place; settle against the
    // exact remainder.
    let one = BigInt::one();
    let mut r = x - &dispatch::mul(&q, y);
    while r.is_negative() {
        q -= &one;
        r += y;
    }
    while r >= *y {
        q += &one;
        r -= y;
    }
    (q, r)
}
