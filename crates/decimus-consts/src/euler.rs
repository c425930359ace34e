//! Euler's number from its inverse-factorial series.

use decimus_arith::{get_prec, set_prec, BigFloat, BigInt};
use num_traits::One;

/// Computes e to at least `digits` correct decimal digits.
///
/// The tail `sum 1/k!` is evaluated as one exact rational by binary
/// splitting, then a single division at guarded precision turns it into a
/// float. The caller's working precision is left untouched.
#[must_use]
pub fn e_series(digits: usize) -> BigFloat {
    let terms = terms_for(digits);
    let (p, q) = split_sum(1, terms + 1);

    let saved = get_prec();
    set_prec(digits + 16);
    let tail = &BigFloat::from(p) * &BigFloat::from(q).recip().expect("q is a factorial");
    let e = &BigFloat::one() + &tail;
    let out = e.trunc_to(digits + 2);
    set_prec(saved);
    out
}

/// Smallest n with n! exceeding 10^(digits + 10).
fn terms_for(digits: usize) -> u64 {
    let target = (digits + 10) as f64;
    let mut n = 0u64;
    let mut log_factorial = 0f64;
    while log_factorial < target {
        n += 1;
        log_factorial += f64::from(u32::try_from(n).unwrap_or(u32::MAX)).log10();
    }
    n
}

/// Returns (p, q) with `p/q = sum_{k=a}^{b-1} 1/(a*(a+1)*...*k)` and
/// `q = a*(a+1)*...*(b-1)`. With a = 1 the sum is `sum 1/k!` over the
/// range.
fn split_sum(a: u64, b: u64) -> (BigInt, BigInt) {
    if b - a == 1 {
        return (BigInt::one(), BigInt::from(a));
    }
    let m = a + (b - a) / 2;
    let (p1, q1) = split_sum(a, m);
    let (p2, q2) = split_sum(m, b);
    (&(&p1 * &q2) + &p2, &q1 * &q2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E_100: &str = "2.\
        7182818284590452353602874713526624977572470936999595749669676277\
        240766303535475945713821785251664274";

    #[test]
    fn test_split_sum_small() {
        // 1/1! + 1/2! + 1/3! = 1 + 1/2 + 1/6 = 5/3, and q = 3! = 6.
        let (p, q) = split_sum(1, 4);
        assert_eq!(q.to_string(), "6");
        assert_eq!(p.to_string(), "10");
    }

    #[test]
    fn test_e_hundred_digits() {
        // Stringification is clipped by the working precision, so it must
        // cover the digits under comparison.
        set_prec(120);
        let e = e_series(100);
        let s = e.to_string();
        assert!(s.starts_with(&E_100[..100]), "e = {s}");
    }

    #[test]
    fn test_precision_restored() {
        set_prec(21);
        let _ = e_series(200);
        assert_eq!(get_prec(), 21);
    }
}
