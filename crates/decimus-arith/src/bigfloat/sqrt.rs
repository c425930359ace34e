//! Square root by a Newton-Raphson variant.
//!
//! The root is reached through the inverse square root: a short Heron
//! phase at precision 16 produces sqrt(x), one inversion turns it into
//! 1/sqrt(x), and the climb up the doubling schedule uses the
//! division-free correction `y <- y + y*(1 - x*y^2)/2`. The final multiply
//! by x recovers sqrt(x) = x * (1/sqrt(x)).

use num_traits::{One, Zero};

use super::context::{get_prec, set_prec, PrecGuard};
use super::recip::schedule;
use super::BigFloat;
use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Floor of the integer square root.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// A positional seed for the Heron phase: roughly eight correct digits of
/// `sqrt(x)` from the top mantissa digits and half the exponent.
fn seed(x: &BigFloat) -> BigFloat {
    let limbs = x.int_part.limbs();
    let mut top = u128::from(limbs[limbs.len() - 1]);
    if top < 10_u128.pow(9) && limbs.len() > 1 {
        top = top * u128::from(crate::bigint::limbs::B) + u128::from(limbs[limbs.len() - 2]);
    }
    while top >= 10_u128.pow(10) {
        top /= 10;
    }
    let mut dt = 1i64;
    let mut v = top / 10;
    while v > 0 {
        dt += 1;
        v /= 10;
    }

    // x ~= top * 10^s; fold one decimal into top if s is odd so the
    // exponent halves exactly.
    let mut s = x.exp - dt + 1;
    if s.rem_euclid(2) == 1 {
        top *= 10;
        s -= 1;
    }
    // sqrt(x) ~= isqrt(top * 10^16) * 10^(s/2 - 8)
    let r = isqrt(top * 10_u128.pow(16));
    let mant = BigInt::from_u128_magnitude(r);
    let dr = mant.decimal_digits() as i64;
    BigFloat::from_parts(mant, dr - 1 + s / 2 - 8)
}

impl BigFloat {
    /// Computes the square root at the current precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for negative input.
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(Error::Domain("square root of a negative value"));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let prec = get_prec();
        let _guard = PrecGuard::set(16);

        let half: Self = Self { int_part: BigInt::new(5), exp: -1 };
        let xt = self.trunc_to(16);
        let xh = &xt * &half;
        let mut y = seed(self);
        for _ in 0..12 {
            y = &(&y * &half) + &(&xh * &y.recip()?);
        }
        // y is now sqrt(x) to working accuracy; the climb wants 1/sqrt(x).
        y = y.recip()?;

        for rung in schedule(prec) {
            set_prec(rung + 16);
            y = step(self, &y, &half, rung + 16);
        }

        set_prec(prec + 16);
        y = step(self, &y, &half, prec + 16);
        let root = &self.trunc_to(prec + 16) * &y;
        Ok(root.trunc_to(prec))
    }
}

/// One division-free correction `y + y*(1 - x*y^2)/2` with `x` truncated
/// to the working precision.
fn step(x: &BigFloat, y: &BigFloat, half: &BigFloat, prec: usize) -> BigFloat {
    let xt = x.trunc_to(prec);
    let ysq = y * y;
    let e = &BigFloat::one() - &(&xt * &ysq);
    y + &(&(y * &e) * half)
}
