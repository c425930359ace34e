//! Reciprocal by Newton-Raphson iteration.
//!
//! The update rule is `y <- y + y*(1 - x*y)`, which doubles the number of
//! correct digits per step. Work climbs a doubling precision schedule:
//! a 10-digit integer seed is polished at precision 16, then one
//! correction runs per rung at `rung + 16` digits, and a final correction
//! at `P + 16` absorbs the truncation noise before the result is cut back
//! to P.

use num_traits::{One, Zero};

use super::context::{get_prec, set_prec, PrecGuard};
use super::BigFloat;
use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Halving rungs from the target precision down to (but excluding) the
/// 16-digit floor, returned in climbing order.
pub(super) fn schedule(prec: usize) -> Vec<usize> {
    let mut rungs = Vec::new();
    let mut t = prec;
    while t > 16 {
        rungs.push(t);
        t /= 2;
    }
    rungs.reverse();
    rungs
}

/// One correction `y + y*(1 - x*y)` with `x` truncated to the working
/// precision. The caller has already set the precision context.
fn correct(x: &BigFloat, y: &BigFloat, prec: usize) -> BigFloat {
    let xt = x.trunc_to(prec);
    let e = &BigFloat::one() - &(&xt * y);
    y + &(y * &e)
}

/// Integer seed: about ten correct digits of `1 / x`, formed from the top
/// digits of the mantissa without any float round trip.
fn seed(x: &BigFloat) -> BigFloat {
    // Top (up to) 10 digits of the mantissa as a machine integer.
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

    // 1/|x| ~= (10^28 / top) * 10^(dt - exp - 29).
    let q = 10_u128.pow(28) / top;
    let mut mant = BigInt::from_u128_magnitude(q);
    let dq = mant.decimal_digits() as i64;
    if x.is_negative() {
        mant = -mant;
    }
    BigFloat::from_parts(mant, dq + dt - x.exp - 30)
}

impl BigFloat {
    /// Computes `1 / self` at the current precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let prec = get_prec();
        let _guard = PrecGuard::set(prec);

        set_prec(16);
        let mut y = seed(self);
        for _ in 0..4 {
            y = correct(self, &y, 16);
        }

        for rung in schedule(prec) {
            set_prec(rung + 16);
            y = correct(self, &y, rung + 16);
        }

        set_prec(prec + 16);
        y = correct(self, &y, prec + 16);
        Ok(y.trunc_to(prec))
    }
}
