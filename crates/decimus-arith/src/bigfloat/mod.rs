//! Variable-precision decimal floating-point values.
//!
//! A [`BigFloat`] is an integer mantissa together with the decimal
//! exponent of its most significant digit: the pair `(m, e)` denotes
//! `m * 10^(e - D + 1)` where D is the digit count of `|m|`. Zero is
//! `(0, 0)`.
//!
//! Every arithmetic step truncates its result to the working precision P
//! (see [`set_prec`]): `ceil(P/16) + 2` most-significant limbs are kept,
//! one fewer for stringification. Truncation is toward zero; callers that
//! need correctly rounded results must carry guard digits themselves.
//!
//! Input parsing accepts plain decimal notation only; output switches to
//! `d.dddde<exp>` scientific form outside a narrow exponent window. The
//! asymmetry is deliberate.

pub(crate) mod context;
mod recip;
mod sqrt;

#[cfg(test)]
mod proptests;

pub use context::{get_prec, set_prec};

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// A variable-precision decimal floating-point number.
#[derive(Clone)]
pub struct BigFloat {
    int_part: BigInt,
    exp: i64,
}

impl BigFloat {
    /// Builds a value from a mantissa and the exponent of its most
    /// significant digit.
    pub(crate) fn from_parts(int_part: BigInt, exp: i64) -> Self {
        if int_part.is_zero() {
            return Self::zero();
        }
        Self { int_part, exp }
    }

    /// The value `10^k`.
    #[must_use]
    pub fn pow10(k: i64) -> Self {
        Self { int_part: BigInt::one(), exp: k }
    }

    /// The decimal exponent of the most significant digit.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exp
    }

    /// Digit count of the mantissa.
    fn digits(&self) -> i64 {
        self.int_part.decimal_digits() as i64
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.int_part.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self { int_part: self.int_part.abs(), exp: self.exp }
    }

    /// Truncates the mantissa to `ceil(prec/16) + 2` most-significant
    /// limbs, toward zero. The exponent is unchanged.
    #[must_use]
    pub fn trunc_to(&self, prec: usize) -> Self {
        let keep = prec.div_ceil(16) + 2;
        let mut out = self.clone();
        out.int_part.keep_top_limbs(keep);
        out
    }

    /// The tighter truncation used for stringification.
    fn trunc_for_display(&self, prec: usize) -> Self {
        let keep = prec.div_ceil(16) + 1;
        let mut out = self.clone();
        out.int_part.keep_top_limbs(keep);
        out
    }

    /// Discards the fractional digits, producing the integer part
    /// (truncation toward zero).
    #[must_use]
    pub fn trunc_to_bigint(&self) -> BigInt {
        if self.is_zero() || self.exp < 0 {
            return BigInt::zero();
        }
        let scale = self.exp - self.digits() + 1;
        if scale >= 0 {
            self.int_part.shl_digits(scale as u64)
        } else {
            self.int_part.shr_digits(scale.unsigned_abs())
        }
    }

    fn add_value(&self, rhs: &Self) -> Self {
        let prec = get_prec();
        if self.is_zero() {
            return rhs.trunc_to(prec);
        }
        if rhs.is_zero() {
            return self.trunc_to(prec);
        }
        let (x, y) = if self.exp >= rhs.exp { (self, rhs) } else { (rhs, self) };
        if x.exp - y.exp > prec as i64 {
            // y vanishes below the precision floor.
            return x.trunc_to(prec);
        }
        let sx = x.exp - x.digits() + 1;
        let sy = y.exp - y.digits() + 1;
        let (m, scale) = if sx >= sy {
            (&x.int_part.shl_digits((sx - sy) as u64) + &y.int_part, sy)
        } else {
            (&x.int_part + &y.int_part.shl_digits((sy - sx) as u64), sx)
        };
        if m.is_zero() {
            return Self::zero();
        }
        let exp = scale + m.decimal_digits() as i64 - 1;
        Self { int_part: m, exp }.trunc_to(prec)
    }

    fn mul_value(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let m = &self.int_part * &rhs.int_part;
        let delta = m.decimal_digits() as i64 - self.digits() - rhs.digits() + 1;
        let exp = self.exp + rhs.exp + delta;
        Self { int_part: m, exp }.trunc_to(get_prec())
    }

    /// Raises to an integer power at the current precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for a negative exponent of zero.
    pub fn powi(&self, n: i64) -> Result<Self> {
        if n < 0 && self.is_zero() {
            return Err(Error::Domain("negative exponent of zero"));
        }
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        if n < 0 {
            result.recip()
        } else {
            Ok(result)
        }
    }
}

impl Zero for BigFloat {
    fn zero() -> Self {
        Self { int_part: BigInt::zero(), exp: 0 }
    }

    fn is_zero(&self) -> bool {
        self.int_part.is_zero()
    }
}

impl One for BigFloat {
    fn one() -> Self {
        Self { int_part: BigInt::one(), exp: 0 }
    }
}

impl Default for BigFloat {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigFloat {
    /// Comparison is the sign of the difference's mantissa, so values are
    /// equal when they agree at the working precision.
    fn cmp(&self, other: &Self) -> Ordering {
        let d = self.add_value(&-other.clone());
        match d.int_part.signum() {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl Add for BigFloat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_value(&rhs)
    }
}

impl Add<&BigFloat> for BigFloat {
    type Output = Self;

    fn add(self, rhs: &BigFloat) -> Self::Output {
        self.add_value(rhs)
    }
}

impl Add for &BigFloat {
    type Output = BigFloat;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_value(rhs)
    }
}

impl Sub for BigFloat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_value(&-rhs)
    }
}

impl Sub<&BigFloat> for BigFloat {
    type Output = Self;

    fn sub(self, rhs: &BigFloat) -> Self::Output {
        self.add_value(&-rhs.clone())
    }
}

impl Sub for &BigFloat {
    type Output = BigFloat;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_value(&-rhs.clone())
    }
}

impl AddAssign<&BigFloat> for BigFloat {
    fn add_assign(&mut self, rhs: &BigFloat) {
        *self = self.add_value(rhs);
    }
}

impl SubAssign<&BigFloat> for BigFloat {
    fn sub_assign(&mut self, rhs: &BigFloat) {
        *self = self.add_value(&-rhs.clone());
    }
}

impl MulAssign<&BigFloat> for BigFloat {
    fn mul_assign(&mut self, rhs: &BigFloat) {
        *self = self.mul_value(rhs);
    }
}

impl Mul for BigFloat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_value(&rhs)
    }
}

impl Mul<&BigFloat> for BigFloat {
    type Output = Self;

    fn mul(self, rhs: &BigFloat) -> Self::Output {
        self.mul_value(rhs)
    }
}

impl Mul for &BigFloat {
    type Output = BigFloat;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_value(rhs)
    }
}

impl Div for BigFloat {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigFloat::recip`] for a checked
    /// variant.
    fn div(self, rhs: Self) -> Self::Output {
        self.mul_value(&rhs.recip().expect("division by zero"))
    }
}

impl Div<&BigFloat> for BigFloat {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigFloat::recip`] for a checked
    /// variant.
    fn div(self, rhs: &BigFloat) -> Self::Output {
        self.mul_value(&rhs.recip().expect("division by zero"))
    }
}

impl Div for &BigFloat {
    type Output = BigFloat;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigFloat::recip`] for a checked
    /// variant.
    fn div(self, rhs: Self) -> Self::Output {
        self.mul_value(&rhs.recip().expect("division by zero"))
    }
}

impl Neg for BigFloat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { int_part: -self.int_part, exp: self.exp }
    }
}

impl Neg for &BigFloat {
    type Output = BigFloat;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<BigInt> for BigFloat {
    fn from(value: BigInt) -> Self {
        if value.is_zero() {
            return Self::zero();
        }
        let exp = value.decimal_digits() as i64 - 1;
        Self { int_part: value, exp }
    }
}

impl From<i64> for BigFloat {
    fn from(value: i64) -> Self {
        Self::from(BigInt::new(value))
    }
}

impl From<u64> for BigFloat {
    fn from(value: u64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<i32> for BigFloat {
    fn from(value: i32) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<u32> for BigFloat {
    fn from(value: u32) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl FromStr for BigFloat {
    type Err = Error;

    /// Parses plain decimal notation: an optional sign, decimal digits,
    /// and at most one decimal point. Scientific notation is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((i, f)) => {
                if f.contains('.') {
                    return Err(Error::InvalidInput(s.to_string()));
                }
                (i, f)
            }
            None => (body, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(Error::InvalidInput(s.to_string()));
        }
        let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(Error::InvalidInput(s.to_string()));
        }
        let mut full = String::with_capacity(int_digits.len() + frac_digits.len());
        full.push_str(int_digits);
        full.push_str(frac_digits);
        let leading_zeros = full.bytes().take_while(|&b| b == b'0').count();
        if leading_zeros == full.len() {
            return Ok(Self::zero());
        }
        let exp = int_digits.len() as i64 - 1 - leading_zeros as i64;
        let int_part = BigInt::from_decimal_parts(negative, &full);
        Ok(Self { int_part, exp })
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.trunc_for_display(get_prec());
        if t.is_negative() {
            write!(f, "-")?;
        }
        let digits = t.int_part.abs().to_string();
        let d = digits.len() as i64;
        let exp = t.exp;
        if (-10..=d - 1).contains(&exp) {
            if exp >= 0 {
                let point = (exp + 1) as usize;
                let (int_part, frac) = digits.split_at(point);
                let frac = if frac.is_empty() { "0" } else { frac };
                write!(f, "{int_part}.{frac}")
            } else {
                write!(f, "0.")?;
                for _ in 0..(-exp - 1) {
                    write!(f, "0")?;
                }
                write!(f, "{digits}")
            }
        } else {
            let (head, tail) = digits.split_at(1);
            let tail = if tail.is_empty() { "0" } else { tail };
            write!(f, "{head}.{tail}e{exp}")
        }
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigFloat({} e{})", self.int_part, self.exp)
    }
}
