//! Arbitrary precision signed integers.
//!
//! A [`BigInt`] stores its magnitude as little-endian limbs in base 10^16
//! together with a sign flag. The canonical form has no most-significant
//! zero limb, and zero is the single limb `[0]` with a positive sign; every
//! public operation returns canonical values.
//!
//! Multiplication is dispatched by operand size across schoolbook,
//! Karatsuba and Toom-Cook kernels; see [`algorithms`].

pub mod algorithms;
pub(crate) mod division;
pub(crate) mod limbs;

#[cfg(test)]
mod proptests;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use limbs::{ucmp, B, LOG_B};

/// An arbitrary precision signed integer over base-10^16 limbs.
///
/// `sign == true` means the value is non-negative; the canonical zero is
/// positive. Each value owns its limb buffer; sharing limb storage between
/// distinct values is forbidden.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: bool,
    limbs: Vec<u64>,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let mut out = Self::from_u64_magnitude(value.unsigned_abs());
        out.sign = value >= 0 || limbs::is_zero(&out.limbs);
        out
    }

    /// Parses a decimal string without validating its characters.
    ///
    /// An optional leading `+` or `-` is honoured; everything after it is
    /// assumed to be ASCII digits. Intended for callers that generated the
    /// string themselves; use [`str::parse`] for untrusted input.
    #[must_use]
    pub fn from_decimal_unchecked(s: &str) -> Self {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        Self::from_decimal_parts(negative, digits)
    }

    /// Assembles a value from a sign and pre-validated ASCII digits.
    pub(crate) fn from_decimal_parts(negative: bool, digits: &str) -> Self {
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Self::zero();
        }
        let bytes = digits.as_bytes();
        let mut out = Vec::with_capacity(bytes.len() / LOG_B as usize + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(LOG_B as usize);
            let mut limb = 0u64;
            for &b in &bytes[start..end] {
                limb = limb * 10 + u64::from(b - b'0');
            }
            out.push(limb);
            end = start;
        }
        Self { sign: !negative, limbs: out }
    }

    /// Builds a canonical value from a sign and a raw magnitude.
    pub(crate) fn from_limbs(sign: bool, mut limbs: Vec<u64>) -> Self {
        limbs::normalize(&mut limbs);
        let sign = sign || limbs::is_zero(&limbs);
        Self { sign, limbs }
    }

    pub(crate) fn from_u64_magnitude(v: u64) -> Self {
        if v < B {
            Self { sign: true, limbs: vec![v] }
        } else {
            Self { sign: true, limbs: vec![v % B, v / B] }
        }
    }

    pub(crate) fn from_u128_magnitude(v: u128) -> Self {
        let b = u128::from(B);
        let mut out = vec![(v % b) as u64];
        let mut rest = v / b;
        while rest > 0 {
            out.push((rest % b) as u64);
            rest /= b;
        }
        Self { sign: true, limbs: out }
    }

    pub(crate) fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    pub(crate) fn sign(&self) -> bool {
        self.sign
    }

    /// Limb count of the magnitude.
    pub(crate) fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self { sign: true, limbs: self.limbs.clone() }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    /// Total number of decimal digits of the magnitude (1 for zero).
    #[must_use]
    pub fn decimal_digits(&self) -> u64 {
        limbs::decimal_len(&self.limbs)
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` for negative values and values that do not fit.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if !self.sign && !self.is_zero() {
            return None;
        }
        match self.limbs.len() {
            1 => Some(self.limbs[0]),
            2 => {
                let v = u128::from(self.limbs[1]) * u128::from(B) + u128::from(self.limbs[0]);
                u64::try_from(v).ok()
            }
            _ => None,
        }
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self.limbs.len() {
            1 => {
                let v = self.limbs[0] as i64;
                Some(if self.sign { v } else { -v })
            }
            2 => {
                let v = i128::from(self.limbs[1]) * i128::from(B) + i128::from(self.limbs[0]);
                let v = if self.sign { v } else { -v };
                i64::try_from(v).ok()
            }
            _ => None,
        }
    }

    /// Computes `self^exp` by binary exponentiation.
    #[must_use]
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = algorithms::dispatch::sqr(&base);
            }
        }
        result
    }

    /// Computes `self^exp` for a big exponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for negative exponents and
    /// [`Error::ExponentOverflow`] when the exponent does not fit in 64
    /// bits.
    pub fn checked_pow(&self, exp: &Self) -> Result<Self> {
        if exp.is_negative() {
            return Err(Error::Domain("negative exponent of an integer"));
        }
        let e = exp.to_u64().ok_or(Error::ExponentOverflow)?;
        Ok(self.pow(e))
    }

    /// Computes the quotient and remainder of truncated division.
    ///
    /// The quotient is positive exactly when both operands carry the same
    /// sign; the remainder follows the sign of `self` and satisfies
    /// `self == q * rhs + r` with `|r| < |rhs|`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q_mag, r_mag) = division::div_rem_magnitudes(&self.limbs, &rhs.limbs);
        let q = Self::from_limbs(self.sign == rhs.sign, q_mag);
        let r = Self::from_limbs(self.sign, r_mag);
        Ok((q, r))
    }

    /// Multiplies by a small non-negative factor.
    pub(crate) fn mul_small(&self, k: u64) -> Self {
        let mut out = self.clone();
        limbs::umul_small(&mut out.limbs, k);
        out.sign = out.sign || limbs::is_zero(&out.limbs);
        out
    }

    /// Destructively divides by a small factor known to divide exactly.
    pub(crate) fn div_small_exact_assign(&mut self, k: u64) {
        let rem = limbs::udiv_small(&mut self.limbs, k);
        debug_assert_eq!(rem, 0, "interpolation division must be exact");
        self.sign = self.sign || limbs::is_zero(&self.limbs);
    }

    /// Multiplies by `B^k` (inserts `k` zero limbs at the low end).
    pub(crate) fn shl_limbs(&self, k: usize) -> Self {
        let mut out = self.clone();
        limbs::shl_limbs(&mut out.limbs, k);
        out
    }

    /// Divides by `B^k`; the low `k` limbs must be zero.
    pub(crate) fn shr_limbs_exact(&mut self, k: usize) {
        if k == 0 || self.is_zero() {
            return;
        }
        debug_assert!(self.limbs[..k.min(self.limbs.len())].iter().all(|&l| l == 0));
        if k >= self.limbs.len() {
            *self = Self::zero();
        } else {
            self.limbs.drain(..k);
        }
    }

    /// Multiplies by `10^r` (digit shift toward more significance).
    pub(crate) fn shl_digits(&self, r: u64) -> Self {
        if self.is_zero() || r == 0 {
            return self.clone();
        }
        let mut out = self.mul_small(10u64.pow((r % u64::from(LOG_B)) as u32));
        limbs::shl_limbs(&mut out.limbs, (r / u64::from(LOG_B)) as usize);
        out
    }

    /// Drops the `r` least-significant decimal digits (truncation toward
    /// zero of the magnitude).
    pub(crate) fn shr_digits(&self, r: u64) -> Self {
        if r == 0 {
            return self.clone();
        }
        if r >= self.decimal_digits() {
            return Self::zero();
        }
        let mut out = self.clone();
        out.shr_limbs_truncate((r / u64::from(LOG_B)) as usize);
        let small = 10u64.pow((r % u64::from(LOG_B)) as u32);
        limbs::udiv_small(&mut out.limbs, small);
        out.sign = out.sign || limbs::is_zero(&out.limbs);
        out
    }

    /// Drops the low `k` limbs regardless of their value.
    pub(crate) fn shr_limbs_truncate(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        if k >= self.limbs.len() {
            *self = Self::zero();
        } else {
            self.limbs.drain(..k);
            self.sign = self.sign || limbs::is_zero(&self.limbs);
        }
    }

    /// Keeps only the `keep` most-significant limbs.
    pub(crate) fn keep_top_limbs(&mut self, keep: usize) {
        if self.limbs.len() > keep {
            let drop = self.limbs.len() - keep;
            self.limbs.drain(..drop);
            self.sign = self.sign || limbs::is_zero(&self.limbs);
        }
    }

    fn add_signed(s1: bool, m1: &[u64], s2: bool, m2: &[u64]) -> Self {
        if s1 == s2 {
            return Self::from_limbs(s1, limbs::uadd(m1, m2));
        }
        match ucmp(m1, m2) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_limbs(s1, limbs::usub(m1, m2)),
            Ordering::Less => Self::from_limbs(s2, limbs::usub(m2, m1)),
        }
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self { sign: true, limbs: vec![0] }
    }

    fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self { sign: true, limbs: vec![1] }
    }

    fn is_one(&self) -> bool {
        self.sign && self.limbs == [1]
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => ucmp(&self.limbs, &other.limbs),
            (false, false) => ucmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.sign {
            write!(f, "-")?;
        }
        let mut iter = self.limbs.iter().rev();
        if let Some(top) = iter.next() {
            write!(f, "{top}")?;
        }
        for limb in iter {
            write!(f, "{limb:016}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidInput(s.to_string()));
        }
        Ok(Self::from_decimal_parts(negative, digits))
    }
}

// Arithmetic operations
impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;

    fn add(self, rhs: &BigInt) -> Self::Output {
        &self + rhs
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        BigInt::add_signed(self.sign, &self.limbs, rhs.sign, &rhs.limbs)
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInt::add_signed(self.sign, &self.limbs, !rhs.sign, &rhs.limbs)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.sign == rhs.sign {
            limbs::udadd(&mut self.limbs, &rhs.limbs);
            return;
        }
        match ucmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => *self = Self::zero(),
            Ordering::Greater => limbs::udsub(&mut self.limbs, &rhs.limbs),
            Ordering::Less => {
                self.limbs = limbs::usub(&rhs.limbs, &self.limbs);
                self.sign = rhs.sign;
            }
        }
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.sign != rhs.sign {
            limbs::udadd(&mut self.limbs, &rhs.limbs);
            return;
        }
        match ucmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => *self = Self::zero(),
            Ordering::Greater => limbs::udsub(&mut self.limbs, &rhs.limbs),
            Ordering::Less => {
                self.limbs = limbs::usub(&rhs.limbs, &self.limbs);
                self.sign = !rhs.sign;
            }
        }
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        algorithms::dispatch::mul(&self, &rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        algorithms::dispatch::mul(&self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        algorithms::dispatch::mul(self, rhs)
    }
}

impl Div for BigInt {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::div_rem`] for a checked
    /// variant.
    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).expect("division by zero").0
    }
}

impl Div<&BigInt> for BigInt {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::div_rem`] for a checked
    /// variant.
    fn div(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).expect("division by zero").0
    }
}

impl Rem for BigInt {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::div_rem`] for a checked
    /// variant.
    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).expect("remainder by zero").1
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`BigInt::div_rem`] for a checked
    /// variant.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.div_rem(rhs).expect("remainder by zero").1
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64_magnitude(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_u64_magnitude(u64::from(value))
    }
}
