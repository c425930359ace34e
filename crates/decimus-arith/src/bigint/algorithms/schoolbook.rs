//! Schoolbook multiplication and squaring with deferred carries.
//!
//! Each base-10^16 limb is split into two base-10^8 half-limbs so that
//! half-limb products fit a 64-bit accumulator with room to spare; a
//! single reduction pass then propagates the deferred carries and fuses
//! half-limb pairs back into limbs.

use crate::bigint::limbs::B2;
use crate::bigint::BigInt;

// Accumulator headroom: half-limb products are < 10^16 and u64 holds
// ~1.8e19, so a slot tolerates ~1800 deferred products. The dispatcher
// stays far below that; direct callers must keep the smaller operand
// under ~900 limbs (~460 for squaring).
const MAX_DEFERRED: usize = 1800;

fn split_halves(x: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(x.len() * 2);
    for &limb in x {
        out.push(limb % B2);
        out.push(limb / B2);
    }
    out
}

/// Propagates deferred carries, then fuses half-limb pairs into limbs.
fn reduce_and_fuse(mut buf: Vec<u64>) -> BigInt {
    for k in 0..buf.len() - 1 {
        let q = buf[k] / B2;
        buf[k] -= q * B2;
        buf[k + 1] += q;
    }
    debug_assert!(*buf.last().unwrap() < B2);
    let mut out = Vec::with_capacity(buf.len() / 2);
    for pair in buf.chunks(2) {
        out.push(pair[0] + pair[1] * B2);
    }
    BigInt::from_limbs(true, out)
}

/// Multiplies two magnitudes by the schoolbook method.
///
/// Input signs are ignored; the result is non-negative.
#[must_use]
pub fn schoolbook_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let hx = split_halves(x.limbs());
    let hy = split_halves(y.limbs());
    debug_assert!(hx.len().min(hy.len()) <= MAX_DEFERRED);
    let mut buf = vec![0u64; hx.len() + hy.len() + 2];
    for (i, &a) in hx.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for (j, &b) in hy.iter().enumerate() {
            buf[i + j] += a * b;
        }
    }
    reduce_and_fuse(buf)
}

/// Squares a magnitude by the schoolbook method.
///
/// For i < k the cross product `2*x[i]*x[k]` is accumulated once into slot
/// `i+k`, halving the inner multiplications relative to `schoolbook_mul`.
#[must_use]
pub fn schoolbook_sqr(x: &BigInt) -> BigInt {
    let hx = split_halves(x.limbs());
    debug_assert!(hx.len() <= MAX_DEFERRED / 2);
    let mut buf = vec![0u64; 2 * hx.len() + 2];
    for (i, &a) in hx.iter().enumerate() {
        if a == 0 {
            continue;
        }
        buf[2 * i] += a * a;
        for (k, &b) in hx.iter().enumerate().skip(i + 1) {
            if b != 0 {
                buf[i + k] += 2 * a * b;
            }
        }
    }
    reduce_and_fuse(buf)
}
