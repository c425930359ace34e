//! # decimus-arith
//!
//! Arbitrary-precision decimal arithmetic for the Decimus project.
//!
//! This crate provides:
//! - Signed big integers ([`BigInt`]) over base-10^16 limbs, with
//!   schoolbook, Karatsuba and Toom-Cook (3, 4/4.5, 6.5h) multiplication
//!   behind an automatic size dispatcher
//! - Variable-precision floating-point values ([`BigFloat`]) with
//!   Newton-Raphson reciprocal and square root
//! - Long division and reciprocal-based division for big integers
//!
//! ## Performance Notes
//!
//! - Multiplication selects its algorithm from operand sizes; the
//!   crossover thresholds are exposed as constants in
//!   [`bigint::algorithms::dispatch`]
//! - Squaring is detected by value, so `&x * &x` takes the dedicated
//!   squaring paths automatically

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bigfloat;
pub mod bigint;
pub mod error;

pub use bigfloat::{get_prec, set_prec, BigFloat};
pub use bigint::BigInt;
pub use error::{Error, Result};
