//! # Decimus
//!
//! Arbitrary-precision decimal arithmetic in Rust: signed big integers
//! over base-10^16 limbs, variable-precision floating-point values, and
//! binary-splitting engines for million-digit constants.
//!
//! ## Features
//!
//! - **Layered multiplication**: schoolbook, Karatsuba and Toom-Cook
//!   (3, 4/4.5, 6.5h) kernels behind an automatic size dispatcher
//! - **Value-detected squaring**: `&x * &x` takes the dedicated squaring
//!   paths without caller cooperation
//! - **Newton-Raphson analysis**: reciprocal and square root with a
//!   doubling precision schedule
//! - **Constants**: pi (Chudnovsky) and e by binary splitting
//!
//! ## Quick Start
//!
//! ```rust
//! use decimus::prelude::*;
//!
//! set_prec(50);
//! let root = BigFloat::from(2u64).sqrt().unwrap();
//! assert!(root.to_string().starts_with("1.41421356237309504880"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use decimus_arith as arith;
pub use decimus_consts as consts;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use decimus_arith::{get_prec, set_prec, BigFloat, BigInt, Error};
    pub use decimus_consts::{e_series, factorial, pi_chudnovsky};
}
