//! # decimus-consts
//!
//! Transcendental constants and combinatorial products computed by binary
//! splitting over the Decimus arithmetic kernel.
//!
//! Binary splitting evaluates a product or series of N terms by
//! recursively halving the index range, which keeps the recursive
//! multiplicand sizes balanced and lets the sub-quadratic multiplication
//! kernels do the heavy lifting:
//! - [`factorial`] - exact factorials
//! - [`e_series`] - e from its inverse-factorial series
//! - [`pi_chudnovsky`] - pi from the Chudnovsky series

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod euler;
mod factorial;
mod pi;

pub use euler::e_series;
pub use factorial::factorial;
pub use pi::pi_chudnovsky;
