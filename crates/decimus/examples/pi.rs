//! Computes pi by the Chudnovsky series.
//!
//! Usage: `cargo run --release --example pi [digits]`

use std::env;
use std::time::Instant;

use decimus::prelude::*;

fn main() {
    let digits: usize = env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(10_000);

    let start = Instant::now();
    let pi = pi_chudnovsky(digits);
    let elapsed = start.elapsed();

    // Stringification is clipped by the working precision.
    set_prec(digits + 16);
    let s = pi.to_string();
    println!("{}", &s[..s.len().min(digits + 2)]);
    eprintln!("pi to {digits} digits in {elapsed:.2?}");
}
