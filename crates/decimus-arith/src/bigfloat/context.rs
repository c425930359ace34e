//! The working-precision context.
//!
//! All [`BigFloat`](super::BigFloat) operations truncate their results to
//! the thread's current precision, a digit count read through
//! [`get_prec`]. Internal routines that raise the precision temporarily
//! (reciprocal, square root, reciprocal division) hold a [`PrecGuard`]
//! so the caller's value is restored on every exit path.

use std::cell::Cell;

const DEFAULT_PREC: usize = 32;

thread_local! {
    static PREC: Cell<usize> = const { Cell::new(DEFAULT_PREC) };
}

/// Sets the working precision in decimal digits.
///
/// # Panics
///
/// Panics if `prec` is zero.
pub fn set_prec(prec: usize) {
    assert!(prec >= 1, "precision must be at least one digit");
    PREC.with(|p| p.set(prec));
}

/// Returns the working precision in decimal digits.
#[must_use]
pub fn get_prec() -> usize {
    PREC.with(Cell::get)
}

/// Restores the precision that was current at construction when dropped.
pub(crate) struct PrecGuard {
    saved: usize,
}

impl PrecGuard {
    /// Switches to `prec`, remembering the current value.
    pub(crate) fn set(prec: usize) -> Self {
        let saved = get_prec();
        set_prec(prec);
        Self { saved }
    }
}

impl Drop for PrecGuard {
    fn drop(&mut self) {
        set_prec(self.saved);
    }
}
