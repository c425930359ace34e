//! Error types for arbitrary-precision arithmetic.

use thiserror::Error;

/// Errors raised by arithmetic operations and parsers.
///
/// All errors are raised eagerly at the first checkable operation; there is
/// no partial-result reporting and no retry contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric string could not be parsed (bad characters, misplaced
    /// sign, multiple decimal points, empty input).
    #[error("invalid numeric input: {0}")]
    InvalidInput(String),

    /// An argument lies outside the mathematical domain of the operation,
    /// e.g. a negative argument to `sqrt` or a negative exponent.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An exponent does not fit in 64 bits.
    #[error("exponent does not fit in 64 bits")]
    ExponentOverflow,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
