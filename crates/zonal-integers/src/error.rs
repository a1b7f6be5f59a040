//! Errors raised by exact integer and rational arithmetic.

use thiserror::Error;

/// Failure of an exact arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A zero divisor or the reciprocal of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Text that is not an integer, fraction or decimal literal.
    #[error("invalid numeric literal `{0}`")]
    InvalidLiteral(String),
}
