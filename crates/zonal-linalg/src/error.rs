//! Errors raised by dense elimination and matrix products.

use thiserror::Error;
use zonal_integers::ArithmeticError;

/// Failure of a matrix operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Elimination found a column with no nonzero pivot.
    #[error("matrix is singular")]
    Singular,

    /// Operand shapes do not agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The size the operation required.
        expected: usize,
        /// The size it was given.
        found: usize,
    },

    /// The operation has no defined result on a matrix without entries.
    #[error("operation requires a non-empty matrix")]
    Empty,

    /// Entry arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
