//! The error type shared by every field, number, vector and matrix operation.

use thiserror::Error;
use zonal_integers::ArithmeticError;
use zonal_linalg::LinalgError;

/// Failure of an algebraic operation.
///
/// Operations fail fast: no partially built number, vector or field is ever
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A zero divisor, the reciprocal of zero, or a zero literal denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A matrix with no inverse.
    #[error("matrix is singular")]
    SingularMatrix,

    /// Operand lengths or shapes do not agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The size the operation required.
        expected: usize,
        /// The size it was given.
        found: usize,
    },

    /// Operands belong to different fields.
    #[error("cannot combine values from field `{left}` with field `{right}`")]
    IncompatibleField {
        /// Name of the receiving field.
        left: String,
        /// Name of the other operand's field.
        right: String,
    },

    /// A field operand failed validation.
    #[error("invalid field configuration: {0}")]
    InvalidFieldConfiguration(String),

    /// A basis or component index outside `0..order`.
    #[error("index {index} out of range for size {order}")]
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// The exclusive upper bound.
        order: usize,
    },

    /// The legacy text format only exists for the golden field.
    #[error("field `{0}` does not support the legacy number format")]
    UnsupportedLegacyFormat(String),

    /// An operation defined only for particular fields.
    #[error("`{operation}` is not supported by field `{field}`")]
    UnsupportedOperation {
        /// The operation that was requested.
        operation: &'static str,
        /// Name of the field it was requested on.
        field: String,
    },

    /// Malformed numeric text.
    #[error("invalid literal `{0}`")]
    InvalidLiteral(String),
}

impl From<ArithmeticError> for AlgebraError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
            ArithmeticError::InvalidLiteral(text) => Self::InvalidLiteral(text),
        }
    }
}

impl From<LinalgError> for AlgebraError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::Singular => Self::SingularMatrix,
            LinalgError::DimensionMismatch { expected, found } => {
                Self::DimensionMismatch { expected, found }
            }
            LinalgError::Empty => Self::DimensionMismatch {
                expected: 1,
                found: 0,
            },
            LinalgError::Arithmetic(err) => err.into(),
        }
    }
}
