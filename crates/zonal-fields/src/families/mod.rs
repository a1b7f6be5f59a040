//! Field families.
//!
//! Each family module adds a constructor to [`AlgebraicField`](crate::AlgebraicField).
//! Construction is two-phase: the operand is validated, then a pure factory
//! builds the tensor, the real coefficients and the labels (in that order),
//! and the finished [`FieldStructure`](crate::FieldStructure) is handed to
//! the field.

pub mod composite;
pub mod golden;
pub mod polygon;
pub mod snub_cube;
pub mod sqrt;

pub use golden::PHI;
