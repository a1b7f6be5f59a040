//! # zonal-fields
//!
//! Exact real algebraic number fields for geometric construction.
//!
//! This crate provides:
//! - [`AlgebraicField`]: Q extended by a fixed set of real irrationals, with
//!   families for the golden ratio, square roots, regular-polygon diagonals,
//!   the composites Q(φ, √r) and Q(φ, √φ), and the snub cube's ψ
//! - [`AlgebraicNumber`], [`AlgebraicVector`] and [`AlgebraicMatrix`] built
//!   on exact [`Rational`](zonal_integers::Rational) coefficients
//! - Four text formats for numbers and parsers that read them back
//!
//! ## Example
//!
//! ```
//! use zonal_fields::AlgebraicField;
//!
//! let golden = AlgebraicField::golden();
//! let phi = golden.create_power(1).unwrap();
//! let square = phi.times(&phi).unwrap();
//! assert_eq!(square.to_string(), "1 +φ");
//! ```
//!
//! Fields are shared as `Arc<AlgebraicField>`; every value remembers its
//! field and refuses to mix with values of another one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod families;
pub mod field;
pub mod format;
pub mod kind;
pub mod matrix;
pub mod normalization;
pub mod number;
mod parse;
mod power_cache;
pub mod structure;
pub mod vector;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use config::FieldConfig;
pub use error::AlgebraError;
pub use families::PHI;
pub use field::{AlgebraicField, Coefficients};
pub use format::NumberFormat;
pub use kind::FieldKind;
pub use matrix::AlgebraicMatrix;
pub use normalization::Normalization;
pub use number::AlgebraicNumber;
pub use structure::{FieldStructure, Label, StructureConstants};
pub use vector::AlgebraicVector;
