//! # zonal-linalg
//!
//! Dense exact linear algebra for the zonal field crates.
//!
//! This crate provides:
//! - Dense row-major matrices over any [`Scalar`]
//! - Gauss-Jordan elimination, inversion and determinants
//! - Parallel matrix products via rayon
//!
//! Scalar arithmetic is fallible (algebraic numbers from different fields
//! cannot be combined), so every operation that touches entries returns a
//! `Result` in the scalar's own error type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod parallel;
pub mod scalar;

pub use dense_matrix::DenseMatrix;
pub use error::LinalgError;
pub use parallel::ParallelConfig;
pub use scalar::Scalar;
