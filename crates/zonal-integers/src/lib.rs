//! # zonal-integers
//!
//! Exact rational arithmetic for the zonal field crates.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`) with checked division
//! - Literal parsing for integers, fractions and finite decimals
//!
//! Numerators and denominators never overflow: every intermediate
//! value is a heap-backed big integer once it outgrows a machine word.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
