//! The entry type of a [`DenseMatrix`](crate::DenseMatrix).

use std::fmt;

use num_traits::{One, Zero};
use zonal_integers::Rational;

use crate::LinalgError;

/// A field element whose arithmetic may fail.
///
/// Algebraic numbers carry their field at runtime, so zero and one are
/// derived from an existing value (`zero_like`, `one_like`) rather than
/// from a type-level constant.
pub trait Scalar: Clone + PartialEq + fmt::Debug {
    /// Error produced by entry arithmetic. Elimination failures convert into it.
    type Error: From<LinalgError>;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Zero in the same field as `self`.
    #[must_use]
    fn zero_like(&self) -> Self;

    /// One in the same field as `self`.
    #[must_use]
    fn one_like(&self) -> Self;

    /// Additive inverse.
    #[must_use]
    fn negated(&self) -> Self;

    /// `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands cannot be combined.
    fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands cannot be combined.
    fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands cannot be combined.
    fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self` is zero.
    fn try_recip(&self) -> Result<Self, Self::Error>;
}

impl Scalar for Rational {
    type Error = LinalgError;

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn zero_like(&self) -> Self {
        Rational::zero()
    }

    fn one_like(&self) -> Self {
        Rational::one()
    }

    fn negated(&self) -> Self {
        -self
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error> {
        Ok(self * rhs)
    }

    fn try_recip(&self) -> Result<Self, Self::Error> {
        Ok(self.checked_recip()?)
    }
}
