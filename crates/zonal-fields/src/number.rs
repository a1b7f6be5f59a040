//! Numbers in an algebraic field.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::sync::Arc;

use num_traits::{One, Zero};
use zonal_integers::Rational;
use zonal_linalg::Scalar;

use crate::{AlgebraError, AlgebraicField, Coefficients, NumberFormat};

/// An exact element of an [`AlgebraicField`].
///
/// Holds exactly `order` rational coefficients over the field's basis,
/// always normalized. Arithmetic between numbers of different fields fails
/// with [`AlgebraError::IncompatibleField`], so the binary operations are
/// methods returning `Result` rather than operator impls.
#[derive(Clone)]
pub struct AlgebraicNumber {
    field: Arc<AlgebraicField>,
    coefficients: Coefficients,
}

impl AlgebraicNumber {
    /// Pads or truncates `coefficients` to the field order and normalizes.
    pub(crate) fn new(field: Arc<AlgebraicField>, coefficients: Coefficients) -> Self {
        let mut coefficients = field.padded(&coefficients);
        field.normalize(&mut coefficients);
        Self { field, coefficients }
    }

    /// Wraps coefficients that are already order-length and normalized.
    pub(crate) fn from_normalized(field: Arc<AlgebraicField>, coefficients: Coefficients) -> Self {
        debug_assert_eq!(coefficients.len(), field.order());
        Self { field, coefficients }
    }

    /// The field this number belongs to.
    #[must_use]
    pub fn field(&self) -> &Arc<AlgebraicField> {
        &self.field
    }

    /// The coefficients over the field basis, index 0 first.
    #[must_use]
    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Zero::is_zero)
    }

    /// Returns true if this is exactly one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coefficients[0].is_one() && self.is_rational()
    }

    /// Returns true if every irrational coefficient is zero.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.coefficients[1..].iter().all(Zero::is_zero)
    }

    /// `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] if `rhs` is from another field.
    pub fn plus(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        let sum = self
            .coefficients
            .iter()
            .zip(&rhs.coefficients)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self::new(Arc::clone(&self.field), sum))
    }

    /// `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] if `rhs` is from another field.
    pub fn minus(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        let difference = self
            .coefficients
            .iter()
            .zip(&rhs.coefficients)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self::new(Arc::clone(&self.field), difference))
    }

    /// `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] if `rhs` is from another field.
    pub fn times(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        let product = self.field.multiply(&self.coefficients, &rhs.coefficients);
        Ok(Self::from_normalized(Arc::clone(&self.field), product))
    }

    /// `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] for a foreign `rhs` and
    /// [`AlgebraError::DivisionByZero`] if `rhs` is zero.
    pub fn divided_by(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        self.times(&rhs.reciprocal()?)
    }

    /// Multiplies every coefficient by a rational.
    #[must_use]
    pub fn times_rational(&self, factor: &Rational) -> Self {
        let scaled = self.coefficients.iter().map(|c| c * factor).collect();
        Self::new(Arc::clone(&self.field), scaled)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for zero and
    /// [`AlgebraError::SingularMatrix`] if the field cannot invert this value.
    pub fn reciprocal(&self) -> Result<Self, AlgebraError> {
        let inverse = self.field.reciprocal(&self.coefficients)?;
        Ok(Self::from_normalized(Arc::clone(&self.field), inverse))
    }

    /// Additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        let negated = self.coefficients.iter().map(Neg::neg).collect();
        Self::from_normalized(Arc::clone(&self.field), negated)
    }

    /// Real approximation of this number.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        self.field.evaluate(&self.coefficients)
    }

    /// Renders this number in one of the four text formats.
    #[must_use]
    pub fn to_string_format(&self, format: NumberFormat) -> String {
        self.field.render(&self.coefficients, format)
    }
}

impl PartialEq for AlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coefficients == other.coefficients
    }
}

impl Eq for AlgebraicNumber {}

impl Hash for AlgebraicNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.coefficients.hash(state);
    }
}

impl Neg for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        self.negate()
    }
}

impl Neg for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        self.negate()
    }
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_format(NumberFormat::Default))
    }
}

impl fmt::Debug for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field.name(), self)
    }
}

impl Scalar for AlgebraicNumber {
    type Error = AlgebraError;

    fn is_zero(&self) -> bool {
        AlgebraicNumber::is_zero(self)
    }

    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn negated(&self) -> Self {
        self.negate()
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.plus(rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.minus(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.times(rhs)
    }

    fn try_recip(&self) -> Result<Self, Self::Error> {
        self.reciprocal()
    }
}
