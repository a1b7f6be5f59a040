//! Vectors of algebraic numbers.

use std::fmt;
use std::sync::Arc;

use crate::{AlgebraError, AlgebraicField, AlgebraicNumber, NumberFormat};

/// A fixed-length vector over one [`AlgebraicField`].
///
/// The dimension is independent of the field order. Vectors are values:
/// every operation returns a new vector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AlgebraicVector {
    field: Arc<AlgebraicField>,
    components: Vec<AlgebraicNumber>,
}

impl AlgebraicVector {
    /// Index of the x component.
    pub const X: usize = 0;
    /// Index of the y component.
    pub const Y: usize = 1;
    /// Index of the z component.
    pub const Z: usize = 2;

    pub(crate) fn from_parts(field: Arc<AlgebraicField>, components: Vec<AlgebraicNumber>) -> Self {
        Self { field, components }
    }

    /// Creates a vector from components of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] if any component belongs
    /// to another field.
    pub fn new(field: &Arc<AlgebraicField>, components: Vec<AlgebraicNumber>) -> Result<Self, AlgebraError> {
        for component in &components {
            field.ensure_same(component.field())?;
        }
        Ok(Self::from_parts(Arc::clone(field), components))
    }

    /// The field of every component.
    #[must_use]
    pub fn field(&self) -> &Arc<AlgebraicField> {
        &self.field
    }

    /// Number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// All components in order.
    #[must_use]
    pub fn components(&self) -> &[AlgebraicNumber] {
        &self.components
    }

    /// Component `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] if `axis ≥ dimension`.
    pub fn component(&self, axis: usize) -> Result<&AlgebraicNumber, AlgebraError> {
        self.components.get(axis).ok_or_else(|| self.out_of_range(axis))
    }

    /// A copy of this vector with component `axis` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] for a bad axis and
    /// [`AlgebraError::IncompatibleField`] for a foreign value.
    pub fn with_component(&self, axis: usize, value: AlgebraicNumber) -> Result<Self, AlgebraError> {
        if axis >= self.dimension() {
            return Err(self.out_of_range(axis));
        }
        self.field.ensure_same(value.field())?;
        let mut components = self.components.clone();
        components[axis] = value;
        Ok(Self::from_parts(Arc::clone(&self.field), components))
    }

    /// Componentwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if the vectors do not match.
    pub fn plus(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, AlgebraicNumber::plus)
    }

    /// Componentwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if the vectors do not match.
    pub fn minus(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, AlgebraicNumber::minus)
    }

    /// Multiplies every component by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] for a foreign scalar.
    pub fn scale(&self, scalar: &AlgebraicNumber) -> Result<Self, AlgebraError> {
        let components = self
            .components
            .iter()
            .map(|c| c.times(scalar))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parts(Arc::clone(&self.field), components))
    }

    /// Inner product `Σ self[i] · rhs[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if the vectors do not match.
    pub fn dot(&self, rhs: &Self) -> Result<AlgebraicNumber, AlgebraError> {
        self.check_compatible(rhs)?;
        let mut sum = self.field.zero();
        for (a, b) in self.components.iter().zip(&rhs.components) {
            sum = sum.plus(&a.times(b)?)?;
        }
        Ok(sum)
    }

    /// The 3-D cross product.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless both vectors have
    /// three components, and [`AlgebraError::IncompatibleField`] for a
    /// foreign vector.
    pub fn cross(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        if self.dimension() != 3 {
            return Err(AlgebraError::DimensionMismatch {
                expected: 3,
                found: self.dimension(),
            });
        }
        let (a, b) = (&self.components, &rhs.components);
        let term = |i: usize, j: usize| -> Result<AlgebraicNumber, AlgebraError> {
            a[i].times(&b[j])?.minus(&a[j].times(&b[i])?)
        };
        let components = vec![term(Self::Y, Self::Z)?, term(Self::Z, Self::X)?, term(Self::X, Self::Y)?];
        Ok(Self::from_parts(Arc::clone(&self.field), components))
    }

    /// Componentwise additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        let components = self.components.iter().map(AlgebraicNumber::negate).collect();
        Self::from_parts(Arc::clone(&self.field), components)
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.components.iter().all(AlgebraicNumber::is_zero)
    }

    /// Real embedding of each component.
    #[must_use]
    pub fn to_real_vector(&self) -> Vec<f64> {
        self.components.iter().map(AlgebraicNumber::evaluate).collect()
    }

    /// Renders the components in `format`, comma separated for the term
    /// formats and space separated for Zomic and VEF.
    #[must_use]
    pub fn to_string_format(&self, format: NumberFormat) -> String {
        let separator = match format {
            NumberFormat::Default | NumberFormat::Expression => ", ",
            NumberFormat::Zomic | NumberFormat::Vef => " ",
        };
        self.components
            .iter()
            .map(|c| c.to_string_format(format))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn zip_with<F>(&self, rhs: &Self, op: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&AlgebraicNumber, &AlgebraicNumber) -> Result<AlgebraicNumber, AlgebraError>,
    {
        self.check_compatible(rhs)?;
        let components = self
            .components
            .iter()
            .zip(&rhs.components)
            .map(|(a, b)| op(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parts(Arc::clone(&self.field), components))
    }

    fn check_compatible(&self, rhs: &Self) -> Result<(), AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        if self.dimension() != rhs.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: rhs.dimension(),
            });
        }
        Ok(())
    }

    fn out_of_range(&self, axis: usize) -> AlgebraError {
        AlgebraError::IndexOutOfRange {
            index: i64::try_from(axis).unwrap_or(i64::MAX),
            order: self.dimension(),
        }
    }
}

impl fmt::Display for AlgebraicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.to_string_format(NumberFormat::Default))
    }
}

impl fmt::Debug for AlgebraicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field.name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_foreign_components() {
        let golden = AlgebraicField::golden();
        let root2 = AlgebraicField::sqrt(2).unwrap();
        assert!(AlgebraicVector::new(&golden, vec![golden.one(), golden.zero()]).is_ok());
        assert!(AlgebraicVector::new(&golden, vec![golden.one(), root2.one()]).is_err());
    }

    #[test]
    fn test_component_access() {
        let field = AlgebraicField::golden();
        let v = field.basis_vector(3, AlgebraicVector::Y).unwrap();
        assert_eq!(v.component(AlgebraicVector::Y).unwrap(), &field.one());
        assert!(v.component(AlgebraicVector::X).unwrap().is_zero());
        assert_eq!(
            v.component(3),
            Err(AlgebraError::IndexOutOfRange { index: 3, order: 3 })
        );
        assert!(field.basis_vector(3, 3).is_err());

        let w = v.with_component(AlgebraicVector::Z, field.create_power(1).unwrap()).unwrap();
        assert_eq!(w.to_string(), "(0, 1, φ)");
        // The original is untouched.
        assert_eq!(v.to_string(), "(0, 1, 0)");
    }

    #[test]
    fn test_arithmetic() {
        let field = AlgebraicField::golden();
        let a = field.create_vector(&[[1, 1, 1, 1], [2, 1, 0, 1]]).unwrap();
        let b = field.create_vector(&[[0, 1, 1, 1], [1, 1, 0, 1]]).unwrap();
        assert_eq!(a.plus(&b).unwrap(), field.create_vector(&[[1, 1, 2, 1], [3, 1, 0, 1]]).unwrap());
        assert_eq!(a.minus(&b).unwrap(), field.create_vector(&[[1, 1], [1, 1]]).unwrap());
        assert!(a.minus(&a).unwrap().is_origin());
        assert_eq!(a.plus(&a.negate()).unwrap(), field.origin(2));

        let phi = field.create_power(1).unwrap();
        let scaled = a.scale(&phi).unwrap();
        assert_eq!(scaled, field.create_vector(&[[1, 1, 2, 1], [0, 1, 2, 1]]).unwrap());

        let short = field.origin(3);
        assert!(matches!(a.plus(&short), Err(AlgebraError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_cross_product() {
        let field = AlgebraicField::sqrt(2).unwrap();
        let x = field.basis_vector(3, AlgebraicVector::X).unwrap();
        let y = field.basis_vector(3, AlgebraicVector::Y).unwrap();
        let z = field.basis_vector(3, AlgebraicVector::Z).unwrap();
        assert_eq!(x.cross(&y).unwrap(), z);
        assert_eq!(y.cross(&x).unwrap(), z.negate());

        let u = field.create_vector(&[[1, 1, 1, 1], [0, 1, 2, 1], [3, 1, 0, 1]]).unwrap();
        let v = field.create_vector(&[[2, 1, 0, 1], [1, 1, 0, 1], [0, 1, 1, 1]]).unwrap();
        let w = u.cross(&v).unwrap();
        assert!(w.dot(&u).unwrap().is_zero());
        assert!(w.dot(&v).unwrap().is_zero());

        assert!(field.origin(2).cross(&field.origin(2)).is_err());
    }

    #[test]
    fn test_real_vector_and_formats() {
        let field = AlgebraicField::golden();
        let v = field.create_vector(&[[1, 2, 0, 1], [0, 1, 1, 1]]).unwrap();
        let real = v.to_real_vector();
        assert_eq!(real[0], 0.5);
        assert_eq!(real[1], crate::PHI);
        assert_eq!(v.to_string_format(NumberFormat::Zomic), "1/2 0 0 1");
        assert_eq!(v.to_string_format(NumberFormat::Vef), "(0,1/2) (1,0)");
        assert_eq!(format!("{v:?}"), "golden(1/2, φ)");
    }
}
