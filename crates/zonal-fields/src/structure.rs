//! Structural description of a parameterized field.
//!
//! A field of order N is fully described by:
//! - an N×N×N integer tensor `M` with `e_j · e_k = Σ_i M[i][j][k] e_i`,
//! - the real value of each basis element,
//! - a display label per irrational basis element.
//!
//! Family factories build a [`FieldStructure`] once; the field then only
//! reads it.

use crate::AlgebraError;

/// The display names of one basis element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// Unicode form used by the default format, e.g. `"φ"`.
    pub glyph: String,
    /// ASCII form used by every other format, e.g. `"phi"`.
    pub name: String,
}

impl Label {
    /// Creates a label from its glyph and ASCII name.
    #[must_use]
    pub fn new(glyph: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            name: name.into(),
        }
    }

    /// The empty label of the rational basis element.
    #[must_use]
    pub fn rational() -> Self {
        Self::new("", "")
    }
}

/// Multiplication table `M[i][j][k]` of a field basis.
///
/// Layer `i` holds the contribution of `e_j · e_k` to coordinate `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureConstants {
    order: usize,
    data: Vec<i64>,
}

impl StructureConstants {
    /// An all-zero table for a basis of `order` elements.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            data: vec![0; order * order * order],
        }
    }

    /// Builds a table from literal layers.
    #[must_use]
    pub fn from_layers<const N: usize>(layers: [[[i64; N]; N]; N]) -> Self {
        Self {
            order: N,
            data: layers.iter().flatten().flatten().copied().collect(),
        }
    }

    /// The number of basis elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Entry `M[i][j][k]`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> i64 {
        self.data[self.offset(i, j, k)]
    }

    /// Adds `delta` to `M[i][j][k]`.
    pub fn add(&mut self, i: usize, j: usize, k: usize, delta: i64) {
        let offset = self.offset(i, j, k);
        self.data[offset] += delta;
    }

    /// Overwrites `M[i][j][k]`.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: i64) {
        let offset = self.offset(i, j, k);
        self.data[offset] = value;
    }

    /// Returns true if `M[i][j][k] == M[i][k][j]` everywhere.
    #[must_use]
    pub fn is_commutative(&self) -> bool {
        let n = self.order;
        (0..n).all(|i| (0..n).all(|j| (j + 1..n).all(|k| self.get(i, j, k) == self.get(i, k, j))))
    }

    /// Returns true if `e_0` acts as the multiplicative identity.
    #[must_use]
    pub fn has_unit(&self) -> bool {
        let n = self.order;
        (0..n).all(|i| (0..n).all(|k| self.get(i, 0, k) == i64::from(i == k)))
    }

    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.order + j) * self.order + k
    }
}

/// Everything a parameterized field derives from its operand.
#[derive(Clone, Debug)]
pub struct FieldStructure {
    pub(crate) constants: StructureConstants,
    pub(crate) coefficients: Vec<f64>,
    pub(crate) labels: Vec<Label>,
}

impl FieldStructure {
    /// Bundles a tensor with its real coefficients and labels.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidFieldConfiguration`] if the parts
    /// disagree on the order, the order is below 2, or the tensor is not
    /// commutative.
    pub fn new(
        constants: StructureConstants,
        coefficients: Vec<f64>,
        labels: Vec<Label>,
    ) -> Result<Self, AlgebraError> {
        let order = constants.order();
        if order < 2 || coefficients.len() != order || labels.len() != order {
            return Err(AlgebraError::InvalidFieldConfiguration(format!(
                "inconsistent structure: tensor order {order}, {} coefficients, {} labels",
                coefficients.len(),
                labels.len()
            )));
        }
        if !constants.is_commutative() {
            return Err(AlgebraError::InvalidFieldConfiguration(
                "structure tensor is not commutative".to_string(),
            ));
        }
        Ok(Self {
            constants,
            coefficients,
            labels,
        })
    }

    /// The multiplication table.
    #[must_use]
    pub fn constants(&self) -> &StructureConstants {
        &self.constants
    }

    /// Real value of each basis element.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Display labels, index 0 empty.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}
