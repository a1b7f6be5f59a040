//! The algebraic field type.
//!
//! An [`AlgebraicField`] of order N is Q extended by N − 1 real irrationals,
//! with a fixed basis `1, e_1, …, e_{N-1}`. Numbers are rational coefficient
//! vectors over that basis; the field owns the rules that multiply, invert,
//! normalize and evaluate them.
//!
//! Fields are built once by a family constructor (see [`crate::families`])
//! and shared as `Arc<AlgebraicField>`. Every number, vector and matrix keeps
//! an `Arc` to its field, so methods that manufacture values take
//! `self: &Arc<Self>`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};
use zonal_integers::Rational;
use zonal_linalg::DenseMatrix;

use crate::families::golden;
use crate::format::{self, NumberFormat};
use crate::power_cache::PowerCache;
use crate::structure::{FieldStructure, Label, StructureConstants};
use crate::{
    AlgebraError, AlgebraicMatrix, AlgebraicNumber, AlgebraicVector, FieldKind, Normalization,
};

/// Rational coefficients of a number, index 0 first.
pub type Coefficients = SmallVec<[Rational; 4]>;

/// How a field multiplies.
#[derive(Debug)]
pub(crate) enum Arithmetic {
    /// Closed forms using `φ² = φ + 1`.
    Golden,
    /// Contraction with a structure tensor.
    Tensor(StructureConstants),
}

/// An exact real algebraic number field.
pub struct AlgebraicField {
    kind: FieldKind,
    name: String,
    order: usize,
    arithmetic: Arithmetic,
    coefficients: Vec<f64>,
    labels: Vec<Label>,
    normalization: Normalization,
    subfield: Option<Arc<AlgebraicField>>,
    powers: PowerCache,
}

impl AlgebraicField {
    pub(crate) fn from_parts(
        kind: FieldKind,
        arithmetic: Arithmetic,
        coefficients: Vec<f64>,
        labels: Vec<Label>,
        normalization: Normalization,
        subfield: Option<Arc<AlgebraicField>>,
    ) -> Arc<Self> {
        let name = kind.to_string();
        let order = coefficients.len();
        log::debug!("constructed field {name} of order {order}");
        Arc::new(Self {
            kind,
            name,
            order,
            arithmetic,
            coefficients,
            labels,
            normalization,
            subfield,
            powers: PowerCache::default(),
        })
    }

    /// Second construction phase: wraps a validated [`FieldStructure`].
    pub(crate) fn from_structure(
        kind: FieldKind,
        structure: FieldStructure,
        normalization: Normalization,
        subfield: Option<Arc<AlgebraicField>>,
    ) -> Arc<Self> {
        let FieldStructure {
            constants,
            coefficients,
            labels,
        } = structure;
        Self::from_parts(
            kind,
            Arithmetic::Tensor(constants),
            coefficients,
            labels,
            normalization,
            subfield,
        )
    }

    /// The family and operand identifying this field.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Stable name, e.g. `"golden"` or `"polygon7"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of basis elements, including the rational unit.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The golden subfield of the composite fields.
    #[must_use]
    pub fn subfield(&self) -> Option<&Arc<AlgebraicField>> {
        self.subfield.as_ref()
    }

    /// Real value of each basis element.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The normalization rule applied to every number.
    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// The multiplication tensor, or `None` for the golden field's closed forms.
    #[must_use]
    pub fn structure_constants(&self) -> Option<&StructureConstants> {
        match &self.arithmetic {
            Arithmetic::Golden => None,
            Arithmetic::Tensor(constants) => Some(constants),
        }
    }

    /// Label of basis element `index`: the glyph for [`NumberFormat::Default`],
    /// the ASCII name otherwise. Empty for index 0 and out-of-range indices.
    #[must_use]
    pub fn irrational_label(&self, index: usize, format: NumberFormat) -> &str {
        match self.labels.get(index) {
            Some(label) if format == NumberFormat::Default => &label.glyph,
            Some(label) => &label.name,
            None => "",
        }
    }

    pub(crate) fn labels(&self) -> &[Label] {
        &self.labels
    }

    // ---------------------------------------------------------------------
    // Coefficient arithmetic
    // ---------------------------------------------------------------------

    /// Product of two coefficient vectors, normalized.
    ///
    /// Missing trailing coefficients read as zero.
    #[must_use]
    pub fn multiply(&self, a: &[Rational], b: &[Rational]) -> Coefficients {
        let mut product = match &self.arithmetic {
            Arithmetic::Golden => golden::multiply(a, b),
            Arithmetic::Tensor(m) => tensor_multiply(m, a, b),
        };
        self.normalize(&mut product);
        product
    }

    /// Multiplies `a` by basis element `basis`, normalized.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] if `basis ≥ order`.
    pub fn scale_by(&self, a: &[Rational], basis: usize) -> Result<Coefficients, AlgebraError> {
        if basis >= self.order {
            return Err(AlgebraError::IndexOutOfRange {
                index: i64::try_from(basis).unwrap_or(i64::MAX),
                order: self.order,
            });
        }
        let mut scaled = if basis == 0 {
            self.padded(a)
        } else {
            match &self.arithmetic {
                Arithmetic::Golden => golden::scale_by_phi(a),
                Arithmetic::Tensor(m) => {
                    let mut out: Coefficients = smallvec![Rational::zero(); self.order];
                    for (i, slot) in out.iter_mut().enumerate() {
                        for (k, ak) in a.iter().enumerate().take(self.order) {
                            add_multiple(slot, ak, m.get(i, k, basis));
                        }
                    }
                    out
                }
            }
        };
        self.normalize(&mut scaled);
        Ok(scaled)
    }

    /// Rewrites `coeffs` into this field's canonical form.
    pub fn normalize(&self, coeffs: &mut [Rational]) {
        self.normalization.apply(coeffs);
    }

    /// Real approximation `Σ coeffs[i] · coefficient[i]`, summed in index order.
    #[must_use]
    pub fn evaluate(&self, coeffs: &[Rational]) -> f64 {
        match &self.arithmetic {
            Arithmetic::Golden => golden::evaluate(coeffs),
            Arithmetic::Tensor(_) => {
                let mut sum = 0.0;
                for (factor, coefficient) in coeffs.iter().zip(&self.coefficients) {
                    sum += factor.to_f64() * coefficient;
                }
                sum
            }
        }
    }

    /// Multiplicative inverse of a coefficient vector.
    ///
    /// Rational inputs invert directly and the golden field uses its closed
    /// form. Otherwise the representation matrix (row `j` is `a · e_j`) is
    /// inverted by Gauss-Jordan elimination and the first row of the inverse
    /// is the answer. Coordinates that normalization always zeroes are left
    /// out of the matrix, which would otherwise be singular.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for zero and
    /// [`AlgebraError::SingularMatrix`] if elimination finds no pivot.
    pub fn reciprocal(&self, a: &[Rational]) -> Result<Coefficients, AlgebraError> {
        let mut a = self.padded(a);
        self.normalize(&mut a);
        if a.iter().all(Zero::is_zero) {
            return Err(AlgebraError::DivisionByZero);
        }

        let mut inverse = if a[1..].iter().all(Zero::is_zero) {
            let mut out: Coefficients = smallvec![Rational::zero(); self.order];
            out[0] = a[0].checked_recip()?;
            out
        } else {
            match &self.arithmetic {
                Arithmetic::Golden => golden::reciprocal(&a)?,
                Arithmetic::Tensor(_) => self.reciprocal_by_elimination(&a)?,
            }
        };
        self.normalize(&mut inverse);
        Ok(inverse)
    }

    fn reciprocal_by_elimination(&self, a: &[Rational]) -> Result<Coefficients, AlgebraError> {
        let active: SmallVec<[usize; 8]> = (0..self.order)
            .filter(|&i| !self.normalization.collapses(i))
            .collect();

        let rows = active
            .iter()
            .map(|&j| {
                let image = self.scale_by(a, j)?;
                Ok(active.iter().map(|&i| image[i].clone()).collect())
            })
            .collect::<Result<Vec<Vec<Rational>>, AlgebraError>>()?;

        let mut matrix = DenseMatrix::from_rows(rows)?;
        let mut inverse = DenseMatrix::identity_like(active.len(), &Rational::one());
        matrix.gauss_jordan(&mut inverse)?;
        log::trace!(
            "{}: reciprocal via {n}x{n} elimination",
            self.name,
            n = active.len()
        );

        let mut out: Coefficients = smallvec![Rational::zero(); self.order];
        for (column, &i) in active.iter().enumerate() {
            out[i] = inverse[(0, column)].clone();
        }
        Ok(out)
    }

    pub(crate) fn render(&self, coeffs: &[Rational], format: NumberFormat) -> String {
        format::render(coeffs, format, |i| self.irrational_label(i, format))
    }

    /// Copies `a` into an order-length vector, zero-filling or truncating.
    pub(crate) fn padded(&self, a: &[Rational]) -> Coefficients {
        let mut out: Coefficients = a.iter().take(self.order).cloned().collect();
        out.resize(self.order, Rational::zero());
        out
    }

    fn unit_coefficients(&self, index: usize) -> Coefficients {
        let mut out: Coefficients = smallvec![Rational::zero(); self.order];
        out[index] = Rational::one();
        out
    }

    pub(crate) fn ensure_same(&self, other: &AlgebraicField) -> Result<(), AlgebraError> {
        if self == other {
            Ok(())
        } else {
            Err(AlgebraError::IncompatibleField {
                left: self.name.clone(),
                right: other.name.clone(),
            })
        }
    }

    // ---------------------------------------------------------------------
    // Number factories
    // ---------------------------------------------------------------------

    /// The additive identity.
    #[must_use]
    pub fn zero(self: &Arc<Self>) -> AlgebraicNumber {
        AlgebraicNumber::from_normalized(Arc::clone(self), smallvec![Rational::zero(); self.order])
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(self: &Arc<Self>) -> AlgebraicNumber {
        AlgebraicNumber::from_normalized(Arc::clone(self), self.unit_coefficients(0))
    }

    /// Creates a number from rational coefficients, zero-filling missing ones.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if more than `order`
    /// coefficients are given.
    pub fn create_number(self: &Arc<Self>, coeffs: &[Rational]) -> Result<AlgebraicNumber, AlgebraError> {
        if coeffs.len() > self.order {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.order,
                found: coeffs.len(),
            });
        }
        Ok(AlgebraicNumber::new(Arc::clone(self), coeffs.iter().cloned().collect()))
    }

    /// Creates a number with integer coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if more than `order`
    /// integers are given.
    pub fn create_algebraic_number(self: &Arc<Self>, integers: &[i64]) -> Result<AlgebraicNumber, AlgebraError> {
        let coeffs: Vec<Rational> = integers.iter().map(|&n| Rational::from(n)).collect();
        self.create_number(&coeffs)
    }

    /// Creates the rational `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero denominator.
    pub fn create_rational(self: &Arc<Self>, numerator: i64, denominator: i64) -> Result<AlgebraicNumber, AlgebraError> {
        self.create_number(&[Rational::from_i64(numerator, denominator)?])
    }

    /// Creates `(ones + irrational·e_1) / denominator · e_1^scale_power`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero denominator, or
    /// when a negative `scale_power` meets a non-invertible generator.
    pub fn create_scaled(
        self: &Arc<Self>,
        ones: i64,
        irrational: i64,
        denominator: i64,
        scale_power: i32,
    ) -> Result<AlgebraicNumber, AlgebraError> {
        let base = self.create_number(&[
            Rational::from_i64(ones, denominator)?,
            Rational::from_i64(irrational, denominator)?,
        ])?;
        if scale_power == 0 {
            Ok(base)
        } else {
            base.times(&self.create_power(scale_power)?)
        }
    }

    /// The `exponent`-th power of the first irrational, for any sign.
    ///
    /// Powers are cached; `create_power(0)` is one.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if a negative power is
    /// requested and the generator normalizes to zero.
    pub fn create_power(self: &Arc<Self>, exponent: i32) -> Result<AlgebraicNumber, AlgebraError> {
        if exponent == 0 {
            return Ok(self.one());
        }
        let negative = exponent < 0;
        let mut generator = self.unit_coefficients(1);
        self.normalize(&mut generator);

        let coeffs = self.powers.power(
            negative,
            exponent.unsigned_abs() as usize,
            || {
                if negative {
                    self.reciprocal(&generator)
                } else {
                    Ok(generator.clone())
                }
            },
            |acc, base| self.multiply(acc, base),
        )?;
        Ok(AlgebraicNumber::from_normalized(Arc::clone(self), coeffs))
    }

    /// The number whose coefficient `index` is one and all others zero.
    ///
    /// Negative indices give zero.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] if `index ≥ order`.
    pub fn unit_term(self: &Arc<Self>, index: i64) -> Result<AlgebraicNumber, AlgebraError> {
        if index < 0 {
            return Ok(self.zero());
        }
        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.order)
            .ok_or(AlgebraError::IndexOutOfRange {
                index,
                order: self.order,
            })?;
        Ok(AlgebraicNumber::new(Arc::clone(self), self.unit_coefficients(position)))
    }

    /// Ratio used by affine polygon constructions: `φ`-like first irrational
    /// for most fields, the second diagonal for polygons with more than five sides.
    #[must_use]
    pub fn affine_scalar(self: &Arc<Self>) -> AlgebraicNumber {
        let index = match self.kind {
            FieldKind::Polygon(_) if self.order > 2 => 2,
            _ => 1,
        };
        AlgebraicNumber::new(Arc::clone(self), self.unit_coefficients(index))
    }

    /// The scale factor applied to default strut lengths.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`create_scaled`](Self::create_scaled).
    pub fn default_strut_scaling(self: &Arc<Self>) -> Result<AlgebraicNumber, AlgebraError> {
        match self.kind {
            FieldKind::Golden | FieldKind::Polygon(5) => self.create_scaled(-1, 1, 2, 0),
            FieldKind::Sqrt(_) => self.create_scaled(1, 0, 2, -3),
            _ => Ok(self.one()),
        }
    }

    /// Re-expresses a number from this field's subfield in this field's basis.
    ///
    /// The composite fields put the golden basis `{1, φ}` first, so lifting
    /// zero-extends the coefficients. Numbers already in this field are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IncompatibleField`] if `number` belongs to
    /// neither this field nor its subfield.
    pub fn lift(self: &Arc<Self>, number: &AlgebraicNumber) -> Result<AlgebraicNumber, AlgebraError> {
        if **number.field() == **self {
            return Ok(number.clone());
        }
        match &self.subfield {
            Some(sub) if **sub == **number.field() => self.create_number(number.coefficients()),
            _ => Err(AlgebraError::IncompatibleField {
                left: self.name.clone(),
                right: number.field().name().to_string(),
            }),
        }
    }

    /// The golden conjugate `a + bφ ↦ (a + b) − bφ`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedOperation`] outside the golden
    /// field and [`AlgebraError::IncompatibleField`] for a foreign number.
    pub fn golden_conjugate(self: &Arc<Self>, number: &AlgebraicNumber) -> Result<AlgebraicNumber, AlgebraError> {
        if self.kind != FieldKind::Golden {
            return Err(AlgebraError::UnsupportedOperation {
                operation: "golden_conjugate",
                field: self.name.clone(),
            });
        }
        self.ensure_same(number.field())?;
        let c = number.coefficients();
        self.create_number(&[&c[0] + &c[1], -&c[1]])
    }

    // ---------------------------------------------------------------------
    // Vector and matrix factories
    // ---------------------------------------------------------------------

    /// The zero vector of `dims` components.
    #[must_use]
    pub fn origin(self: &Arc<Self>, dims: usize) -> AlgebraicVector {
        AlgebraicVector::from_parts(Arc::clone(self), vec![self.zero(); dims])
    }

    /// The unit vector along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] if `axis ≥ dims`.
    pub fn basis_vector(self: &Arc<Self>, dims: usize, axis: usize) -> Result<AlgebraicVector, AlgebraError> {
        self.origin(dims).with_component(axis, self.one())
    }

    /// The `dims × dims` identity matrix.
    #[must_use]
    pub fn identity_matrix(self: &Arc<Self>, dims: usize) -> AlgebraicMatrix {
        AlgebraicMatrix::identity(self, dims)
    }

    /// Builds a vector from per-component integer lists.
    ///
    /// Each list holds `numerator, denominator` pairs for coefficients
    /// `0, 1, …`, so it must have even length and at most `2·order` entries.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for a malformed list and
    /// [`AlgebraError::DivisionByZero`] for a zero denominator.
    pub fn create_vector<R: AsRef<[i64]>>(self: &Arc<Self>, components: &[R]) -> Result<AlgebraicVector, AlgebraError> {
        let components = components
            .iter()
            .map(|pairs| self.number_from_pairs(pairs.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AlgebraicVector::from_parts(Arc::clone(self), components))
    }

    /// Builds a vector from the flat legacy layout: `2·order` integers per component.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the length is not a
    /// multiple of `2·order`, and [`AlgebraError::DivisionByZero`] for a
    /// zero denominator.
    pub fn create_vector_flat(self: &Arc<Self>, integers: &[i64]) -> Result<AlgebraicVector, AlgebraError> {
        let stride = 2 * self.order;
        if integers.len() % stride != 0 {
            return Err(AlgebraError::DimensionMismatch {
                expected: integers.len().next_multiple_of(stride),
                found: integers.len(),
            });
        }
        let components = integers
            .chunks(stride)
            .map(|pairs| self.number_from_pairs(pairs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AlgebraicVector::from_parts(Arc::clone(self), components))
    }

    fn number_from_pairs(self: &Arc<Self>, pairs: &[i64]) -> Result<AlgebraicNumber, AlgebraError> {
        if pairs.len() % 2 != 0 || pairs.len() > 2 * self.order {
            return Err(AlgebraError::DimensionMismatch {
                expected: 2 * self.order,
                found: pairs.len(),
            });
        }
        let coeffs = pairs
            .chunks(2)
            .map(|pair| Rational::from_i64(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        self.create_number(&coeffs)
    }

    /// Drops one coordinate of a 4-D vector: the first when `w_first`,
    /// otherwise the last. 3-D vectors are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for fewer than three
    /// components and [`AlgebraError::IncompatibleField`] for a foreign vector.
    pub fn project_to_3d(self: &Arc<Self>, vector: &AlgebraicVector, w_first: bool) -> Result<AlgebraicVector, AlgebraError> {
        self.ensure_same(vector.field())?;
        let dims = vector.dimension();
        if dims < 3 {
            return Err(AlgebraError::DimensionMismatch {
                expected: 3,
                found: dims,
            });
        }
        if dims == 3 {
            return Ok(vector.clone());
        }
        let offset = usize::from(w_first);
        Ok(AlgebraicVector::from_parts(
            Arc::clone(self),
            vector.components()[offset..offset + 3].to_vec(),
        ))
    }
}

/// `slot += value · multiple`, skipping zero work.
pub(crate) fn add_multiple(slot: &mut Rational, value: &Rational, multiple: i64) {
    if multiple == 0 || value.is_zero() {
        return;
    }
    let term = if multiple == 1 {
        value.clone()
    } else {
        value * &Rational::from(multiple)
    };
    *slot = &*slot + &term;
}

fn tensor_multiply(m: &StructureConstants, a: &[Rational], b: &[Rational]) -> Coefficients {
    let n = m.order();
    let mut out: Coefficients = smallvec![Rational::zero(); n];
    for (j, aj) in a.iter().enumerate().take(n) {
        if aj.is_zero() {
            continue;
        }
        for (k, bk) in b.iter().enumerate().take(n) {
            if bk.is_zero() {
                continue;
            }
            let product = aj * bk;
            for (i, slot) in out.iter_mut().enumerate() {
                add_multiple(slot, &product, m.get(i, j, k));
            }
        }
    }
    out
}

impl PartialEq for AlgebraicField {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for AlgebraicField {}

impl Hash for AlgebraicField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl fmt::Debug for AlgebraicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgebraicField")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("normalization", &self.normalization)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AlgebraicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
