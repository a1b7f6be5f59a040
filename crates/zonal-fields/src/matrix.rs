//! Square matrices of algebraic numbers.
//!
//! A matrix is built from column vectors, the way transformations are
//! assembled from the images of the basis vectors, and stored as a
//! [`DenseMatrix`] so elimination and products come from `zonal-linalg`.

use std::fmt;
use std::sync::Arc;

use zonal_linalg::parallel::mm_with_config;
use zonal_linalg::DenseMatrix;

use crate::{AlgebraError, AlgebraicField, AlgebraicNumber, AlgebraicVector, FieldConfig};

/// A square matrix over one [`AlgebraicField`].
#[derive(Clone, PartialEq, Eq)]
pub struct AlgebraicMatrix {
    field: Arc<AlgebraicField>,
    entries: DenseMatrix<AlgebraicNumber>,
}

impl AlgebraicMatrix {
    /// The `dims × dims` identity.
    #[must_use]
    pub fn identity(field: &Arc<AlgebraicField>, dims: usize) -> Self {
        Self {
            field: Arc::clone(field),
            entries: DenseMatrix::identity_like(dims, &field.one()),
        }
    }

    /// Builds a matrix whose column `j` is `columns[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless there are as many
    /// columns as each column has components, and
    /// [`AlgebraError::IncompatibleField`] for a foreign column.
    pub fn from_columns(field: &Arc<AlgebraicField>, columns: &[AlgebraicVector]) -> Result<Self, AlgebraError> {
        Ok(Self::from_rows(field, columns)?.transpose())
    }

    /// Builds a matrix whose row `i` is `rows[i]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_columns`](Self::from_columns).
    pub fn from_rows(field: &Arc<AlgebraicField>, rows: &[AlgebraicVector]) -> Result<Self, AlgebraError> {
        let dims = rows.len();
        for row in rows {
            field.ensure_same(row.field())?;
            if row.dimension() != dims {
                return Err(AlgebraError::DimensionMismatch {
                    expected: dims,
                    found: row.dimension(),
                });
            }
        }
        let entries = DenseMatrix::from_rows(rows.iter().map(|row| row.components().to_vec()).collect())?;
        Ok(Self {
            field: Arc::clone(field),
            entries,
        })
    }

    /// The field of every entry.
    #[must_use]
    pub fn field(&self) -> &Arc<AlgebraicField> {
        &self.field
    }

    /// Number of rows, equal to the number of columns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.entries.num_rows()
    }

    /// Entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&AlgebraicNumber, AlgebraError> {
        self.entries
            .get(row, col)
            .ok_or_else(|| self.out_of_range(row.max(col)))
    }

    /// Column `col` as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] for a bad index.
    pub fn column(&self, col: usize) -> Result<AlgebraicVector, AlgebraError> {
        if col >= self.dimension() {
            return Err(self.out_of_range(col));
        }
        Ok(AlgebraicVector::from_parts(Arc::clone(&self.field), self.entries.col(col)))
    }

    /// Row `row` as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::IndexOutOfRange`] for a bad index.
    pub fn row(&self, row: usize) -> Result<AlgebraicVector, AlgebraError> {
        if row >= self.dimension() {
            return Err(self.out_of_range(row));
        }
        Ok(AlgebraicVector::from_parts(
            Arc::clone(&self.field),
            self.entries.row(row).to_vec(),
        ))
    }

    /// `M · v` for a column vector `v`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if `v` does not fit.
    pub fn times_column(&self, v: &AlgebraicVector) -> Result<AlgebraicVector, AlgebraError> {
        self.field.ensure_same(v.field())?;
        self.check_vector(v)?;
        let components = self.entries.mv(v.components())?;
        Ok(AlgebraicVector::from_parts(Arc::clone(&self.field), components))
    }

    /// `v · M` for a row vector `v`: component `j` is `v` dotted with column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if `v` does not fit.
    pub fn times_row(&self, v: &AlgebraicVector) -> Result<AlgebraicVector, AlgebraError> {
        self.field.ensure_same(v.field())?;
        self.check_vector(v)?;
        let components = self.entries.transpose().mv(v.components())?;
        Ok(AlgebraicVector::from_parts(Arc::clone(&self.field), components))
    }

    /// Matrix product `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] or
    /// [`AlgebraError::IncompatibleField`] if the matrices do not match.
    pub fn times(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        Ok(Self {
            field: Arc::clone(&self.field),
            entries: self.entries.mm(&rhs.entries)?,
        })
    }

    /// Matrix product spread across threads once the dimension reaches
    /// `config.parallel.parallel_threshold`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`times`](Self::times).
    pub fn times_parallel(&self, rhs: &Self, config: &FieldConfig) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        Ok(Self {
            field: Arc::clone(&self.field),
            entries: mm_with_config(&self.entries, &rhs.entries, &config.parallel)?,
        })
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            field: Arc::clone(&self.field),
            entries: self.entries.transpose(),
        }
    }

    /// The inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::SingularMatrix`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        Ok(Self {
            field: Arc::clone(&self.field),
            entries: self.entries.inverse()?,
        })
    }

    /// The determinant; one for the empty matrix.
    ///
    /// # Errors
    ///
    /// Propagates entry arithmetic failures, which cannot occur for a
    /// well-formed matrix.
    pub fn determinant(&self) -> Result<AlgebraicNumber, AlgebraError> {
        if self.dimension() == 0 {
            return Ok(self.field.one());
        }
        self.entries.determinant()
    }

    fn check_vector(&self, v: &AlgebraicVector) -> Result<(), AlgebraError> {
        if v.dimension() != self.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: v.dimension(),
            });
        }
        Ok(())
    }

    fn check_compatible(&self, rhs: &Self) -> Result<(), AlgebraError> {
        self.field.ensure_same(&rhs.field)?;
        if rhs.dimension() != self.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: rhs.dimension(),
            });
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> AlgebraError {
        AlgebraError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            order: self.dimension(),
        }
    }
}

impl fmt::Display for AlgebraicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.dimension() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let row: Vec<String> = self.entries.row(i).iter().map(ToString::to_string).collect();
            write!(f, "[{}]", row.join(", "))?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for AlgebraicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field.name(), self)
    }
}
