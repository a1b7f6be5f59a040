//! Dense matrix implementation for small exact matrices.
//!
//! The matrices that appear in field arithmetic are tiny (at most a few
//! dozen rows: one per basis element of a field, or one per coordinate of
//! a vector), so a row-major `Vec` with plain Gauss-Jordan elimination is
//! the whole story.

use std::ops::{Index, IndexMut};

use rayon::prelude::*;

use crate::{LinalgError, Scalar};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Scalar> DenseMatrix<R> {
    /// Creates a `num_rows × num_cols` matrix with every entry equal to `value`.
    #[must_use]
    pub fn filled(num_rows: usize, num_cols: usize, value: &R) -> Self {
        Self {
            data: vec![value.clone(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(LinalgError::DimensionMismatch {
                expected: num_cols,
                found: bad.len(),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an `n × n` identity matrix in the field of `template`.
    #[must_use]
    pub fn identity_like(n: usize, template: &R) -> Self {
        let mut m = Self::filled(n, n, &template.zero_like());
        for i in 0..n {
            m[(i, i)] = template.one_like();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Fails if `x` has the wrong length, if the matrix has no columns,
    /// or if entry arithmetic fails.
    pub fn mv(&self, x: &[R]) -> Result<Vec<R>, R::Error> {
        self.check_inner(x.len())?;
        (0..self.num_rows)
            .map(|row| dot(self.row(row).iter(), x.iter()))
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    ///
    /// Fails if the inner dimensions differ or are zero, or if entry
    /// arithmetic fails.
    pub fn mm(&self, other: &Self) -> Result<Self, R::Error> {
        self.check_inner(other.num_rows)?;
        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                data.push(self.product_entry(other, i, j)?);
            }
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    ///
    /// # Errors
    ///
    /// Fails if entry arithmetic fails.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) -> Result<(), R::Error> {
        for k in 0..self.num_cols {
            let val = self[(source, k)].try_mul(scale)?;
            let sum = self[(target, k)].try_add(&val)?;
            self[(target, k)] = sum;
        }
        Ok(())
    }

    /// Scales a row by a scalar.
    ///
    /// # Errors
    ///
    /// Fails if entry arithmetic fails.
    pub fn scale_row(&mut self, row: usize, scale: &R) -> Result<(), R::Error> {
        for k in 0..self.num_cols {
            let val = self[(row, k)].try_mul(scale)?;
            self[(row, k)] = val;
        }
        Ok(())
    }

    /// Gauss-Jordan elimination of `self`, applying every row operation to `rhs` too.
    ///
    /// On success `self` is the identity and `rhs` holds `self⁻¹ · rhs`.
    /// Pivots are the first nonzero entry in each column; exact arithmetic
    /// needs no magnitude pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if some column has no pivot, and
    /// [`LinalgError::DimensionMismatch`] if `self` is not square or `rhs`
    /// has a different number of rows.
    pub fn gauss_jordan(&mut self, rhs: &mut Self) -> Result<(), R::Error> {
        let n = self.num_rows;
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                found: self.num_cols,
            }
            .into());
        }
        if rhs.num_rows != n {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                found: rhs.num_rows,
            }
            .into());
        }

        for col in 0..n {
            let pivot = (col..n)
                .find(|&row| !self[(row, col)].is_zero())
                .ok_or(LinalgError::Singular)?;
            self.swap_rows(col, pivot);
            rhs.swap_rows(col, pivot);

            let inv = self[(col, col)].try_recip()?;
            self.scale_row(col, &inv)?;
            rhs.scale_row(col, &inv)?;

            for row in 0..n {
                if row == col || self[(row, col)].is_zero() {
                    continue;
                }
                let factor = self[(row, col)].negated();
                self.add_scaled_row(row, col, &factor)?;
                rhs.add_scaled_row(row, col, &factor)?;
            }
        }

        log::trace!("gauss-jordan reduced a {n}x{n} system with {} right-hand columns", rhs.num_cols);
        Ok(())
    }

    /// Computes the inverse (for square matrices).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] for a singular matrix and
    /// [`LinalgError::DimensionMismatch`] for a non-square one.
    pub fn inverse(&self) -> Result<Self, R::Error> {
        let Some(template) = self.data.first() else {
            return Ok(self.clone());
        };
        let mut work = self.clone();
        let mut inv = Self::identity_like(self.num_rows, template);
        work.gauss_jordan(&mut inv)?;
        Ok(inv)
    }

    /// Computes the determinant (for square matrices).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] for a 0×0 matrix and
    /// [`LinalgError::DimensionMismatch`] for a non-square one.
    pub fn determinant(&self) -> Result<R, R::Error> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                found: self.num_cols,
            }
            .into());
        }
        let n = self.num_rows;
        let Some(template) = self.data.first() else {
            return Err(LinalgError::Empty.into());
        };

        let mut m = self.clone();
        let mut det = template.one_like();
        let mut negate = false;

        for col in 0..n {
            let Some(pivot_row) = (col..n).find(|&row| !m[(row, col)].is_zero()) else {
                return Ok(template.zero_like());
            };
            if pivot_row != col {
                m.swap_rows(col, pivot_row);
                negate = !negate;
            }

            let pivot = m[(col, col)].clone();
            det = det.try_mul(&pivot)?;
            let inv = pivot.try_recip()?;

            // Eliminate below
            for row in col + 1..n {
                if !m[(row, col)].is_zero() {
                    let factor = m[(row, col)].try_mul(&inv)?.negated();
                    m.add_scaled_row(row, col, &factor)?;
                }
            }
        }

        Ok(if negate { det.negated() } else { det })
    }

    fn check_inner(&self, found: usize) -> Result<(), LinalgError> {
        if found != self.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found,
            });
        }
        if self.num_cols == 0 {
            return Err(LinalgError::Empty);
        }
        Ok(())
    }

    fn product_entry(&self, other: &Self, i: usize, j: usize) -> Result<R, R::Error> {
        dot(self.row(i).iter(), (0..other.num_rows).map(|k| &other[(k, j)]))
    }
}

impl<R> DenseMatrix<R>
where
    R: Scalar + Send + Sync,
    R::Error: Send,
{
    /// Matrix-matrix multiply (parallel over rows): C = A * B.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DenseMatrix::mm`].
    pub fn mm_parallel(&self, other: &Self) -> Result<Self, R::Error> {
        self.check_inner(other.num_rows)?;

        let rows: Vec<Vec<R>> = (0..self.num_rows)
            .into_par_iter()
            .map(|i| {
                (0..other.num_cols)
                    .map(|j| self.product_entry(other, i, j))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }
}

/// Sum of pairwise products of two non-empty sequences.
fn dot<'a, R, A, B>(mut lhs: A, mut rhs: B) -> Result<R, R::Error>
where
    R: Scalar + 'a,
    A: Iterator<Item = &'a R>,
    B: Iterator<Item = &'a R>,
{
    let (Some(a), Some(b)) = (lhs.next(), rhs.next()) else {
        return Err(LinalgError::Empty.into());
    };
    let mut sum = a.try_mul(b)?;
    for (a, b) in lhs.zip(rhs) {
        sum = sum.try_add(&a.try_mul(b)?)?;
    }
    Ok(sum)
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
