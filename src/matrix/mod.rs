//! Dense matrix kernel used by the linear solvers and the simplex driver.
//!
//! Matrices are rectangular arrays of [`Real`] values stored row-major in a
//! single contiguous buffer. The kernel provides:
//! - Elementwise and matrix arithmetic through the standard operators.
//! - Slicing and sub-block updates driven by [`Range`] selectors.
//! - Reductions and row-/column-wise extrema with argmin/argmax indices.
//! - Three traversal orders (all elements, along a row, down a column).
//!
//! The kernel itself compares floating-point values exactly; all
//! epsilon-based decisions live in the simplex driver.

mod error;
mod functions;
mod iter;
mod ops;
mod range;

pub use error::MatrixError;
pub use functions::{div_elem, eye, mult_elem, swap_rows};
pub use range::Range;

use std::fmt;

use crate::Real;

/// A dense row-major matrix of [`Real`] values.
///
/// Dimensions are strictly positive and immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a `rows` x `cols` matrix filled with `value`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidShape`] when either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: Real) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Creates a matrix from a list of equally sized rows.
    pub fn from_rows(rows: Vec<Vec<Real>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut result = Self::new(n_rows, n_cols)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::ShapeMismatch {
                    expected_rows: 1,
                    expected_cols: n_cols,
                    rows: 1,
                    cols: row.len(),
                });
            }
            result.data[r * n_cols..(r + 1) * n_cols].copy_from_slice(&row);
        }
        Ok(result)
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Reads the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidIndex`] when either index is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<Real, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Mutable access to the element at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Real, MatrixError> {
        self.check_index(row, col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::InvalidIndex {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn min(&self) -> Real {
        self.data.iter().copied().fold(self.data[0], Real::min)
    }

    pub fn max(&self) -> Real {
        self.data.iter().copied().fold(self.data[0], Real::max)
    }

    pub fn sum(&self) -> Real {
        self.data.iter().sum()
    }

    /// Per-row minima as a `rows x 1` column, with the column index of the
    /// first occurrence of each minimum.
    pub fn row_min(&self) -> (Matrix, Vec<usize>) {
        self.row_extrema(|candidate, best| candidate < best)
    }

    /// Per-row maxima as a `rows x 1` column, with the column index of the
    /// first occurrence of each maximum.
    pub fn row_max(&self) -> (Matrix, Vec<usize>) {
        self.row_extrema(|candidate, best| candidate > best)
    }

    /// Per-column minima as a `1 x cols` row, with the row index of the
    /// first occurrence of each minimum.
    pub fn col_min(&self) -> (Matrix, Vec<usize>) {
        self.col_extrema(|candidate, best| candidate < best)
    }

    /// Per-column maxima as a `1 x cols` row, with the row index of the
    /// first occurrence of each maximum.
    pub fn col_max(&self) -> (Matrix, Vec<usize>) {
        self.col_extrema(|candidate, best| candidate > best)
    }

    fn row_extrema(&self, better: impl Fn(Real, Real) -> bool) -> (Matrix, Vec<usize>) {
        let mut values = Matrix {
            rows: self.rows,
            cols: 1,
            data: vec![0.0; self.rows],
        };
        let mut indices = vec![0; self.rows];

        for (r, row) in self.iter_rows().enumerate() {
            let mut best = row[0];
            let mut best_col = 0;
            for (c, &elem) in row.iter().enumerate().skip(1) {
                if better(elem, best) {
                    best = elem;
                    best_col = c;
                }
            }
            values.data[r] = best;
            indices[r] = best_col;
        }

        (values, indices)
    }

    fn col_extrema(&self, better: impl Fn(Real, Real) -> bool) -> (Matrix, Vec<usize>) {
        let mut values = Matrix {
            rows: 1,
            cols: self.cols,
            data: self.data[..self.cols].to_vec(),
        };
        let mut indices = vec![0; self.cols];

        for (r, row) in self.iter_rows().enumerate().skip(1) {
            for (c, &elem) in row.iter().enumerate() {
                if better(elem, values.data[c]) {
                    values.data[c] = elem;
                    indices[c] = r;
                }
            }
        }

        (values, indices)
    }

    /// Returns a new matrix holding the transpose.
    pub fn make_transpose(&self) -> Matrix {
        let mut result = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for r in 0..self.rows {
            for c in 0..self.cols {
                result.data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        result
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> Matrix {
        let mut result = self.clone();
        for elem in &mut result.data {
            *elem = elem.abs();
        }
        result
    }

    /// Returns a new matrix containing the selected rows x columns in their
    /// original order. An all-range selects the whole axis.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidIndex`] when a range bound exceeds the axis.
    pub fn slice(&self, rows: Range, cols: Range) -> Result<Matrix, MatrixError> {
        if rows.is_all() && cols.is_all() {
            return Ok(self.clone());
        }

        let (row_start, row_end) = rows.resolve(self.rows)?;
        let (col_start, col_end) = cols.resolve(self.cols)?;

        let mut result = Matrix::new(row_end - row_start + 1, col_end - col_start + 1)?;
        for r in row_start..=row_end {
            for c in col_start..=col_end {
                result.data[(r - row_start) * result.cols + (c - col_start)] =
                    self.data[r * self.cols + c];
            }
        }
        Ok(result)
    }

    /// Overwrites the selected sub-block with `src`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] when the sub-block shape differs from
    /// `src`, [`MatrixError::InvalidIndex`] when a range bound exceeds the
    /// axis.
    pub fn update(&mut self, rows: Range, cols: Range, src: &Matrix) -> Result<(), MatrixError> {
        let (row_start, row_end) = rows.resolve(self.rows)?;
        let (col_start, col_end) = cols.resolve(self.cols)?;

        let expected_rows = row_end - row_start + 1;
        let expected_cols = col_end - col_start + 1;
        if src.rows != expected_rows || src.cols != expected_cols {
            return Err(MatrixError::ShapeMismatch {
                expected_rows,
                expected_cols,
                rows: src.rows,
                cols: src.cols,
            });
        }

        for r in 0..expected_rows {
            for c in 0..expected_cols {
                self.data[(row_start + r) * self.cols + col_start + c] =
                    src.data[r * src.cols + c];
            }
        }
        Ok(())
    }

    /// Elementwise `self < x` as a 1.0/0.0 mask of the same shape.
    pub fn lt_scalar(&self, x: Real) -> Matrix {
        self.mask(|elem| elem < x)
    }

    /// Elementwise `self > x` as a 1.0/0.0 mask of the same shape.
    pub fn gt_scalar(&self, x: Real) -> Matrix {
        self.mask(|elem| elem > x)
    }

    fn mask(&self, predicate: impl Fn(Real) -> bool) -> Matrix {
        let mut result = self.clone();
        for elem in &mut result.data {
            *elem = if predicate(*elem) { 1.0 } else { 0.0 };
        }
        result
    }

    /// Adds one to every element.
    pub fn increment(&mut self) {
        for elem in &mut self.data {
            *elem += 1.0;
        }
    }

    /// Subtracts one from every element.
    pub fn decrement(&mut self) {
        for elem in &mut self.data {
            *elem -= 1.0;
        }
    }

    pub(crate) fn data(&self) -> &[Real] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Real] {
        &mut self.data
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = Real;

    fn index(&self, (row, col): (usize, usize)) -> &Real {
        if row >= self.rows || col >= self.cols {
            panic!("cannot access ({row}, {col}) of a {}x{} matrix", self.rows, self.cols);
        }
        &self.data[row * self.cols + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Real {
        if row >= self.rows || col >= self.cols {
            panic!("cannot access ({row}, {col}) of a {}x{} matrix", self.rows, self.cols);
        }
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        write!(f, "[")?;
        for (n_elem, elem) in self.data.iter().enumerate() {
            write!(f, "{elem:7.4}")?;
            if n_elem + 1 != self.data.len() {
                if (n_elem + 1) % self.cols == 0 {
                    write!(f, "\n  ")?;
                } else {
                    write!(f, ",")?;
                }
            }
        }
        writeln!(f, "]")
    }
}
