//! Free helper functions over matrices.

use crate::Real;
use crate::matrix::{Matrix, MatrixError};

/// Constructs an `n x n` identity matrix.
pub fn eye(n: usize) -> Result<Matrix, MatrixError> {
    let mut m = Matrix::new(n, n)?;
    for i in 0..n {
        *m.at_mut(i, i)? = 1.0;
    }
    Ok(m)
}

/// Swaps rows `i` and `j` of `input` in place.
pub fn swap_rows(input: &mut Matrix, i: usize, j: usize) -> Result<(), MatrixError> {
    let rows = input.n_rows();
    if i >= rows || j >= rows {
        return Err(MatrixError::InvalidIndex {
            row: i.max(j),
            col: 0,
            rows,
            cols: input.n_cols(),
        });
    }

    if i == j {
        return Ok(());
    }

    for col in 0..input.n_cols() {
        let tmp = input.at(i, col)?;
        *input.at_mut(i, col)? = input.at(j, col)?;
        *input.at_mut(j, col)? = tmp;
    }
    Ok(())
}

/// Elementwise multiplication of two equally shaped matrices.
pub fn mult_elem(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    zip_elem(lhs, rhs, |a, b| a * b)
}

/// Elementwise division of two equally shaped matrices.
///
/// Division by zero propagates `+/-inf` (or NaN for `0/0`) rather than
/// failing.
pub fn div_elem(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, MatrixError> {
    zip_elem(lhs, rhs, |a, b| a / b)
}

fn zip_elem(
    lhs: &Matrix,
    rhs: &Matrix,
    f: impl Fn(Real, Real) -> Real,
) -> Result<Matrix, MatrixError> {
    if lhs.n_rows() != rhs.n_rows() || lhs.n_cols() != rhs.n_cols() {
        return Err(MatrixError::ShapeMismatch {
            expected_rows: lhs.n_rows(),
            expected_cols: lhs.n_cols(),
            rows: rhs.n_rows(),
            cols: rhs.n_cols(),
        });
    }

    let mut result = lhs.clone();
    for (out, rhs) in result.iter_mut().zip(rhs.iter()) {
        *out = f(*out, *rhs);
    }
    Ok(result)
}
