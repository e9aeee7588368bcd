//! Arithmetic operators for [`Matrix`].
//!
//! Free operators return newly owned matrices so expressions compose
//! (`c = a + b * 2.0`); the in-place `*=`/`+=` forms are kept for hot loops.
//! Matrix multiplication always accumulates into a fresh buffer, so aliasing
//! of operand and result is safe.
//!
//! Structural misuse (shape mismatch, scalar division by zero) panics with
//! the corresponding [`MatrixError`](crate::matrix::MatrixError) text; the
//! fallible forms live on [`Matrix`] and in the free helper functions.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Real;
use crate::matrix::Matrix;

fn check_same_shape(lhs: &Matrix, rhs: &Matrix, verb: &str) {
    assert!(
        lhs.n_rows() == rhs.n_rows(),
        "Cannot {verb} matrices with different row count"
    );
    assert!(
        lhs.n_cols() == rhs.n_cols(),
        "Cannot {verb} matrices with different col count"
    );
}

fn mat_mul(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    assert!(
        lhs.n_cols() == rhs.n_rows(),
        "Cannot multiply dimensions {}x{} and {}x{}",
        lhs.n_rows(),
        lhs.n_cols(),
        rhs.n_rows(),
        rhs.n_cols()
    );

    // (r1 x c1).(r2 x c2) = r1 x c2
    let mut result = Matrix {
        rows: lhs.n_rows(),
        cols: rhs.n_cols(),
        data: vec![0.0; lhs.n_rows() * rhs.n_cols()],
    };

    for lhs_row in 0..lhs.n_rows() {
        for rhs_col in 0..rhs.n_cols() {
            // For this LHS row and RHS col, sum product the elements.
            let mut element = 0.0;
            for lhs_col in 0..lhs.n_cols() {
                element += lhs.data()[lhs_row * lhs.n_cols() + lhs_col]
                    * rhs.data()[lhs_col * rhs.n_cols() + rhs_col];
            }
            result.data[lhs_row * result.cols + rhs_col] = element;
        }
    }

    result
}

// Matrix + Matrix

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        check_same_shape(self, rhs, "add");
        for (lhs, rhs) in self.data_mut().iter_mut().zip(rhs.data()) {
            *lhs += rhs;
        }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: Matrix) -> Matrix {
        self += &rhs;
        self
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

// Matrix - Matrix

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        check_same_shape(self, rhs, "subtract");
        for (lhs, rhs) in self.data_mut().iter_mut().zip(rhs.data()) {
            *lhs -= rhs;
        }
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: Matrix) -> Matrix {
        self -= &rhs;
        self
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

// Matrix * Matrix

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        mat_mul(&self, &rhs)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        mat_mul(self, rhs)
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        *self = mat_mul(self, rhs);
    }
}

// Matrix op scalar

impl AddAssign<Real> for Matrix {
    fn add_assign(&mut self, x: Real) {
        for elem in self.data_mut() {
            *elem += x;
        }
    }
}

impl SubAssign<Real> for Matrix {
    fn sub_assign(&mut self, x: Real) {
        for elem in self.data_mut() {
            *elem -= x;
        }
    }
}

impl MulAssign<Real> for Matrix {
    fn mul_assign(&mut self, x: Real) {
        for elem in self.data_mut() {
            *elem *= x;
        }
    }
}

impl DivAssign<Real> for Matrix {
    fn div_assign(&mut self, x: Real) {
        assert!(x != 0.0, "Scalar division by zero");
        for elem in self.data_mut() {
            *elem /= x;
        }
    }
}

impl Add<Real> for Matrix {
    type Output = Matrix;

    fn add(mut self, x: Real) -> Matrix {
        self += x;
        self
    }
}

impl Sub<Real> for Matrix {
    type Output = Matrix;

    fn sub(mut self, x: Real) -> Matrix {
        self -= x;
        self
    }
}

impl Mul<Real> for Matrix {
    type Output = Matrix;

    fn mul(mut self, x: Real) -> Matrix {
        self *= x;
        self
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;

    fn mul(self, x: Real) -> Matrix {
        self.clone() * x
    }
}

impl Div<Real> for Matrix {
    type Output = Matrix;

    fn div(mut self, x: Real) -> Matrix {
        self /= x;
        self
    }
}

// Scalar * Matrix

impl Mul<Matrix> for Real {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for Real {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.clone() * self
    }
}

// Unary

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.clone() * -1.0
    }
}
