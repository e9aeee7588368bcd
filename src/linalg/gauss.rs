//! Gaussian elimination with partial pivoting.

use crate::Error;
use crate::linalg::SolveError;
use crate::matrix::{Matrix, Range, swap_rows};

/// Solves the square system `Ax = b` by Gaussian elimination with partial
/// pivoting, returning `x` as an `n x 1` column.
///
/// Pivots below working precision are not guarded against; the simplex
/// driver keeps its bases non-singular by construction.
///
/// # Errors
///
/// [`SolveError::NonSquare`] when `A` is not square,
/// [`SolveError::DimensionMismatch`] when `b` is not an `A.n_rows() x 1`
/// column.
#[allow(non_snake_case)]
pub fn solve_gauss(A: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    let m = A.n_rows();
    let n = A.n_cols();

    if m != n {
        return Err(SolveError::NonSquare { rows: m, cols: n }.into());
    }

    if b.n_rows() != m {
        return Err(SolveError::DimensionMismatch {
            detail: "inputs A and b must have the same number of rows".to_string(),
        }
        .into());
    }

    if b.n_cols() != 1 {
        return Err(SolveError::DimensionMismatch {
            detail: "input b must have one column".to_string(),
        }
        .into());
    }

    // Form augmented matrix
    let mut aug = Matrix::new(m, n + 1)?;
    aug.update(Range::all(), Range::bounded(0, n - 1)?, A)?;
    aug.update(Range::all(), Range::single(n), b)?;

    // Forward elimination
    for k in 0..n.saturating_sub(1) {
        // Partial pivoting
        let (_, indices) = aug
            .slice(Range::bounded(k, n - 1)?, Range::single(k))?
            .abs()
            .col_max();
        let pivot_row = indices[0] + k;
        if pivot_row != k {
            swap_rows(&mut aug, k, pivot_row)?;
        }

        // Elimination
        for i in k + 1..n {
            let factor = aug.at(i, k)? / aug.at(k, k)?;
            let row_i = aug.slice(Range::single(i), Range::bounded(k, n)?)?;
            let row_k = aug.slice(Range::single(k), Range::bounded(k, n)?)?;
            aug.update(Range::single(i), Range::bounded(k, n)?, &(row_i - factor * row_k))?;
        }
    }

    // Back substitution
    let mut x = Matrix::new(n, 1)?;
    *x.at_mut(n - 1, 0)? = aug.at(n - 1, n)? / aug.at(n - 1, n - 1)?;

    for i in (0..n.saturating_sub(1)).rev() {
        let tail = (aug.slice(Range::single(i), Range::bounded(i + 1, n - 1)?)?
            * x.slice(Range::bounded(i + 1, n - 1)?, Range::single(0))?)
        .at(0, 0)?;
        *x.at_mut(i, 0)? = (aug.at(i, n)? - tail) / aug.at(i, i)?;
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    // Deterministic xorshift generator for residual checks.
    fn pseudo_random(state: &mut u64) -> f64 {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        (*state % 2000) as f64 / 100.0 - 10.0
    }

    #[test]
    fn one_by_one_system() {
        let a = Matrix::filled(1, 1, 4.0).unwrap();
        let b = Matrix::filled(1, 1, 8.0).unwrap();
        let x = solve_gauss(&a, &b).unwrap();
        assert_eq!(x.at(0, 0), Ok(2.0));
    }

    #[test]
    fn two_by_two_system() {
        // 2x + y = 5, x + 3y = 10
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0], vec![10.0]]).unwrap();

        let x = solve_gauss(&a, &b).unwrap();
        assert_close(x[(0, 0)], 1.0, 1e-12);
        assert_close(x[(1, 0)], 3.0, 1e-12);
    }

    #[test]
    fn three_by_three_system() {
        let a = Matrix::from_rows(vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![vec![8.0], vec![-11.0], vec![-3.0]]).unwrap();

        let x = solve_gauss(&a, &b).unwrap();
        assert_close(x[(0, 0)], 2.0, 1e-12);
        assert_close(x[(1, 0)], 3.0, 1e-12);
        assert_close(x[(2, 0)], -1.0, 1e-12);
    }

    #[test]
    fn zero_leading_pivot_is_handled_by_row_swap() {
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3.0], vec![4.0]]).unwrap();

        let x = solve_gauss(&a, &b).unwrap();
        assert_close(x[(0, 0)], 0.5, 1e-12);
        assert_close(x[(1, 0)], 3.0, 1e-12);
    }

    #[test]
    fn residual_stays_small_for_generated_systems() {
        let mut state = 0x2545F4914F6CDD1D;

        for n in [2_usize, 4, 8, 12] {
            let mut a = Matrix::new(n, n).unwrap();
            let mut b = Matrix::new(n, 1).unwrap();
            for r in 0..n {
                for c in 0..n {
                    a[(r, c)] = pseudo_random(&mut state);
                }
                // Diagonal dominance keeps the generated system non-singular.
                a[(r, r)] += 50.0;
                b[(r, 0)] = pseudo_random(&mut state);
            }

            let x = solve_gauss(&a, &b).unwrap();
            let residual = &(&a * &x) - &b;
            for elem in residual.iter() {
                assert!(elem.abs() < 1e-8, "residual {elem} too large for n = {n}");
            }
        }
    }

    #[test]
    fn rejects_non_square_matrix() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 1).unwrap();
        assert!(matches!(
            solve_gauss(&a, &b),
            Err(Error::Solve(SolveError::NonSquare { rows: 2, cols: 3 }))
        ));
    }

    #[test]
    fn rejects_mismatched_rhs() {
        let a = Matrix::new(2, 2).unwrap();

        let tall = Matrix::new(3, 1).unwrap();
        assert!(matches!(
            solve_gauss(&a, &tall),
            Err(Error::Solve(SolveError::DimensionMismatch { .. }))
        ));

        let wide = Matrix::new(2, 2).unwrap();
        assert!(matches!(
            solve_gauss(&a, &wide),
            Err(Error::Solve(SolveError::DimensionMismatch { .. }))
        ));
    }
}
