//! The revised simplex driver.
//!
//! [`solve`] runs the pre-processor, assembles a slack-seeded starting basis
//! and then picks a phase: a primal-feasible basis (`min(x_B) >= eps2`) runs
//! the primal iteration, a dual-feasible one (`min(z_N) >= eps2`) the dual
//! iteration. A basis that is neither fails with
//! [`SolveError::InfeasibleStart`]; there is no built-in phase one.
//!
//! Each iteration delegates its `inv(B) * v` computations (FTRAN/BTRAN) to
//! the Gaussian solver and keeps the basis/non-basis partition consistent
//! through ordered column swaps on `B` and `N`.

mod dual;
mod primal;
pub mod preprocess;
mod state;

use tracing::{debug, info};

use crate::linalg::SolveError;
use crate::matrix::Matrix;
use crate::model::Model;
use crate::simplex::state::SolveState;
use crate::{Error, Real, Solution, Status};

pub use preprocess::pre_process;

/// Stopping criteria and tolerances for the simplex iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Stopping criteria - max simplex iterations.
    pub max_iter: usize,
    /// Minimum pivot magnitude in the ratio test.
    pub eps1: Real,
    /// Protection from division by zero.
    pub eps2: Real,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_iter: 10_000,
            eps1: 1e-8,
            eps2: 1e-12,
        }
    }
}

/// The outcome of a solve: a status code plus the solution when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub status: Status,
    pub solution: Option<Solution>,
}

/// Solves `model` with the default [`Params`].
///
/// The model is mutated in place by the pre-processor.
pub fn solve(model: &mut Model) -> Result<SolverResult, Error> {
    solve_with_params(model, &Params::default())
}

/// Solves `model` with explicit [`Params`].
///
/// # Errors
///
/// [`SolveError::InfeasibleStart`] when the starting basis is neither primal
/// nor dual feasible, plus any structural error bubbling up from the model
/// or the kernel.
pub fn solve_with_params(model: &mut Model, params: &Params) -> Result<SolverResult, Error> {
    model.validate()?;
    pre_process(model)?;

    let mut state = SolveState::init(model)?;

    let primal_feasible = state.x_basic.min() >= params.eps2;
    let dual_feasible = state.z_non_basic.min() >= params.eps2;

    let status = if primal_feasible {
        info!("Starting basis is primal feasible, using primal simplex algorithm");
        primal::solve_primal(&mut state, params)?
    } else if dual_feasible {
        info!("Starting basis is dual feasible, using dual simplex algorithm");
        dual::solve_dual(&mut state, params)?
    } else {
        // Would need a phase-1 algorithm to handle this.
        return Err(SolveError::InfeasibleStart.into());
    };

    let solution = match status {
        Status::Optimal => Some(state.extract_solution(model)?),
        _ => None,
    };

    if let Some(solution) = &solution {
        info!(
            "Objective = {:.2} ({} iterations)",
            solution.objective, state.n_iter
        );
    }

    Ok(SolverResult { status, solution })
}

/// Picks the most negative entry of a column, if any falls below `-eps2`.
/// Ties keep the lowest index.
fn choose_entering(column: &Matrix, eps2: Real) -> Option<usize> {
    let mut entering = None;
    let mut current_min = -eps2;

    for (idx, &value) in column.iter().enumerate() {
        if value < current_min {
            current_min = value;
            entering = Some(idx);
        }
    }

    entering
}

/// Calculates `argmin(num / denom)` over entries with `denom > eps1`.
/// Ties keep the lowest index.
fn choose_leaving(num: &Matrix, denom: &Matrix, eps1: Real) -> Option<usize> {
    let mut leaving = None;
    let mut min_ratio = Real::MAX;

    for (idx, (&num, &denom)) in num.iter().zip(denom.iter()).enumerate() {
        if denom > eps1 {
            let ratio = num / denom;
            if ratio < min_ratio {
                min_ratio = ratio;
                leaving = Some(idx);
            }
        }
    }

    leaving
}

fn log_iteration(state: &SolveState) {
    debug!("It {:8} Obj {:14.6}", state.n_iter, state.primal_objective());
}
