//! Primal revised simplex iteration.
//!
//! Implementation follows Linear Programming (Vanderbei, 2014) p92.

use tracing::{debug, warn};

use crate::linalg::solve_gauss;
use crate::matrix::{Matrix, Range};
use crate::simplex::state::SolveState;
use crate::simplex::{Params, choose_entering, choose_leaving, log_iteration};
use crate::{Error, Status};

/// Iterates the primal algorithm on a primal-feasible starting basis.
pub(crate) fn solve_primal(state: &mut SolveState, params: &Params) -> Result<Status, Error> {
    while state.n_iter < params.max_iter {
        log_iteration(state);

        // 1. Check optimality / pick the entering variable: the most
        //    negative reduced cost.
        let Some(entering) = choose_entering(&state.z_non_basic, params.eps2) else {
            return Ok(Status::Optimal);
        };

        // 2. FTRAN: dx = inv(B) * N * ej
        let dx = solve_gauss(
            &state.B,
            &state.N.slice(Range::all(), Range::single(entering))?,
        )?;
        debug!("dx = {dx}");

        // 3. Ratio test for the leaving variable.
        let Some(leaving) = choose_leaving(&state.x_basic, &dx, params.eps1) else {
            warn!("Model is unbounded");
            return Ok(Status::Unbounded);
        };

        debug!("entering: {entering} leaving: {leaving}");

        // 4. Primal step length.
        let t = state.x_basic.at(leaving, 0)? / dx.at(leaving, 0)?;

        // 5. BTRAN: dz = -1 * transpose(inv(B) * N) * ei
        let mut ei = Matrix::new(state.B.n_rows(), 1)?;
        *ei.at_mut(leaving, 0)? = 1.0;
        let v = solve_gauss(&state.B.make_transpose(), &ei)?;
        let dz = -1.0 * state.N.make_transpose() * v;
        debug!("dz = {dz}");

        // 6. Dual step length.
        let s = state.z_non_basic.at(entering, 0)? / dz.at(entering, 0)?;

        // 7. Update the primal and dual solutions.
        state.x_basic = &state.x_basic - &(t * dx);
        *state.x_basic.at_mut(leaving, 0)? = t;

        state.z_non_basic = &state.z_non_basic - &(s * dz);
        *state.z_non_basic.at_mut(entering, 0)? = s;

        // 8. Exchange the entering and leaving columns.
        state.swap_basis(leaving, entering)?;

        state.n_iter += 1;
    }

    warn!("Iteration limit ({}) reached.", params.max_iter);
    Ok(Status::IterationLimit)
}
