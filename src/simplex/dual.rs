//! Dual revised simplex iteration, the mirror image of the primal form.

use tracing::{debug, warn};

use crate::linalg::solve_gauss;
use crate::matrix::{Matrix, Range};
use crate::simplex::state::SolveState;
use crate::simplex::{Params, choose_entering, choose_leaving, log_iteration};
use crate::{Error, Status};

/// Iterates the dual algorithm on a dual-feasible starting basis.
pub(crate) fn solve_dual(state: &mut SolveState, params: &Params) -> Result<Status, Error> {
    while state.n_iter < params.max_iter {
        log_iteration(state);

        // 1. Check optimality / pick the entering variable: the most
        //    negative basic value.
        let Some(entering) = choose_entering(&state.x_basic, params.eps2) else {
            return Ok(Status::Optimal);
        };

        // 2. BTRAN: dz = -1 * transpose(inv(B) * N) * ei
        let mut ei = Matrix::new(state.B.n_rows(), 1)?;
        *ei.at_mut(entering, 0)? = 1.0;
        let v = solve_gauss(&state.B.make_transpose(), &ei)?;
        let dz = -1.0 * state.N.make_transpose() * v;
        debug!("dz = {dz}");

        // 3. Ratio test over the reduced costs for the leaving variable.
        let Some(leaving) = choose_leaving(&state.z_non_basic, &dz, params.eps1) else {
            warn!("Model is unbounded");
            return Ok(Status::Unbounded);
        };

        debug!("entering: {entering} leaving: {leaving}");

        // 4. Dual step length.
        let s = state.z_non_basic.at(leaving, 0)? / dz.at(leaving, 0)?;

        // 5. FTRAN: dx = inv(B) * N * ej
        let dx = solve_gauss(
            &state.B,
            &state.N.slice(Range::all(), Range::single(leaving))?,
        )?;
        debug!("dx = {dx}");

        // 6. Primal step length.
        let t = state.x_basic.at(entering, 0)? / dx.at(entering, 0)?;

        // 7. Update the primal and dual solutions.
        state.x_basic = &state.x_basic - &(t * dx);
        *state.x_basic.at_mut(entering, 0)? = t;

        state.z_non_basic = &state.z_non_basic - &(s * dz);
        *state.z_non_basic.at_mut(leaving, 0)? = s;

        // 8. Exchange the entering and leaving columns.
        state.swap_basis(entering, leaving)?;

        state.n_iter += 1;
    }

    warn!("Iteration limit ({}) reached.", params.max_iter);
    Ok(Status::IterationLimit)
}
