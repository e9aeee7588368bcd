//! Direct solvers for the square linear systems produced by the simplex
//! driver (`B dx = column` and `B^T v = e_i`).

pub mod gauss;
pub mod lu;

use derive_more::{Display, Error};

pub use gauss::solve_gauss;
pub use lu::{LuFactors, lu_factor};

/// Errors raised by the linear solvers and the simplex driver.
#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
pub enum SolveError {
    #[display("cannot solve non-square system ({rows}x{cols})")]
    NonSquare { rows: usize, cols: usize },

    #[display("dimension mismatch: {detail}")]
    DimensionMismatch { detail: String },

    #[display("primal and dual infeasible initial basis")]
    InfeasibleStart,
}
