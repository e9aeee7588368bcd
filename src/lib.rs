//! A linear programming solver built around the revised simplex method.
//!
//! The crate solves problems of the form
//!
//! ```text
//! optimise c^T x
//! s.t.     A x {<=, =, >=} b
//!          l <= x <= u
//! ```
//!
//! by rewriting them into an all-inequality standard form and iterating the
//! revised simplex algorithm with automatic primal/dual phase selection. All
//! linear algebra runs on the crate's own dense row-major kernel.
//!
//! Models are built programmatically through [`model::Model`] or read from
//! MPS files via [`interface::mps`]; [`simplex::solve`] drives the solve.

use std::collections::BTreeMap;
use std::fmt;

use derive_more::{Display, Error, From};

pub mod interface;
pub mod linalg;
pub mod matrix;
pub mod model;
pub mod simplex;

#[cfg(test)]
pub mod tests;

/// The element type used throughout the solver.
pub type Real = f64;

/// Status codes for the simplex driver.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Status {
    #[default]
    /// The solver is still running.
    InProgress,
    /// An optimal solution was found.
    Optimal,
    /// The problem is unbounded.
    Unbounded,
    /// The solver stopped due to the iteration limit.
    IterationLimit,
}

/// The optimal point of a solved model, naming only user-visible variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    pub objective: Real,
    pub variables: BTreeMap<String, Real>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Objective = {}", self.objective)?;
        for (name, value) in &self.variables {
            write!(f, "\n{name} = {value}")?;
        }
        Ok(())
    }
}

/// Top-level error type; every layer's failure bubbles up through this.
#[derive(Debug, Clone, Display, Error, From, PartialEq)]
pub enum Error {
    #[display("{_0}")]
    Matrix(matrix::MatrixError),

    #[display("{_0}")]
    Solve(linalg::SolveError),

    #[display("{_0}")]
    Model(model::ModelError),

    #[display("{_0}")]
    Mps(interface::mps::MpsError),
}
