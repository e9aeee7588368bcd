//! Per-solve state of the revised simplex driver.

use std::collections::BTreeMap;

use tracing::debug;

use crate::matrix::{Matrix, Range};
use crate::model::{Model, Relation, Sense};
use crate::{Error, Real, Solution};

/// A basis/non-basis record: the column of `A` it owns plus the flags of
/// the variable that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VarData {
    pub index: usize,
    pub slack: bool,
    pub artificial: bool,
}

/// Everything needed to iterate the revised simplex algorithm.
///
/// Invariants between iterations: `basics` and `non_basics` partition the
/// columns of `A`; `B` and `N` mirror the column selection of the two lists
/// in order; `x_basic` holds the current basic values and `z_non_basic` the
/// reduced costs of the non-basic columns under the internal maximisation
/// convention.
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub(crate) struct SolveState {
    pub A: Matrix,
    pub c: Matrix,
    pub B: Matrix,
    pub N: Matrix,
    pub x_basic: Matrix,
    pub z_non_basic: Matrix,
    pub basics: Vec<VarData>,
    pub non_basics: Vec<VarData>,
    pub n_iter: usize,
}

impl SolveState {
    /// Builds the initial state from a pre-processed model.
    ///
    /// Each `>=` row is negated into `<=` form, then every row receives one
    /// added column: a `+1` slack for inequalities, or a `+1` artificial for
    /// any equality row that reaches the driver directly. The added columns
    /// form the starting basis, so `x_basic = b` and `z_non_basic = -c`.
    #[allow(non_snake_case)]
    pub fn init(model: &Model) -> Result<Self, Error> {
        let n = model.n_variables();
        let m = model.n_constraints();

        let mut A = Matrix::new(m, n + m)?;
        let mut b = Matrix::new(m, 1)?;
        let mut c = Matrix::new(n + m, 1)?;

        // The driver maximises internally.
        let sense_sign = match model.sense() {
            Sense::Max => 1.0,
            Sense::Min => -1.0,
        };
        for (j, variable) in model.variables().enumerate() {
            *c.at_mut(j, 0)? = sense_sign * variable.cost();
        }

        let mut basics = Vec::with_capacity(m);
        for (i, constraint) in model.constraints().enumerate() {
            let (sign, artificial) = match constraint.relation() {
                Relation::Less => (1.0, false),
                Relation::Greater => (-1.0, false),
                Relation::Equal => (if constraint.rhs() < 0.0 { -1.0 } else { 1.0 }, true),
            };

            for (j, variable) in model.variables().enumerate() {
                let coeff = constraint.coefficient(variable.name());
                if coeff != 0.0 {
                    *A.at_mut(i, j)? = sign * coeff;
                }
            }
            *b.at_mut(i, 0)? = sign * constraint.rhs();

            *A.at_mut(i, n + i)? = 1.0;
            basics.push(VarData {
                index: n + i,
                slack: !artificial,
                artificial,
            });
        }

        let B = A.slice(Range::all(), Range::bounded(n, n + m - 1)?)?;
        let N = A.slice(Range::all(), Range::bounded(0, n - 1)?)?;

        let x_basic = b;
        let mut z_non_basic = Matrix::new(n, 1)?;
        let mut non_basics = Vec::with_capacity(n);
        for j in 0..n {
            *z_non_basic.at_mut(j, 0)? = -c.at(j, 0)?;
            non_basics.push(VarData {
                index: j,
                slack: false,
                artificial: false,
            });
        }

        debug!("A = {A}");
        debug!("c = {c}");
        debug!("x_basic = {x_basic}");
        debug!("z_non_basic = {z_non_basic}");

        Ok(Self {
            A,
            c,
            B,
            N,
            x_basic,
            z_non_basic,
            basics,
            non_basics,
            n_iter: 0,
        })
    }

    /// The primal objective at the current iterate.
    pub fn primal_objective(&self) -> Real {
        let mut objective = 0.0;
        for (i, var_data) in self.basics.iter().enumerate() {
            objective += self.c[(var_data.index, 0)] * self.x_basic[(i, 0)];
        }
        objective
    }

    /// Exchanges the basis column at `basic_pos` with the non-basis column
    /// at `non_basic_pos`, refreshing `B` and `N` from `A`.
    pub fn swap_basis(&mut self, basic_pos: usize, non_basic_pos: usize) -> Result<(), Error> {
        let entering_col = self
            .A
            .slice(Range::all(), Range::single(self.non_basics[non_basic_pos].index))?;
        let leaving_col = self
            .A
            .slice(Range::all(), Range::single(self.basics[basic_pos].index))?;

        self.B
            .update(Range::all(), Range::single(basic_pos), &entering_col)?;
        self.N
            .update(Range::all(), Range::single(non_basic_pos), &leaving_col)?;

        let basic = self.basics[basic_pos];
        self.basics[basic_pos] = self.non_basics[non_basic_pos];
        self.non_basics[non_basic_pos] = basic;
        Ok(())
    }

    /// Extracts the user-visible solution, negating the objective back when
    /// the model sense is MIN.
    pub fn extract_solution(&self, model: &Model) -> Result<Solution, Error> {
        let primal = self.primal_objective();
        let objective = match model.sense() {
            Sense::Min => -primal,
            Sense::Max => primal,
        };

        let mut variables = BTreeMap::new();
        for (i, var_data) in self.basics.iter().enumerate() {
            if !var_data.slack && !var_data.artificial {
                if let Some(variable) = model.variable_at(var_data.index) {
                    variables.insert(variable.name().to_string(), self.x_basic.at(i, 0)?);
                }
            }
        }
        for var_data in &self.non_basics {
            if !var_data.slack && !var_data.artificial {
                if let Some(variable) = model.variable_at(var_data.index) {
                    variables.insert(variable.name().to_string(), 0.0);
                }
            }
        }

        Ok(Solution {
            objective,
            variables,
        })
    }
}
