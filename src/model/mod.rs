//! The modelling layer: variables, constraints and the containing model.
//!
//! Collections are insertion-ordered and indexed by name; all iteration the
//! solver performs follows insertion order, which makes pivot selection (and
//! therefore the whole solve) deterministic for a given build sequence.

mod constraint;
mod variable;

pub use constraint::{Constraint, Relation};
pub use variable::Variable;

use std::fmt;

use derive_more::{Display, Error};
use indexmap::IndexMap;

/// Errors raised while building or validating a model.
#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
pub enum ModelError {
    #[display("duplicate variable name: {name}")]
    DuplicateVariable { name: String },

    #[display("duplicate constraint name: {name}")]
    DuplicateConstraint { name: String },

    #[display("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[display("unknown constraint: {name}")]
    UnknownConstraint { name: String },

    #[display("constraint {constraint} references unknown variable {variable}")]
    ForeignVariable { constraint: String, variable: String },
}

/// Objective sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Max,
    Min,
}

/// A linear program in its natural form.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    sense: Sense,
    objective_name: String,
    next_id: u64,
    variables: IndexMap<String, Variable>,
    constraints: IndexMap<String, Constraint>,
}

impl Model {
    pub fn new(sense: Sense, name: &str) -> Self {
        Self {
            name: name.to_string(),
            sense,
            objective_name: String::new(),
            next_id: 0,
            variables: IndexMap::new(),
            constraints: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    /// Name of the free objective row, as given by the MPS `N` record.
    pub fn objective_name(&self) -> &str {
        &self.objective_name
    }

    pub fn set_objective_name(&mut self, name: &str) {
        self.objective_name = name.to_string();
    }

    /// Creates a variable with the given unique name.
    ///
    /// # Errors
    ///
    /// [`ModelError::DuplicateVariable`] when the name is taken.
    pub fn make_variable(&mut self, name: &str) -> Result<&mut Variable, ModelError> {
        if self.variables.contains_key(name) {
            return Err(ModelError::DuplicateVariable {
                name: name.to_string(),
            });
        }
        let id = self.take_id();
        Ok(self
            .variables
            .entry(name.to_string())
            .or_insert_with(|| Variable::new(name.to_string(), id)))
    }

    /// Creates a constraint with the given unique name.
    ///
    /// # Errors
    ///
    /// [`ModelError::DuplicateConstraint`] when the name is taken.
    pub fn make_constraint(
        &mut self,
        relation: Relation,
        name: &str,
    ) -> Result<&mut Constraint, ModelError> {
        if self.constraints.contains_key(name) {
            return Err(ModelError::DuplicateConstraint {
                name: name.to_string(),
            });
        }
        let id = self.take_id();
        Ok(self
            .constraints
            .entry(name.to_string())
            .or_insert_with(|| Constraint::new(relation, name.to_string(), id)))
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    /// The variable at the given insertion position.
    pub fn variable_at(&self, index: usize) -> Option<&Variable> {
        self.variables.get_index(index).map(|(_, variable)| variable)
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.get(name)
    }

    pub fn constraint_mut(&mut self, name: &str) -> Option<&mut Constraint> {
        self.constraints.get_mut(name)
    }

    /// Variables in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.values()
    }

    pub(crate) fn constraints_mut(&mut self) -> impl Iterator<Item = &mut Constraint> {
        self.constraints.values_mut()
    }

    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Removes a variable, preserving the order of the remaining ones.
    pub fn remove_variable(&mut self, name: &str) -> Result<(), ModelError> {
        self.variables
            .shift_remove(name)
            .map(|_| ())
            .ok_or(ModelError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Removes a constraint, preserving the order of the remaining ones.
    pub fn remove_constraint(&mut self, name: &str) -> Result<(), ModelError> {
        self.constraints
            .shift_remove(name)
            .map(|_| ())
            .ok_or(ModelError::UnknownConstraint {
                name: name.to_string(),
            })
    }

    /// Checks that every constraint coefficient refers to a variable owned
    /// by this model.
    pub fn validate(&self) -> Result<(), ModelError> {
        for constraint in self.constraints.values() {
            for variable in constraint.entries().keys() {
                if !self.variables.contains_key(variable) {
                    return Err(ModelError::ForeignVariable {
                        constraint: constraint.name().to_string(),
                        variable: variable.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model: {} ({} constraints, {} variables)",
            if self.name.is_empty() { "Unnamed" } else { self.name.as_str() },
            self.constraints.len(),
            self.variables.len()
        )?;

        if self.variables.is_empty() {
            return write!(f, " Model is empty.");
        }

        write!(f, "\nObjective: {}", match self.sense {
            Sense::Max => "Max",
            Sense::Min => "Min",
        })?;
        for variable in self.variables.values() {
            if variable.cost() != 0.0 {
                write!(f, " + {}*{}", variable.cost(), variable)?;
            }
        }

        write!(f, "\nSubject to:")?;
        for constraint in self.constraints.values() {
            write!(f, "\n{constraint}")?;
        }
        Ok(())
    }
}
