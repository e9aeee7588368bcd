use std::fmt;

use indexmap::IndexMap;

use crate::Real;

/// The relation between a constraint's left- and right-hand sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Less,
    Greater,
    Equal,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Less => write!(f, "<="),
            Relation::Greater => write!(f, ">="),
            Relation::Equal => write!(f, "="),
        }
    }
}

/// A linear constraint `sum(coeff * var) {<=, >=, =} rhs`.
///
/// Entries are keyed by variable name with at most one entry per variable;
/// an absent entry means a zero coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    name: String,
    id: u64,
    relation: Relation,
    rhs: Real,
    entries: IndexMap<String, Real>,
}

impl Constraint {
    pub(crate) fn new(relation: Relation, name: String, id: u64) -> Self {
        Self {
            name,
            id,
            relation,
            rhs: 0.0,
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation id, unique and monotonically increasing within a model.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn rhs(&self) -> Real {
        self.rhs
    }

    pub fn set_rhs(&mut self, rhs: Real) {
        self.rhs = rhs;
    }

    pub fn entries(&self) -> &IndexMap<String, Real> {
        &self.entries
    }

    /// The coefficient of `variable`, zero when absent.
    pub fn coefficient(&self, variable: &str) -> Real {
        self.entries.get(variable).copied().unwrap_or(0.0)
    }

    /// Adds `coeff * variable` to the left-hand side, creating the entry if
    /// absent.
    pub fn add_to_lhs(&mut self, coeff: Real, variable: &str) {
        *self.entries.entry(variable.to_string()).or_insert(0.0) += coeff;
    }

    /// Adds `coeff * variable` to the right-hand side.
    pub fn add_to_rhs(&mut self, coeff: Real, variable: &str) {
        self.add_to_lhs(-coeff, variable);
    }

    pub(crate) fn remove_entry(&mut self, variable: &str) -> Option<Real> {
        self.entries.shift_remove(variable)
    }

    pub(crate) fn set_entries(&mut self, entries: IndexMap<String, Real>) {
        self.entries = entries;
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: ",
            if self.name.is_empty() { "c" } else { self.name.as_str() },
            self.id
        )?;
        for (n_entry, (variable, coeff)) in self.entries.iter().enumerate() {
            if n_entry > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coeff}{variable}")?;
        }
        write!(f, " {} {}", self.relation, self.rhs)
    }
}
