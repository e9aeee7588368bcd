//! Rewrites a model into the all-inequality form the simplex driver expects.
//!
//! Three transformations are applied in one pass:
//! - Free variables are replaced by the difference of two non-negative ones.
//! - Strictly positive lower bounds and finite upper bounds become explicit
//!   constraints.
//! - Equality constraints are split into a `>=` / `<=` pair.
//!
//! After this stage every constraint is an inequality over non-negative
//! variables; the driver materialises slack columns on its own.

use crate::model::{Model, ModelError, Relation};
use crate::{Error, Real};

/// Transforms `model` in place into the driver's standard input form.
pub fn pre_process(model: &mut Model) -> Result<(), Error> {
    split_free_variables(model)?;
    bounds_to_constraints(model)?;
    split_equalities(model)?;
    Ok(())
}

/// Replaces every free variable `x` with `x_pos - x_neg`, both non-negative.
fn split_free_variables(model: &mut Model) -> Result<(), Error> {
    let free: Vec<(String, Real)> = model
        .variables()
        .filter(|variable| variable.is_free())
        .map(|variable| (variable.name().to_string(), variable.cost()))
        .collect();

    for (name, cost) in free {
        let positive = format!("FREE_{name}_POS");
        let negative = format!("FREE_{name}_NEG");
        model.make_variable(&positive)?.set_cost(cost);
        model.make_variable(&negative)?.set_cost(-cost);

        for constraint in model.constraints_mut() {
            if let Some(coeff) = constraint.remove_entry(&name) {
                constraint.add_to_lhs(coeff, &positive);
                constraint.add_to_lhs(-coeff, &negative);
            }
        }

        model.remove_variable(&name)?;
    }
    Ok(())
}

/// Converts strictly positive lower bounds and finite upper bounds into
/// explicit constraints.
fn bounds_to_constraints(model: &mut Model) -> Result<(), Error> {
    let bounds: Vec<(String, Real, Real)> = model
        .variables()
        .map(|variable| {
            (
                variable.name().to_string(),
                variable.lower_bound(),
                variable.upper_bound(),
            )
        })
        .collect();

    for (name, lower, upper) in bounds {
        if lower > 0.0 {
            let constraint = model.make_constraint(
                Relation::Greater,
                &format!("BND_{name}_GEQ_{lower}"),
            )?;
            constraint.set_rhs(lower);
            constraint.add_to_lhs(1.0, &name);
        }

        if upper < Real::INFINITY {
            let constraint = model.make_constraint(
                Relation::Less,
                &format!("BND_{name}_LEQ_{upper}"),
            )?;
            constraint.set_rhs(upper);
            constraint.add_to_lhs(1.0, &name);
        }
    }
    Ok(())
}

/// Replaces each equality constraint with a `>=` / `<=` pair.
fn split_equalities(model: &mut Model) -> Result<(), Error> {
    let equalities: Vec<String> = model
        .constraints()
        .filter(|constraint| constraint.relation() == Relation::Equal)
        .map(|constraint| constraint.name().to_string())
        .collect();

    for name in equalities {
        let (rhs, entries) = {
            let original = model
                .constraint(&name)
                .ok_or_else(|| ModelError::UnknownConstraint { name: name.clone() })?;
            (original.rhs(), original.entries().clone())
        };

        let geq = model.make_constraint(Relation::Greater, &format!("EQ_CONS_{name}_GEQ"))?;
        geq.set_rhs(rhs);
        geq.set_entries(entries.clone());

        let leq = model.make_constraint(Relation::Less, &format!("EQ_CONS_{name}_LEQ"))?;
        leq.set_rhs(rhs);
        leq.set_entries(entries);

        model.remove_constraint(&name)?;
    }
    Ok(())
}
