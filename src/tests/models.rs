//! Example models used by the end-to-end solver tests.

use crate::model::{Model, Relation, Sense};

/// p11. Linear Programming (2014) Vanderbei. Solvable in 2 iterations.
pub fn vanderbei_p11() -> Model {
    let mut m = Model::new(Sense::Max, "Example");

    m.make_variable("x1").unwrap().set_cost(5.0);
    m.make_variable("x2").unwrap().set_cost(4.0);
    m.make_variable("x3").unwrap().set_cost(3.0);

    let c1 = m.make_constraint(Relation::Less, "C1").unwrap();
    c1.set_rhs(5.0);
    c1.add_to_lhs(2.0, "x1");
    c1.add_to_lhs(3.0, "x2");
    c1.add_to_lhs(1.0, "x3");

    let c2 = m.make_constraint(Relation::Less, "C2").unwrap();
    c2.set_rhs(11.0);
    c2.add_to_lhs(4.0, "x1");
    c2.add_to_lhs(1.0, "x2");
    c2.add_to_lhs(2.0, "x3");

    let c3 = m.make_constraint(Relation::Less, "C3").unwrap();
    c3.set_rhs(8.0);
    c3.add_to_lhs(3.0, "x1");
    c3.add_to_lhs(4.0, "x2");
    c3.add_to_lhs(2.0, "x3");

    m
}

/// p17. Linear Programming (2014) Vanderbei. The initial dictionary is
/// primal infeasible, exercising the dual algorithm.
pub fn vanderbei_p17() -> Model {
    let mut m = Model::new(Sense::Max, "Example");

    m.make_variable("x1").unwrap().set_cost(-2.0);
    m.make_variable("x2").unwrap().set_cost(-1.0);

    let c1 = m.make_constraint(Relation::Less, "C1").unwrap();
    c1.set_rhs(-1.0);
    c1.add_to_lhs(-1.0, "x1");
    c1.add_to_lhs(1.0, "x2");

    let c2 = m.make_constraint(Relation::Less, "C2").unwrap();
    c2.set_rhs(-2.0);
    c2.add_to_lhs(-1.0, "x1");
    c2.add_to_lhs(-2.0, "x2");

    let c3 = m.make_constraint(Relation::Less, "C3").unwrap();
    c3.set_rhs(1.0);
    c3.add_to_lhs(1.0, "x2");

    m
}

/// Problem 2.8 from Linear Programming (2014) Vanderbei.
pub fn vanderbei_problem_2_8() -> Model {
    let mut m = Model::new(Sense::Max, "P2.8 LP 2014");

    m.make_variable("x1").unwrap().set_cost(3.0);
    m.make_variable("x2").unwrap().set_cost(2.0);

    let rows: [(&str, f64, f64, f64); 8] = [
        ("C1", 1.0, -2.0, 1.0),
        ("C2", 1.0, -1.0, 2.0),
        ("C3", 2.0, -1.0, 6.0),
        ("C4", 1.0, 0.0, 5.0),
        ("C5", 2.0, 1.0, 16.0),
        ("C6", 1.0, 1.0, 12.0),
        ("C7", 1.0, 2.0, 21.0),
        ("C8", 0.0, 1.0, 10.0),
    ];

    for (name, a1, a2, rhs) in rows {
        let c = m.make_constraint(Relation::Less, name).unwrap();
        c.set_rhs(rhs);
        if a1 != 0.0 {
            c.add_to_lhs(a1, "x1");
        }
        if a2 != 0.0 {
            c.add_to_lhs(a2, "x2");
        }
    }

    m
}

/// Problem 2.11 from Linear Programming (2014) Vanderbei. A minimisation
/// shaped like a small transportation problem.
pub fn vanderbei_problem_2_11() -> Model {
    let mut m = Model::new(Sense::Min, "P2.11 LP 2014");

    m.make_variable("x12").unwrap().set_cost(1.0);
    m.make_variable("x13").unwrap().set_cost(8.0);
    m.make_variable("x14").unwrap().set_cost(9.0);
    m.make_variable("x23").unwrap().set_cost(2.0);
    m.make_variable("x24").unwrap().set_cost(7.0);
    m.make_variable("x34").unwrap().set_cost(3.0);

    let c1 = m.make_constraint(Relation::Greater, "C1").unwrap();
    c1.set_rhs(1.0);
    c1.add_to_lhs(1.0, "x12");
    c1.add_to_lhs(1.0, "x13");
    c1.add_to_lhs(1.0, "x14");

    let c2 = m.make_constraint(Relation::Equal, "C2").unwrap();
    c2.set_rhs(0.0);
    c2.add_to_lhs(-1.0, "x12");
    c2.add_to_lhs(1.0, "x23");
    c2.add_to_lhs(1.0, "x24");

    let c3 = m.make_constraint(Relation::Equal, "C3").unwrap();
    c3.set_rhs(0.0);
    c3.add_to_lhs(-1.0, "x13");
    c3.add_to_lhs(-1.0, "x23");
    c3.add_to_lhs(1.0, "x34");

    let c4 = m.make_constraint(Relation::Less, "C4").unwrap();
    c4.set_rhs(1.0);
    c4.add_to_lhs(1.0, "x14");
    c4.add_to_lhs(1.0, "x24");
    c4.add_to_lhs(1.0, "x34");

    m
}

/// Winston, OR. pg. 159. Unbounded.
pub fn winston_unbounded() -> Model {
    let mut m = Model::new(Sense::Max, "UNBOUNDED");

    m.make_variable("x1").unwrap();
    m.make_variable("x2").unwrap().set_cost(2.0);

    let c1 = m.make_constraint(Relation::Less, "C1").unwrap();
    c1.set_rhs(4.0);
    c1.add_to_lhs(1.0, "x1");
    c1.add_to_lhs(-1.0, "x2");

    let c2 = m.make_constraint(Relation::Less, "C2").unwrap();
    c2.set_rhs(1.0);
    c2.add_to_lhs(-1.0, "x1");
    c2.add_to_lhs(1.0, "x2");

    m
}
