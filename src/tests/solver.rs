use rstest::rstest;

use crate::interface::mps::read_mps;
use crate::model::{Model, Relation};
use crate::tests::models;
use crate::{Solution, Status, simplex};

fn solve_to_optimality(mut model: Model) -> Solution {
    let result = simplex::solve(&mut model).unwrap();
    assert_eq!(result.status, Status::Optimal);
    result.solution.unwrap()
}

fn assert_variable(solution: &Solution, name: &str, expected: f64) {
    let actual = solution.variables[name];
    assert!(
        (actual - expected).abs() <= 1e-6,
        "expected {name} = {expected}, got {actual}"
    );
}

#[test]
fn vanderbei_p11_reaches_the_book_optimum() {
    let solution = solve_to_optimality(models::vanderbei_p11());

    assert!((solution.objective - 13.0).abs() <= 1e-8);
    assert_variable(&solution, "x1", 2.0);
    assert_variable(&solution, "x2", 0.0);
    assert_variable(&solution, "x3", 1.0);
}

#[test]
fn vanderbei_p17_is_solved_by_the_dual_algorithm() {
    let solution = solve_to_optimality(models::vanderbei_p17());

    assert!((solution.objective - -3.0).abs() <= 1e-8);
    assert_variable(&solution, "x1", 4.0 / 3.0);
    assert_variable(&solution, "x2", 1.0 / 3.0);
}

#[test]
fn problem_2_8_reaches_the_book_optimum() {
    let solution = solve_to_optimality(models::vanderbei_problem_2_8());

    assert!((solution.objective - 28.0).abs() <= 1e-8);
    assert_variable(&solution, "x1", 4.0);
    assert_variable(&solution, "x2", 8.0);
}

#[test]
fn transportation_minimisation_reaches_the_book_optimum() {
    let solution = solve_to_optimality(models::vanderbei_problem_2_11());

    assert!((solution.objective - 9.0).abs() <= 1e-8);
    assert_variable(&solution, "x12", 1.0);
    assert_variable(&solution, "x24", 1.0);
    for name in ["x13", "x14", "x23", "x34"] {
        assert_variable(&solution, name, 0.0);
    }
}

#[test]
fn unbounded_model_reports_no_solution() {
    let mut model = models::winston_unbounded();
    let result = simplex::solve(&mut model).unwrap();

    assert_eq!(result.status, Status::Unbounded);
    assert!(result.solution.is_none());
}

#[rstest]
#[case::p11(models::vanderbei_p11 as fn() -> Model)]
#[case::p17(models::vanderbei_p17 as fn() -> Model)]
#[case::problem_2_8(models::vanderbei_problem_2_8 as fn() -> Model)]
#[case::problem_2_11(models::vanderbei_problem_2_11 as fn() -> Model)]
fn optimal_solutions_respect_the_original_model(#[case] build: fn() -> Model) {
    let solution = solve_to_optimality(build());
    let original = build();

    // Every constraint holds within 1e-6 of its RHS.
    for constraint in original.constraints() {
        let lhs: f64 = constraint
            .entries()
            .iter()
            .map(|(name, coeff)| coeff * solution.variables[name])
            .sum();

        match constraint.relation() {
            Relation::Less => assert!(
                lhs <= constraint.rhs() + 1e-6,
                "{}: {lhs} exceeds {}",
                constraint.name(),
                constraint.rhs()
            ),
            Relation::Greater => assert!(
                lhs >= constraint.rhs() - 1e-6,
                "{}: {lhs} undercuts {}",
                constraint.name(),
                constraint.rhs()
            ),
            Relation::Equal => assert!(
                (lhs - constraint.rhs()).abs() <= 1e-6,
                "{}: {lhs} misses {}",
                constraint.name(),
                constraint.rhs()
            ),
        }
    }

    // Every variable stays within its bounds.
    for variable in original.variables() {
        let value = solution.variables[variable.name()];
        assert!(value >= variable.lower_bound() - 1e-6);
        assert!(value <= variable.upper_bound() + 1e-6);
    }

    // The reported objective matches the costs of the reported point.
    let expected: f64 = original
        .variables()
        .map(|variable| variable.cost() * solution.variables[variable.name()])
        .sum();
    assert!((solution.objective - expected).abs() <= 1e-8);
}

#[test]
fn solving_the_same_model_twice_is_deterministic() {
    let first = solve_to_optimality(models::vanderbei_p11());
    let second = solve_to_optimality(models::vanderbei_p11());

    assert_eq!(first.objective, second.objective);
    assert_eq!(first.variables, second.variables);
}

#[test]
fn mps_example_solves_end_to_end() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/example1.mps");
    let mut model = read_mps(path).unwrap();

    let result = simplex::solve(&mut model).unwrap();
    assert_eq!(result.status, Status::Optimal);

    let solution = result.solution.unwrap();
    assert!((solution.objective - 78.0).abs() <= 1e-6);
    assert_variable(&solution, "XONE", 2.0);
    assert_variable(&solution, "YTWO", 1.0);
    assert_variable(&solution, "ZTHREE", 8.0);
}
