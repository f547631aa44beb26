// Feasibility Filter: test a candidate point against the full augmented
// constraint list, not just the combination that produced it.

use super::FEASIBILITY_TOLERANCE;
use crate::domain::models::Constraint;
use crate::domain::value_objects::ConstraintType;

/// A point is feasible iff it satisfies every constraint in the list.
pub(crate) fn is_feasible(point: &[f64], constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| satisfies(point, c))
}

fn satisfies(point: &[f64], constraint: &Constraint) -> bool {
    let lhs: f64 = constraint
        .coefficients
        .iter()
        .zip(point)
        .map(|(coefficient, value)| coefficient * value)
        .sum();
    let rhs = constraint.bound;

    match constraint.constraint_type {
        ConstraintType::LessThanOrEqual => lhs <= rhs + FEASIBILITY_TOLERANCE,
        ConstraintType::GreaterThanOrEqual => lhs >= rhs - FEASIBILITY_TOLERANCE,
        ConstraintType::Equal => (lhs - rhs).abs() <= FEASIBILITY_TOLERANCE,
    }
}
