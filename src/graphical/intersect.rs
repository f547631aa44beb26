// Boundary Intersector: solve the square system obtained by relaxing each
// chosen constraint to its boundary equality.

use super::DET_TOLERANCE;
use crate::domain::models::Constraint;

/// Intersect the boundaries of `rows.len()` constraints (2 or 3).
///
/// Returns `None` when the system is degenerate (parallel or coincident
/// boundaries), an expected outcome for most combinations rather than an
/// error.
/// Callers must have verified that every constraint carries at least as many
/// coefficients as there are rows.
pub(crate) fn boundary_intersection(rows: &[&Constraint]) -> Option<Vec<f64>> {
    match rows {
        &[c1, c2] => intersect_pair(c1, c2),
        &[c1, c2, c3] => intersect_triple(c1, c2, c3),
        _ => None,
    }
}

/// 2×2 system via Cramer's rule: `a1*x + b1*y = d1`, `a2*x + b2*y = d2`.
fn intersect_pair(c1: &Constraint, c2: &Constraint) -> Option<Vec<f64>> {
    let (a1, b1, d1) = (c1.coefficients[0], c1.coefficients[1], c1.bound);
    let (a2, b2, d2) = (c2.coefficients[0], c2.coefficients[1], c2.bound);

    let det = a1 * b2 - a2 * b1;
    if det.abs() < DET_TOLERANCE {
        return None;
    }

    let x = (d1 * b2 - d2 * b1) / det;
    let y = (a1 * d2 - a2 * d1) / det;
    Some(vec![x, y])
}

/// 3×3 system via Cramer's rule, cofactor expansion along the first row.
fn intersect_triple(c1: &Constraint, c2: &Constraint, c3: &Constraint) -> Option<Vec<f64>> {
    let (a1, b1, e1, d1) = (
        c1.coefficients[0],
        c1.coefficients[1],
        c1.coefficients[2],
        c1.bound,
    );
    let (a2, b2, e2, d2) = (
        c2.coefficients[0],
        c2.coefficients[1],
        c2.coefficients[2],
        c2.bound,
    );
    let (a3, b3, e3, d3) = (
        c3.coefficients[0],
        c3.coefficients[1],
        c3.coefficients[2],
        c3.bound,
    );

    let det = a1 * (b2 * e3 - e2 * b3) - b1 * (a2 * e3 - e2 * a3) + e1 * (a2 * b3 - b2 * a3);
    if det.abs() < DET_TOLERANCE {
        return None;
    }

    let dx = d1 * (b2 * e3 - e2 * b3) - b1 * (d2 * e3 - e2 * d3) + e1 * (d2 * b3 - b2 * d3);
    let dy = a1 * (d2 * e3 - e2 * d3) - d1 * (a2 * e3 - e2 * a3) + e1 * (a2 * d3 - d2 * a3);
    let dz = a1 * (b2 * d3 - d2 * b3) - b1 * (a2 * d3 - d2 * a3) + d1 * (a2 * b3 - b2 * a3);

    Some(vec![dx / det, dy / det, dz / det])
}
