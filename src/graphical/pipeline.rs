// Shared graphical pipeline: augment -> intersect -> filter -> dedup ->
// evaluate. The 2D and 3D variants are the same code instantiated with a
// different dimension; only the boundary-system size and point shape differ.

use crate::domain::models::{Constraint, OptimizationProblem};
use crate::domain::solver_service::{Result, SolverError};
use crate::domain::value_objects::SolutionStatus;

use super::dedup::dedup_vertices;
use super::feasible::is_feasible;
use super::intersect::boundary_intersection;

/// A feasible-region vertex with its cached objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Coordinates in axis order; length is the pipeline dimension.
    pub coords: Vec<f64>,
    /// Objective value at this point, set by the evaluation stage.
    pub objective: f64,
}

impl Vertex {
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }
}

/// Outcome of a graphical solve: the optimal vertex (when one exists) plus
/// the full deduplicated vertex set for rendering.
#[derive(Debug, Clone)]
pub struct GraphicalSolution {
    pub status: SolutionStatus,
    pub objective_value: f64,
    pub optimal: Option<Vertex>,
    pub vertices: Vec<Vertex>,
}

/// Solve a 2-variable problem by vertex enumeration.
pub fn solve_graphical_2d(problem: &OptimizationProblem) -> Result<GraphicalSolution> {
    solve_graphical(problem, 2)
}

/// Solve a 3-variable problem by vertex enumeration.
pub fn solve_graphical_3d(problem: &OptimizationProblem) -> Result<GraphicalSolution> {
    solve_graphical(problem, 3)
}

fn solve_graphical(problem: &OptimizationProblem, dimension: usize) -> Result<GraphicalSolution> {
    validate_widths(problem, dimension)?;

    let constraints = augment_with_axis_bounds(&problem.constraints, dimension);

    // Every distinct combination of `dimension` boundaries is a candidate
    // vertex; degenerate systems contribute nothing.
    let mut candidates: Vec<Vec<f64>> = Vec::new();
    for_each_combination(constraints.len(), dimension, |combo| {
        let rows: Vec<&Constraint> = combo.iter().map(|&i| &constraints[i]).collect();
        if let Some(point) = boundary_intersection(&rows) {
            if is_feasible(&point, &constraints) {
                candidates.push(point);
            }
        }
    });

    let feasible = dedup_vertices(candidates);
    Ok(evaluate(problem, feasible))
}

/// Data-integrity check, done once up front: every constraint (and the
/// objective) must carry at least `dimension` coefficients. Checked here as
/// well as at the request layer because the pipeline is callable on its own.
fn validate_widths(problem: &OptimizationProblem, dimension: usize) -> Result<()> {
    if problem.objective.coefficients.len() < dimension {
        return Err(SolverError::InvalidProblem(format!(
            "objective has {} coefficients but the graphical method needs {}",
            problem.objective.coefficients.len(),
            dimension
        )));
    }

    if problem.constraints.is_empty() {
        return Err(SolverError::InvalidProblem(
            "no constraints provided".to_string(),
        ));
    }

    for (i, constraint) in problem.constraints.iter().enumerate() {
        if constraint.coefficients.len() < dimension {
            return Err(SolverError::InvalidProblem(format!(
                "constraint {} has {} coefficients but the problem has {} variables",
                i,
                constraint.coefficients.len(),
                dimension
            )));
        }
    }

    Ok(())
}

/// Append one synthetic non-negativity constraint per axis. Downstream
/// stages cannot tell them apart from user constraints.
fn augment_with_axis_bounds(user: &[Constraint], dimension: usize) -> Vec<Constraint> {
    let mut all = user.to_vec();
    for axis in 0..dimension {
        all.push(Constraint::non_negativity(axis, dimension));
    }
    all
}

/// Visit every k-combination of `0..n` in lexicographic index order.
fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k == 0 || k > n {
        return;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        visit(&indices);

        // Advance the rightmost index that still has room.
        let mut i = k;
        while i > 0 && indices[i - 1] == n - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        indices[i - 1] += 1;
        for j in i..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Objective Evaluator: score every vertex, then a single left-to-right scan
/// with strict comparison. Ties keep the first-encountered optimum; this is
/// the stated policy, not an iteration accident.
fn evaluate(problem: &OptimizationProblem, feasible: Vec<Vec<f64>>) -> GraphicalSolution {
    let objective = &problem.objective;

    let vertices: Vec<Vertex> = feasible
        .into_iter()
        .map(|coords| {
            let z = objective
                .coefficients
                .iter()
                .zip(&coords)
                .map(|(coefficient, value)| coefficient * value)
                .sum();
            Vertex {
                coords,
                objective: z,
            }
        })
        .collect();

    if vertices.is_empty() {
        return GraphicalSolution {
            status: SolutionStatus::Infeasible,
            objective_value: 0.0,
            optimal: None,
            vertices,
        };
    }

    let maximize = objective.optimization_type.is_maximize();
    let mut best = 0;
    for (i, vertex) in vertices.iter().enumerate().skip(1) {
        let improves = if maximize {
            vertex.objective > vertices[best].objective
        } else {
            vertex.objective < vertices[best].objective
        };
        if improves {
            best = i;
        }
    }

    let optimal = vertices[best].clone();
    GraphicalSolution {
        status: SolutionStatus::Optimal,
        objective_value: optimal.objective,
        optimal: Some(optimal),
        vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ObjectiveFunction;
    use crate::domain::value_objects::{ConstraintType, OptimizationType};

    fn problem(
        sense: OptimizationType,
        objective: Vec<f64>,
        constraints: Vec<(ConstraintType, Vec<f64>, f64)>,
    ) -> OptimizationProblem {
        let mut p = OptimizationProblem::new(ObjectiveFunction::new(sense, objective));
        for (relation, coefficients, bound) in constraints {
            p = p.add_constraint(Constraint::new(relation, coefficients, bound));
        }
        p
    }

    fn has_vertex(solution: &GraphicalSolution, expected: &[f64]) -> bool {
        solution.vertices.iter().any(|v| {
            v.coords
                .iter()
                .zip(expected)
                .all(|(a, e)| (a - e).abs() < 1e-6)
        })
    }

    #[test]
    fn combinations_are_enumerated_lexicographically() {
        let mut seen = Vec::new();
        for_each_combination(4, 2, |combo| seen.push(combo.to_vec()));
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn bounded_2d_problem_finds_all_corners_and_the_optimum() {
        // maximize 3x + 2y s.t. x + y <= 4, x + 3y <= 6
        let p = problem(
            OptimizationType::Maximize,
            vec![3.0, 2.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 1.0], 4.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 3.0], 6.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_eq!(solution.vertices.len(), 4);
        for expected in [[0.0, 0.0], [4.0, 0.0], [3.0, 1.0], [0.0, 2.0]] {
            assert!(has_vertex(&solution, &expected), "missing {expected:?}");
        }

        let optimal = solution.optimal.unwrap();
        assert!((optimal.x() - 4.0).abs() < 1e-9);
        assert!((optimal.y() - 0.0).abs() < 1e-9);
        assert!((solution.objective_value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn minimization_picks_the_smallest_vertex_value() {
        let p = problem(
            OptimizationType::Minimize,
            vec![3.0, 2.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 1.0], 4.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 3.0], 6.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        let optimal = solution.optimal.unwrap();
        assert_eq!(optimal.coords, vec![0.0, 0.0]);
        assert_eq!(solution.objective_value, 0.0);
    }

    #[test]
    fn contradictory_bounds_report_infeasible() {
        // x >= 5 and x <= 2 cannot both hold
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
            vec![
                (ConstraintType::GreaterThanOrEqual, vec![1.0, 0.0], 5.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 0.0], 2.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert_eq!(solution.objective_value, 0.0);
        assert!(solution.optimal.is_none());
        assert!(solution.vertices.is_empty());
    }

    #[test]
    fn parallel_boundaries_are_skipped_without_error() {
        // [1,1] <= 4 and [2,2] <= 8 describe the same boundary; their pair
        // contributes nothing, the rest of the enumeration proceeds
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 1.0], 4.0),
                (ConstraintType::LessThanOrEqual, vec![2.0, 2.0], 8.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        assert_eq!(solution.status, SolutionStatus::Optimal);
        // (0,0), (4,0), (0,4); the duplicate boundary adds no extra vertex
        assert_eq!(solution.vertices.len(), 3);
        assert!((solution.objective_value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_the_first_encountered_optimum() {
        // maximize x over the box 0 <= x <= 2, 0 <= y <= 3: both (2,3) and
        // (2,0) score 2; the scan must keep whichever the pipeline saw first
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 0.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 0.0], 2.0),
                (ConstraintType::LessThanOrEqual, vec![0.0, 1.0], 3.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        let optimal = solution.optimal.unwrap();

        let first_best = solution
            .vertices
            .iter()
            .find(|v| (v.objective - 2.0).abs() < 1e-9)
            .unwrap();
        assert_eq!(optimal, *first_best);
        assert_eq!(optimal.coords, vec![2.0, 3.0]);
    }

    #[test]
    fn every_reported_vertex_is_non_negative() {
        let p = problem(
            OptimizationType::Maximize,
            vec![2.0, 5.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 4.0], 24.0),
                (ConstraintType::LessThanOrEqual, vec![3.0, 1.0], 21.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 1.0], 9.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        for vertex in &solution.vertices {
            for &value in &vertex.coords {
                assert!(value >= -1e-6, "vertex {:?} dips below zero", vertex.coords);
            }
        }
    }

    #[test]
    fn selected_optimum_dominates_every_other_vertex() {
        let p = problem(
            OptimizationType::Maximize,
            vec![2.0, 5.0],
            vec![
                (ConstraintType::LessThanOrEqual, vec![1.0, 4.0], 24.0),
                (ConstraintType::LessThanOrEqual, vec![3.0, 1.0], 21.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 1.0], 9.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        let best = solution.objective_value;
        for vertex in &solution.vertices {
            assert!(vertex.objective <= best + 1e-9);
        }
    }

    #[test]
    fn bounded_3d_problem_finds_the_simplex_corners() {
        // maximize x + y + z s.t. x + y + z <= 10
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 1.0, 1.0],
            vec![(ConstraintType::LessThanOrEqual, vec![1.0, 1.0, 1.0], 10.0)],
        );
        let solution = solve_graphical_3d(&p).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert_eq!(solution.vertices.len(), 4);
        for expected in [
            [0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0],
            [0.0, 10.0, 0.0],
            [0.0, 0.0, 10.0],
        ] {
            assert!(has_vertex(&solution, &expected), "missing {expected:?}");
        }

        let optimal = solution.optimal.unwrap();
        assert!((solution.objective_value - 10.0).abs() < 1e-9);
        let plane: f64 = optimal.coords.iter().sum();
        assert!((plane - 10.0).abs() < 1e-9);
        for &value in &optimal.coords {
            assert!(value >= -1e-6);
        }
    }

    #[test]
    fn equality_constraints_pin_the_region_to_a_segment() {
        // x + y = 4 with x <= 3 leaves the segment from (0,4) to (3,1)
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 0.0],
            vec![
                (ConstraintType::Equal, vec![1.0, 1.0], 4.0),
                (ConstraintType::LessThanOrEqual, vec![1.0, 0.0], 3.0),
            ],
        );
        let solution = solve_graphical_2d(&p).unwrap();
        assert!(has_vertex(&solution, &[0.0, 4.0]));
        assert!(has_vertex(&solution, &[3.0, 1.0]));
        let optimal = solution.optimal.unwrap();
        assert_eq!(optimal.coords, vec![3.0, 1.0]);
    }

    #[test]
    fn short_constraint_fails_the_whole_request() {
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
            vec![(ConstraintType::LessThanOrEqual, vec![1.0], 4.0)],
        );
        assert!(matches!(
            solve_graphical_2d(&p),
            Err(SolverError::InvalidProblem(_))
        ));
    }

    #[test]
    fn empty_constraint_list_is_rejected() {
        let p = problem(OptimizationType::Maximize, vec![1.0, 1.0], Vec::new());
        assert!(matches!(
            solve_graphical_2d(&p),
            Err(SolverError::InvalidProblem(_))
        ));
    }

    #[test]
    fn objective_narrower_than_three_axes_is_rejected_in_3d() {
        let p = problem(
            OptimizationType::Maximize,
            vec![1.0, 1.0],
            vec![(ConstraintType::LessThanOrEqual, vec![1.0, 1.0, 1.0], 10.0)],
        );
        assert!(matches!(
            solve_graphical_3d(&p),
            Err(SolverError::InvalidProblem(_))
        ));
    }
}
