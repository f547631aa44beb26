// Mappers: Convert between wire-format JSON types and domain models
// This keeps serde dependencies isolated from business logic (Dependency Inversion)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    models::{Constraint, ObjectiveFunction, OptimizationProblem, Solution, SolverConfig},
    solver_service::{Result, SolverError},
    value_objects::{ConstraintType, OptimizationType, SolverBackend},
};
use crate::graphical::{convex_hull, GraphicalSolution};

/// Linear-programming problem as posted to any of the three endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct LppRequest {
    #[serde(rename = "ObjectiveCoefficients")]
    pub objective_coefficients: Vec<f64>,
    /// Free-form optimization sense; normalized once by
    /// [`OptimizationType::from_request`].
    #[serde(rename = "OptimizationType", default)]
    pub optimization_type: String,
    #[serde(rename = "Constraints", default)]
    pub constraints: Vec<ConstraintRequest>,
    /// Optional numerical-backend override (`cbc` or `highs`); anything else
    /// leaves the selection automatic.
    #[serde(rename = "Solver", default)]
    pub solver: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintRequest {
    #[serde(rename = "Coefficients")]
    pub coefficients: Vec<f64>,
    #[serde(rename = "Relation")]
    pub relation: String,
    #[serde(rename = "RightHandSide", alias = "Righthandside")]
    pub right_hand_side: f64,
}

/// Request-layer validation and conversion into the domain model.
///
/// Rejects structurally malformed input before the pipeline runs: fewer than
/// two objective coefficients, a constraint whose width differs from the
/// objective's, or an unrecognized relation token.
pub fn request_to_problem(request: &LppRequest) -> Result<OptimizationProblem> {
    let num_vars = request.objective_coefficients.len();
    if num_vars < 2 {
        return Err(SolverError::InvalidProblem(
            "identify at least two variables".to_string(),
        ));
    }

    let mut constraints = Vec::with_capacity(request.constraints.len());
    for (i, c) in request.constraints.iter().enumerate() {
        let relation = ConstraintType::parse(&c.relation).ok_or_else(|| {
            SolverError::InvalidProblem(format!("invalid relation: {}", c.relation))
        })?;
        if c.coefficients.len() != num_vars {
            return Err(SolverError::InvalidProblem(format!(
                "constraint {} has {} coefficients but the problem has {} variables",
                i,
                c.coefficients.len(),
                num_vars
            )));
        }
        constraints.push(Constraint::new(relation, c.coefficients.clone(), c.right_hand_side));
    }

    let sense = OptimizationType::from_request(&request.optimization_type);
    let objective = ObjectiveFunction::new(sense, request.objective_coefficients.clone());

    let mut problem = OptimizationProblem::new(objective).with_config(SolverConfig {
        backend: SolverBackend::from_request(&request.solver),
    });
    problem.constraints = constraints;
    Ok(problem)
}

/// Numerical-path response, passed through from the solver collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ObjectiveValue")]
    pub objective_value: f64,
    #[serde(rename = "VariableValues")]
    pub variable_values: BTreeMap<String, f64>,
}

pub fn solution_to_response(solution: &Solution, variable_names: &[String]) -> SolutionResponse {
    let variable_values = if solution.is_optimal() {
        variable_names
            .iter()
            .cloned()
            .zip(solution.variable_values.iter().copied())
            .collect()
    } else {
        BTreeMap::new()
    };

    SolutionResponse {
        status: solution.status.to_string(),
        objective_value: solution.objective_value,
        variable_values,
    }
}

/// 2D vertex: `Z` carries the vertex's evaluated objective value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanarPoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

/// 3D vertex: the objective value `F` is carried separately from the `Z`
/// coordinate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpatialPoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
    #[serde(rename = "F")]
    pub f: f64,
}

/// Bare coordinate pair on the feasible-region outline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutlinePoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Graphical2DResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ObjectiveValue")]
    pub objective_value: f64,
    #[serde(rename = "VariableValues")]
    pub variable_values: BTreeMap<String, f64>,
    #[serde(rename = "FeasibleVertices")]
    pub feasible_vertices: Vec<PlanarPoint>,
    #[serde(rename = "OptimalPoint", skip_serializing_if = "Option::is_none")]
    pub optimal_point: Option<PlanarPoint>,
    /// Hull-ordered boundary of the feasible region, ready for polygon
    /// rendering.
    #[serde(rename = "RegionOutline")]
    pub region_outline: Vec<OutlinePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Graphical3DResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ObjectiveValue")]
    pub objective_value: f64,
    #[serde(rename = "VariableValues")]
    pub variable_values: BTreeMap<String, f64>,
    #[serde(rename = "FeasibleVertices")]
    pub feasible_vertices: Vec<SpatialPoint>,
    #[serde(rename = "OptimalPoint", skip_serializing_if = "Option::is_none")]
    pub optimal_point: Option<SpatialPoint>,
}

pub fn graphical_to_2d_response(solution: &GraphicalSolution) -> Graphical2DResponse {
    let feasible_vertices: Vec<PlanarPoint> = solution
        .vertices
        .iter()
        .map(|v| PlanarPoint {
            x: v.x(),
            y: v.y(),
            z: v.objective,
        })
        .collect();

    let outline = convex_hull(
        &solution
            .vertices
            .iter()
            .map(|v| (v.x(), v.y()))
            .collect::<Vec<_>>(),
    );

    let optimal_point = solution.optimal.as_ref().map(|v| PlanarPoint {
        x: v.x(),
        y: v.y(),
        z: v.objective,
    });

    Graphical2DResponse {
        status: solution.status.to_string(),
        objective_value: solution.objective_value,
        variable_values: axis_values(solution, 2),
        feasible_vertices,
        optimal_point,
        region_outline: outline
            .into_iter()
            .map(|(x, y)| OutlinePoint { x, y })
            .collect(),
    }
}

pub fn graphical_to_3d_response(solution: &GraphicalSolution) -> Graphical3DResponse {
    let feasible_vertices: Vec<SpatialPoint> = solution
        .vertices
        .iter()
        .map(|v| SpatialPoint {
            x: v.x(),
            y: v.y(),
            z: v.z(),
            f: v.objective,
        })
        .collect();

    let optimal_point = solution.optimal.as_ref().map(|v| SpatialPoint {
        x: v.x(),
        y: v.y(),
        z: v.z(),
        f: v.objective,
    });

    Graphical3DResponse {
        status: solution.status.to_string(),
        objective_value: solution.objective_value,
        variable_values: axis_values(solution, 3),
        feasible_vertices,
        optimal_point,
    }
}

/// `x1..x{dim}` values of the optimal point, empty when infeasible.
fn axis_values(solution: &GraphicalSolution, dimension: usize) -> BTreeMap<String, f64> {
    match &solution.optimal {
        Some(vertex) => (0..dimension)
            .map(|i| (format!("x{}", i + 1), vertex.coords[i]))
            .collect(),
        None => BTreeMap::new(),
    }
}
