// HTTP service: the three solver endpoints.
// Thin plumbing: convert the request, run the pipeline or the external
// solver, convert the result. All algorithmic work lives elsewhere.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use super::mappers::{self, LppRequest};
use crate::domain::solver_service::{SolverError, SolverService};
use crate::graphical::{solve_graphical_2d, solve_graphical_3d};
use crate::solver::SolverFactory;

/// Shared per-process state: the default solver used when a request does not
/// pick a backend.
pub struct AppState {
    pub solver: Arc<dyn SolverService>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/LPPsolver/Numerical", post(solve_numerical))
        .route("/api/LPPsolver/graphical2D", post(solve_2d))
        .route("/api/LPPsolver/graphical3D", post(solve_3d))
        .with_state(state)
}

async fn solve_numerical(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LppRequest>,
) -> std::result::Result<Json<mappers::SolutionResponse>, ApiError> {
    let problem = mappers::request_to_problem(&request)?;

    let solver = if problem.solver_config.backend == crate::domain::SolverBackend::Auto {
        Arc::clone(&state.solver)
    } else {
        SolverFactory::create_solver(&problem)
    };
    tracing::info!(
        variables = problem.num_variables(),
        constraints = problem.constraints.len(),
        solver = solver.name(),
        "solving numerically"
    );

    let solution = solver.solve(&problem)?;
    tracing::info!(status = %solution.status, message = %solution.message, "numerical solve finished");

    Ok(Json(mappers::solution_to_response(
        &solution,
        &problem.objective.variable_names,
    )))
}

async fn solve_2d(
    Json(request): Json<LppRequest>,
) -> std::result::Result<Json<mappers::Graphical2DResponse>, ApiError> {
    let problem = mappers::request_to_problem(&request)?;
    tracing::info!(
        constraints = problem.constraints.len(),
        "solving graphically in 2D"
    );

    let solution = solve_graphical_2d(&problem)?;
    tracing::info!(status = %solution.status, vertices = solution.vertices.len(), "2D enumeration finished");

    Ok(Json(mappers::graphical_to_2d_response(&solution)))
}

async fn solve_3d(
    Json(request): Json<LppRequest>,
) -> std::result::Result<Json<mappers::Graphical3DResponse>, ApiError> {
    let problem = mappers::request_to_problem(&request)?;
    tracing::info!(
        constraints = problem.constraints.len(),
        "solving graphically in 3D"
    );

    let solution = solve_graphical_3d(&problem)?;
    tracing::info!(status = %solution.status, vertices = solution.vertices.len(), "3D enumeration finished");

    Ok(Json(mappers::graphical_to_3d_response(&solution)))
}

/// Error envelope for the HTTP layer. Structural input errors become client
/// errors; everything else is a generic server error that never leaks
/// internal detail to the response.
pub struct ApiError(SolverError);

impl From<SolverError> for ApiError {
    fn from(error: SolverError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            SolverError::InvalidProblem(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("input data error: {message}") })),
            )
                .into_response(),
            error => {
                tracing::error!(error = %error, "solver failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "unexpected internal error while processing the problem" })),
                )
                    .into_response()
            }
        }
    }
}
