// Domain service interface for solving optimization problems
// Defines the contract that any solver implementation must follow (Dependency Inversion Principle)

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
///
/// This trait defines the contract that all solver implementations must follow.
/// It allows us to swap solver backends without changing business logic (Open/Closed Principle).
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem's structure without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = problem.num_variables();

        // The graphical method and the numerical path both assume at least
        // two decision variables
        if num_vars < 2 {
            errors.push("identify at least two variables".to_string());
        }

        // Check constraints match the objective
        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} has {} coefficients but problem has {} variables",
                    i,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}
