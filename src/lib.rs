// Domain layer: Business logic and models
pub mod domain;

// Graphical engine: feasible-region vertex enumeration (the core)
pub mod graphical;

// Application layer: Wire formats and endpoint handlers
pub mod application;

// Infrastructure layer: External concerns (HTTP server)
#[cfg(feature = "server")]
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
#[cfg(feature = "server")]
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintType, LinearExpression, ObjectiveFunction, OptimizationProblem,
    OptimizationType, Solution, SolutionStatus, SolverBackend, SolverConfig, SolverError,
    SolverService,
};

pub use graphical::{
    convex_hull, solve_graphical_2d, solve_graphical_3d, GraphicalSolution, Vertex,
};

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};

#[cfg(feature = "server")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
