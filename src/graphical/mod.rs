// Graphical engine: feasible-region vertex enumeration for 2- and 3-variable
// problems. One shared pipeline, two concrete entry points.

pub mod dedup;
pub mod feasible;
pub mod hull;
pub mod intersect;
pub mod pipeline;

pub use hull::convex_hull;
pub use pipeline::{solve_graphical_2d, solve_graphical_3d, GraphicalSolution, Vertex};

/// Below this determinant magnitude a boundary system is treated as
/// parallel/coincident and contributes no candidate vertex.
pub(crate) const DET_TOLERANCE: f64 = 1e-9;

/// Slack allowed when testing a candidate point against a constraint.
/// Absorbs round-off from the Cramer's-rule division; deliberately distinct
/// from [`DET_TOLERANCE`].
pub(crate) const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Decimal digits used for the rounding-based vertex equality in the
/// deduplication stage. Distinct from both tolerances above.
pub(crate) const DEDUP_DECIMALS: i32 = 5;
