// Domain value objects representing core business concepts

use std::fmt;

/// Type of constraint comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// Less than or equal (≤)
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

impl ConstraintType {
    /// Parse a wire-format relation token (`<=`, `>=`, `=`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<=" => Some(ConstraintType::LessThanOrEqual),
            "=" => Some(ConstraintType::Equal),
            ">=" => Some(ConstraintType::GreaterThanOrEqual),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ConstraintType::LessThanOrEqual => "<=",
            ConstraintType::Equal => "=",
            ConstraintType::GreaterThanOrEqual => ">=",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationType {
    /// Minimize the objective function
    Minimize,
    /// Maximize the objective function
    Maximize,
}

impl OptimizationType {
    /// Normalize a request's optimization-type string.
    ///
    /// Matching is case-insensitive and whitespace-trimmed. The recognized
    /// maximize synonyms are `max`, `maximize` and `maximization`; any other
    /// value (including the empty string) means minimize. The normalization
    /// runs once at the request boundary and every later stage reuses the
    /// result.
    pub fn from_request(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "max" | "maximize" | "maximization" => OptimizationType::Maximize,
            _ => OptimizationType::Minimize,
        }
    }

    pub fn is_maximize(&self) -> bool {
        *self == OptimizationType::Maximize
    }
}

/// Status of the optimization solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Solver error occurred
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Error => write!(f, "Error"),
        }
    }
}

/// Solver backend to use for the numerical path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverBackend {
    /// Automatically select best solver
    #[default]
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl SolverBackend {
    /// Normalize a request's backend string; unrecognized values fall back
    /// to automatic selection.
    pub fn from_request(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cbc" | "coin_cbc" | "coincbc" => SolverBackend::CoinCbc,
            "highs" => SolverBackend::Highs,
            _ => SolverBackend::Auto,
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}
