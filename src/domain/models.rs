use super::value_objects::{ConstraintType, OptimizationType, SolutionStatus, SolverBackend};

/// Ordered coefficient vector of a linear form, one entry per decision
/// variable. The length is validated against the problem's declared variable
/// count before use.
pub type LinearExpression = Vec<f64>;

/// Objective function to minimize or maximize
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: LinearExpression,
    pub variable_names: Vec<String>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: LinearExpression) -> Self {
        // Conventional axis-order names: x1, x2, ...
        let variable_names = (0..coefficients.len())
            .map(|i| format!("x{}", i + 1))
            .collect();

        Self {
            optimization_type,
            coefficients,
            variable_names,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Linear constraint on variables
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: LinearExpression,
    pub bound: f64,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: LinearExpression, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
        }
    }

    /// Synthetic non-negativity constraint for one axis: coefficient 1 on
    /// `axis`, 0 elsewhere, `>= 0`. Appended to the user constraints so the
    /// graphical method sees the axis bounds as real boundaries.
    pub fn non_negativity(axis: usize, dimension: usize) -> Self {
        let mut coefficients = vec![0.0; dimension];
        coefficients[axis] = 1.0;
        Self::new(ConstraintType::GreaterThanOrEqual, coefficients, 0.0)
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Configuration for the numerical solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

/// Complete optimization problem
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub solver_config: SolverConfig,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
            solver_config: SolverConfig::default(),
        }
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }
}

/// Solution to an optimization problem, as reported by a solver backend
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: f64,
    pub variable_values: Vec<f64>,
    pub message: String,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: 0.0,
            variable_values: Vec::new(),
            message: message.into(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: value,
            variable_values,
            message: "Optimal solution found".to_string(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_names_variables_in_axis_order() {
        let objective = ObjectiveFunction::new(OptimizationType::Maximize, vec![3.0, 2.0, 1.0]);
        assert_eq!(objective.variable_names, vec!["x1", "x2", "x3"]);
    }

    #[test]
    fn non_negativity_constraint_shape() {
        let constraint = Constraint::non_negativity(1, 3);
        assert_eq!(constraint.coefficients, vec![0.0, 1.0, 0.0]);
        assert_eq!(constraint.constraint_type, ConstraintType::GreaterThanOrEqual);
        assert_eq!(constraint.bound, 0.0);
    }
}
