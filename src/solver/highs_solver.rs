// HiGHS Solver Adapter
// Implements the SolverService interface for HiGHS
// This is an adapter pattern - translates our domain models to HiGHS API

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, SolutionStatus as DomainSolutionStatus},
};

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        // Use HiGHS RowProblem (add variables first, then constraints)
        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let mut vars = Vec::new();

        // One continuous non-negative column per objective coefficient
        for &coeff in problem.objective.coefficients.iter() {
            vars.push(pb.add_column(coeff, 0..));
        }

        // Add constraints
        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < vars.len() {
                    terms.push((vars[i], coeff));
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        // Solve the problem
        let sense = if problem.objective.optimization_type.is_maximize() {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let solved = pb.optimise(sense).solve();

        // Process result
        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                let variable_values = solution_data.columns().to_vec();

                let mut actual_obj = 0.0;
                for (i, &val) in variable_values.iter().enumerate() {
                    if let Some(&coeff) = problem.objective.coefficients.get(i) {
                        actual_obj += coeff * val;
                    }
                }

                Ok(DomainSolution::optimal(actual_obj, variable_values))
            }
            HighsModelStatus::Infeasible => Ok(DomainSolution::new(
                DomainSolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(DomainSolution::new(
                    DomainSolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                ))
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
