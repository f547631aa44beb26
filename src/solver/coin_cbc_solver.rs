use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, SolutionStatus as DomainSolutionStatus},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        // Validate first
        self.validate(problem)?;

        let num_vars = problem.num_variables();

        // One continuous non-negative decision variable per objective
        // coefficient
        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::new();
        for _ in 0..num_vars {
            lp_variables.push(vars.add(variable().min(0.0)));
        }

        // Build objective expression
        let is_maximize = problem.objective.optimization_type.is_maximize();
        let mut obj_expr: Expression = 0.into();
        for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
            if coeff != 0.0 {
                // good_lp minimizes, so negate for maximization
                let c = if is_maximize { -coeff } else { coeff };
                obj_expr += c * lp_variables[i];
            }
        }

        // Build constraints
        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    lp_model = lp_model.with(lhs.leq(constraint.bound));
                }
                ConstraintType::Equal => {
                    lp_model = lp_model.with(lhs.eq(constraint.bound));
                }
                ConstraintType::GreaterThanOrEqual => {
                    lp_model = lp_model.with(lhs.geq(constraint.bound));
                }
            }
        }

        // Solve the problem
        match lp_model.solve() {
            Ok(sol) => {
                // Extract variable values
                let mut variable_values = vec![0.0; num_vars];
                for (i, &var) in lp_variables.iter().enumerate() {
                    variable_values[i] = sol.value(var);
                }

                // Report the objective in the caller's sense, not the
                // negated one handed to the backend
                let mut actual_obj = 0.0;
                for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
                    actual_obj += coeff * variable_values[i];
                }

                Ok(DomainSolution::optimal(actual_obj, variable_values))
            }
            Err(ResolutionError::Infeasible) => Ok(DomainSolution::new(
                DomainSolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )),
            Err(ResolutionError::Unbounded) => Ok(DomainSolution::new(
                DomainSolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            )),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
