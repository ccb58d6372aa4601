use crate::domain::{
    models::{MilpProblem, SolveOutcome},
    solver_adapter::{Result, SolverAdapter, SolverError},
    value_objects::{Relation, Sense, SolveStatus, VarKind},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};

/// COIN-OR CBC adapter via `good_lp`
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

impl SolverAdapter for CoinCbcSolver {
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome> {
        self.validate(problem)?;

        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(problem.num_variables());
        for def in &problem.variables {
            let lower = def.lower;
            let upper = def.upper.unwrap_or(f64::INFINITY);
            let var = match def.kind {
                VarKind::Binary => vars.add(variable().integer().min(lower).max(upper)),
                VarKind::Continuous => vars.add(variable().min(lower).max(upper)),
            };
            lp_variables.push(var);
        }

        // good_lp minimises; negate for a maximization phase and report
        // the objective from the original coefficients below
        let is_maximize = problem.sense == Sense::Maximize;
        let mut objective: Expression = 0.into();
        for (i, &coeff) in problem.objective.coefficients().iter().enumerate() {
            if coeff != 0.0 {
                let c = if is_maximize { -coeff } else { coeff };
                objective += c * lp_variables[i];
            }
        }

        let mut model = vars.minimise(objective).using(coin_cbc::coin_cbc);
        if let Some(limit) = problem.time_limit {
            model.set_parameter("sec", &limit.as_secs_f64().to_string());
        }
        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.expr.coefficients().iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }
            model = match constraint.relation {
                Relation::LessOrEqual => model.with(lhs.leq(constraint.bound)),
                Relation::Equal => model.with(lhs.eq(constraint.bound)),
                Relation::GreaterOrEqual => model.with(lhs.geq(constraint.bound)),
            };
        }

        match model.solve() {
            Ok(solution) => {
                let variable_values: Vec<f64> = lp_variables
                    .iter()
                    .map(|&var| solution.value(var))
                    .collect();
                let objective_value = problem.objective.evaluate(&variable_values);
                Ok(SolveOutcome::optimal(objective_value, variable_values))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::new(
                SolveStatus::Infeasible,
                "no assignment satisfies all constraints",
            )),
            Err(ResolutionError::Unbounded) => Ok(SolveOutcome::new(
                SolveStatus::Unbounded,
                "objective can be improved without bound",
            )),
            // CBC reports a limit stop as a generic interruption
            Err(other) if problem.time_limit.is_some() => Ok(SolveOutcome::new(
                SolveStatus::TimeLimit,
                format!("solve stopped: {other:?}"),
            )),
            Err(other) => Err(SolverError::ExecutionFailed(format!("{other:?}"))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
