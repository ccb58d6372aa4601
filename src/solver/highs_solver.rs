// HiGHS adapter: translates a MilpProblem into the HiGHS row-problem
// API and maps the model status back onto the solve contract.

use crate::domain::{
    models::{MilpProblem, SolveOutcome},
    solver_adapter::{Result, SolverAdapter, SolverError},
    value_objects::{Relation, Sense, SolveStatus, VarKind},
};
use highs::{HighsModelStatus, RowProblem, Sense as HighsSense};

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

impl SolverAdapter for HighsSolver {
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome> {
        self.validate(problem)?;

        let mut pb = RowProblem::default();
        let mut columns = Vec::with_capacity(problem.num_variables());
        for (i, def) in problem.variables.iter().enumerate() {
            let lower = def.lower;
            let upper = def.upper.unwrap_or(f64::INFINITY);
            let obj_coeff = problem
                .objective
                .coefficients()
                .get(i)
                .copied()
                .unwrap_or(0.0);
            let column = match def.kind {
                VarKind::Binary => pb.add_integer_column(obj_coeff, lower..upper),
                VarKind::Continuous => pb.add_column(obj_coeff, lower..upper),
            };
            columns.push(column);
        }

        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.expr.coefficients().iter().enumerate() {
                if coeff != 0.0 && i < columns.len() {
                    terms.push((columns[i], coeff));
                }
            }
            match constraint.relation {
                Relation::LessOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                Relation::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                Relation::GreaterOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let sense = if problem.sense == Sense::Maximize {
            HighsSense::Maximise
        } else {
            HighsSense::Minimise
        };
        let mut model = pb.optimise(sense);
        if let Some(limit) = problem.time_limit {
            model.set_option("time_limit", limit.as_secs_f64());
        }

        let solved = model.solve();
        match solved.status() {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();
                let objective_value = problem.objective.evaluate(&variable_values);
                Ok(SolveOutcome::optimal(objective_value, variable_values))
            }
            HighsModelStatus::Infeasible => Ok(SolveOutcome::new(
                SolveStatus::Infeasible,
                "no assignment satisfies all constraints",
            )),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => Ok(
                SolveOutcome::new(
                    SolveStatus::Unbounded,
                    "objective can be improved without bound",
                ),
            ),
            HighsModelStatus::ReachedTimeLimit => Ok(SolveOutcome::new(
                SolveStatus::TimeLimit,
                "time limit reached before proving optimality",
            )),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS returned status: {status:?}"
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
