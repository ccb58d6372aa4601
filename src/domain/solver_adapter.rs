// Domain service interface for MILP solver backends.
// The engine only ever sees this contract; backend internals stay opaque.

use super::models::{MilpProblem, SolveOutcome};

/// Error types for solver backends
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    #[error("solver backend not available: {0}")]
    BackendUnavailable(String),

    #[error("solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract every solver backend must follow.
///
/// Implementations translate a [`MilpProblem`] into their native API,
/// run one synchronous solve, and report the outcome. Swapping backends
/// never touches the modeling or strategy layers.
pub trait SolverAdapter: Send + Sync {
    /// Solve a single MILP
    fn solve(&self, problem: &MilpProblem) -> Result<SolveOutcome>;

    /// Validate a problem's internal consistency without solving it
    fn validate(&self, problem: &MilpProblem) -> Result<()> {
        let mut errors = Vec::new();

        if problem.variables.is_empty() {
            errors.push("problem has no variables".to_string());
        }

        let num_vars = problem.num_variables();

        if problem.objective.len() != num_vars {
            errors.push(format!(
                "objective has {} coefficients but problem has {} variables",
                problem.objective.len(),
                num_vars
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.expr.len() != num_vars {
                errors.push(format!(
                    "constraint {} '{}' has {} coefficients but problem has {} variables",
                    i,
                    constraint.label,
                    constraint.expr.len(),
                    num_vars
                ));
            }
        }

        for (i, var) in problem.variables.iter().enumerate() {
            if let Some(upper) = var.upper {
                if var.lower > upper {
                    errors.push(format!(
                        "variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Name of this solver backend
    fn name(&self) -> &str;

    /// Whether this backend supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}
