use super::solver_adapter::SolverError;

/// Error taxonomy of the design engine.
///
/// Every failure is surfaced immediately to the caller; nothing is
/// swallowed or retried inside the engine. Filling omitted request
/// parameters with their documented defaults is the only automatic
/// behavior.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// Malformed or missing static configuration data
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unrecognized strategy tag in a request
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// The model admits no feasible design under this method
    #[error("model is infeasible under method '{method}'")]
    InfeasibleModel { method: String },

    /// The scalarized objective can be improved without bound
    #[error("model is unbounded under method '{method}'")]
    UnboundedModel { method: String },

    /// A later lexicographic phase failed after an earlier one succeeded
    #[error("lexicographic phase '{phase}' failed after earlier phases succeeded")]
    InfeasibleChain { phase: String },

    /// A solve exceeded the caller-supplied time limit; remaining phases
    /// were not attempted
    #[error("solver exceeded the time limit in phase '{phase}' of method '{method}'")]
    SolverTimeout { method: String, phase: String },

    /// Backend-level failure reported by the solver adapter
    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type DesignResult<T> = std::result::Result<T, DesignError>;
