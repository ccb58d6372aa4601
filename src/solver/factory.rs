use crate::domain::{solver_adapter::SolverAdapter, value_objects::SolverBackend};
use crate::solver::{CoinCbcSolver, HighsSolver};
use std::sync::Arc;

/// Creates solver adapters from a backend selection
pub struct SolverFactory;

impl SolverFactory {
    pub fn create(backend: SolverBackend) -> Arc<dyn SolverAdapter> {
        match backend {
            SolverBackend::Auto | SolverBackend::Highs => Arc::new(HighsSolver::new()),
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
        }
    }

    /// The default backend (HiGHS)
    pub fn default_solver() -> Arc<dyn SolverAdapter> {
        Arc::new(HighsSolver::new())
    }
}
