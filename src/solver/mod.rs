// Solver adapters: concrete SolverAdapter implementations

pub mod coin_cbc_solver;
pub mod factory;
pub mod highs_solver;

pub use coin_cbc_solver::CoinCbcSolver;
pub use factory::SolverFactory;
pub use highs_solver::HighsSolver;
