// Domain layer: network data model, MILP vocabulary, solver contract,
// error taxonomy
pub mod domain;

// Model layer: decision variables, objective expressions, structural
// constraints
pub mod model;

// Strategy layer: the seven scalarization strategies
pub mod strategy;

// Application layer: request mapping and solve orchestration
pub mod application;

// Solver adapters: concrete SolverAdapter implementations
#[cfg(feature = "solvers")]
pub mod solver;

// Demo scenario and console report for the demo binary
pub mod demo_data;
pub mod report;

// Re-export commonly used types
pub use application::{DesignEngine, DesignRequest};

pub use domain::{
    ArcFlow, Constraint, Customer, CustomerConfig, DcConfig, DesignError, DesignResult,
    DistributionCenter, Lane, LaneConfig, LinearExpr, MilpProblem, Network, NetworkConfig,
    NetworkDesign, Plant, PlantConfig, Relation, Sense, SolveOutcome, SolveStatus, SolverAdapter,
    SolverBackend, SolverError, VarId, VarKind, Variable,
};

pub use model::{build_objectives, structural_constraints, NetworkVariables, Objectives};

pub use strategy::{
    EpsilonParams, GoalParams, SolvePhase, SolvePlan, Strategy, WeightedSumParams,
};

#[cfg(feature = "solvers")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
