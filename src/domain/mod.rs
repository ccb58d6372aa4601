// Domain module: network data model, MILP vocabulary, solver contract,
// and the engine's error taxonomy

pub mod config;
pub mod design;
pub mod errors;
pub mod models;
pub mod network;
pub mod solver_adapter;
pub mod value_objects;

pub use config::*;
pub use design::*;
pub use errors::*;
pub use models::*;
pub use network::*;
pub use solver_adapter::{SolverAdapter, SolverError};
pub use value_objects::*;
