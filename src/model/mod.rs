// Model layer: decision variables, objective expressions, and the
// structural constraints shared by every strategy

pub mod constraints;
pub mod objectives;
pub mod variables;

pub use constraints::structural_constraints;
pub use objectives::{
    build_objectives, cost_expression, emissions_expression, jobs_expression, Objectives,
};
pub use variables::NetworkVariables;
