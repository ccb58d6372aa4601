use std::collections::BTreeSet;

use serde::Serialize;

use super::value_objects::SolveStatus;

/// Routed quantity on one transport arc of the final design
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcFlow {
    pub from: String,
    pub to: String,
    pub quantity: f64,
}

/// Final network design returned to the caller.
///
/// The three totals are always the evaluations of the base cost,
/// emissions, and jobs expressions on the solved assignment, regardless
/// of which scalarized objective the strategy actually optimized.
/// `flows` lists arcs in network order (plant→DC layer first), with
/// near-zero quantities dropped.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkDesign {
    pub method: String,
    pub status: SolveStatus,
    pub total_cost: f64,
    pub total_emissions: f64,
    pub total_jobs: f64,
    pub open_plants: BTreeSet<String>,
    pub open_dcs: BTreeSet<String>,
    pub flows: Vec<ArcFlow>,
}

impl NetworkDesign {
    /// Routed quantity from `from` to `to`, zero if the arc carries none
    pub fn flow_between(&self, from: &str, to: &str) -> f64 {
        self.flows
            .iter()
            .find(|f| f.from == from && f.to == to)
            .map(|f| f.quantity)
            .unwrap_or(0.0)
    }
}
