//! Externally supplied network configuration.
//!
//! These are plain serde-friendly tables; how they are produced (files,
//! services, inline literals) is the caller's concern. Validation and
//! conversion into the immutable [`Network`](super::Network) happen in
//! [`Network::from_config`](super::Network::from_config).

use serde::{Deserialize, Serialize};

/// Candidate production plant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantConfig {
    pub id: String,
    /// One-time cost of opening the plant
    pub fixed_cost: f64,
    /// Maximum units the plant can ship per planning period
    pub capacity: f64,
    /// Headcount created if the plant opens
    pub jobs: f64,
    /// kg CO2 emitted per unit produced
    pub emission_per_unit: f64,
}

/// Candidate distribution center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcConfig {
    pub id: String,
    pub fixed_cost: f64,
    /// Maximum units the DC can handle per planning period
    pub capacity: f64,
    pub jobs: f64,
}

/// Customer with fixed demand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerConfig {
    pub id: String,
    pub demand: f64,
}

/// One transport arc of either bipartite layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneConfig {
    pub from: String,
    pub to: String,
    pub cost_per_unit: f64,
    pub emission_per_unit: f64,
}

/// Complete static description of the candidate network.
///
/// Both lane tables must be exhaustive: every plant→DC pair and every
/// DC→customer pair needs exactly one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub plants: Vec<PlantConfig>,
    pub dcs: Vec<DcConfig>,
    pub customers: Vec<CustomerConfig>,
    pub plant_dc_lanes: Vec<LaneConfig>,
    pub dc_customer_lanes: Vec<LaneConfig>,
}
