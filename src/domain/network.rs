use std::collections::{HashMap, HashSet};

use super::config::{LaneConfig, NetworkConfig};
use super::errors::{DesignError, DesignResult};

/// Candidate production plant
#[derive(Debug, Clone)]
pub struct Plant {
    pub id: String,
    pub fixed_cost: f64,
    pub capacity: f64,
    pub jobs: f64,
    /// kg CO2 emitted per unit produced
    pub emission_per_unit: f64,
}

/// Candidate distribution center
#[derive(Debug, Clone)]
pub struct DistributionCenter {
    pub id: String,
    pub fixed_cost: f64,
    pub capacity: f64,
    pub jobs: f64,
}

/// Customer with fixed demand
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: String,
    pub demand: f64,
}

/// Per-unit cost and emission of one transport arc
#[derive(Debug, Clone, Copy)]
pub struct Lane {
    pub cost_per_unit: f64,
    pub emission_per_unit: f64,
}

/// Immutable description of the candidate network.
///
/// Lanes are stored as dense row-major matrices: the plant→DC layer is
/// indexed `plant * num_dcs + dc`, the DC→customer layer
/// `dc * num_customers + customer`. Construction goes through
/// [`Network::from_config`], which guarantees both layers are complete,
/// so lane lookups past that boundary cannot miss.
#[derive(Debug, Clone)]
pub struct Network {
    plants: Vec<Plant>,
    dcs: Vec<DistributionCenter>,
    customers: Vec<Customer>,
    plant_dc_lanes: Vec<Lane>,
    dc_customer_lanes: Vec<Lane>,
}

impl Network {
    /// Validates a configuration and builds the immutable network.
    ///
    /// Rejected with [`DesignError::Configuration`]: empty facility or
    /// customer sets, duplicate identifiers, negative or non-finite
    /// numeric entries, lanes referencing unknown endpoints, duplicate
    /// lanes, and incomplete lane tables.
    pub fn from_config(config: &NetworkConfig) -> DesignResult<Self> {
        if config.plants.is_empty() {
            return Err(DesignError::Configuration(
                "at least one candidate plant is required".into(),
            ));
        }
        if config.dcs.is_empty() {
            return Err(DesignError::Configuration(
                "at least one candidate distribution center is required".into(),
            ));
        }
        if config.customers.is_empty() {
            return Err(DesignError::Configuration(
                "at least one customer is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        let all_ids = config
            .plants
            .iter()
            .map(|p| p.id.as_str())
            .chain(config.dcs.iter().map(|d| d.id.as_str()))
            .chain(config.customers.iter().map(|c| c.id.as_str()));
        for id in all_ids {
            if !seen.insert(id) {
                return Err(DesignError::Configuration(format!(
                    "duplicate identifier '{id}'"
                )));
            }
        }

        for plant in &config.plants {
            check_value(plant.fixed_cost, "fixed cost", &plant.id)?;
            check_value(plant.capacity, "capacity", &plant.id)?;
            check_value(plant.jobs, "job count", &plant.id)?;
            check_value(plant.emission_per_unit, "production emission factor", &plant.id)?;
        }
        for dc in &config.dcs {
            check_value(dc.fixed_cost, "fixed cost", &dc.id)?;
            check_value(dc.capacity, "capacity", &dc.id)?;
            check_value(dc.jobs, "job count", &dc.id)?;
        }
        for customer in &config.customers {
            check_value(customer.demand, "demand", &customer.id)?;
        }

        let plant_ids: Vec<&str> = config.plants.iter().map(|p| p.id.as_str()).collect();
        let dc_ids: Vec<&str> = config.dcs.iter().map(|d| d.id.as_str()).collect();
        let customer_ids: Vec<&str> = config.customers.iter().map(|c| c.id.as_str()).collect();

        let plant_dc_lanes = build_lane_matrix(
            &config.plant_dc_lanes,
            &plant_ids,
            &dc_ids,
            "plant→DC",
        )?;
        let dc_customer_lanes = build_lane_matrix(
            &config.dc_customer_lanes,
            &dc_ids,
            &customer_ids,
            "DC→customer",
        )?;

        Ok(Self {
            plants: config
                .plants
                .iter()
                .map(|p| Plant {
                    id: p.id.clone(),
                    fixed_cost: p.fixed_cost,
                    capacity: p.capacity,
                    jobs: p.jobs,
                    emission_per_unit: p.emission_per_unit,
                })
                .collect(),
            dcs: config
                .dcs
                .iter()
                .map(|d| DistributionCenter {
                    id: d.id.clone(),
                    fixed_cost: d.fixed_cost,
                    capacity: d.capacity,
                    jobs: d.jobs,
                })
                .collect(),
            customers: config
                .customers
                .iter()
                .map(|c| Customer {
                    id: c.id.clone(),
                    demand: c.demand,
                })
                .collect(),
            plant_dc_lanes,
            dc_customer_lanes,
        })
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn dcs(&self) -> &[DistributionCenter] {
        &self.dcs
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn plant_dc_lane(&self, plant: usize, dc: usize) -> &Lane {
        &self.plant_dc_lanes[plant * self.dcs.len() + dc]
    }

    pub fn dc_customer_lane(&self, dc: usize, customer: usize) -> &Lane {
        &self.dc_customer_lanes[dc * self.customers.len() + customer]
    }

    pub fn total_demand(&self) -> f64 {
        self.customers.iter().map(|c| c.demand).sum()
    }
}

fn check_value(value: f64, what: &str, id: &str) -> DesignResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DesignError::Configuration(format!(
            "{what} for '{id}' must be a finite nonnegative number, got {value}"
        )));
    }
    Ok(())
}

fn build_lane_matrix(
    lanes: &[LaneConfig],
    from_ids: &[&str],
    to_ids: &[&str],
    layer: &str,
) -> DesignResult<Vec<Lane>> {
    let from_index: HashMap<&str, usize> = from_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let to_index: HashMap<&str, usize> = to_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let mut matrix: Vec<Option<Lane>> = vec![None; from_ids.len() * to_ids.len()];
    for lane in lanes {
        let from = *from_index.get(lane.from.as_str()).ok_or_else(|| {
            DesignError::Configuration(format!(
                "{layer} lane references unknown origin '{}'",
                lane.from
            ))
        })?;
        let to = *to_index.get(lane.to.as_str()).ok_or_else(|| {
            DesignError::Configuration(format!(
                "{layer} lane references unknown destination '{}'",
                lane.to
            ))
        })?;
        check_value(lane.cost_per_unit, "transport cost", &format!("{}→{}", lane.from, lane.to))?;
        check_value(
            lane.emission_per_unit,
            "transport emission factor",
            &format!("{}→{}", lane.from, lane.to),
        )?;

        let slot = &mut matrix[from * to_ids.len() + to];
        if slot.is_some() {
            return Err(DesignError::Configuration(format!(
                "duplicate {layer} lane {}→{}",
                lane.from, lane.to
            )));
        }
        *slot = Some(Lane {
            cost_per_unit: lane.cost_per_unit,
            emission_per_unit: lane.emission_per_unit,
        });
    }

    matrix
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| {
                let from = from_ids[index / to_ids.len()];
                let to = to_ids[index % to_ids.len()];
                DesignError::Configuration(format!("missing {layer} lane {from}→{to}"))
            })
        })
        .collect()
}
