//! Demonstration scenario: three candidate plants, four candidate DCs,
//! ten customers. The tables are fixed, so every run of the demo binary
//! and the end-to-end tests works on the same network.

use crate::domain::{CustomerConfig, DcConfig, LaneConfig, NetworkConfig, PlantConfig};

const DC_IDS: [&str; 4] = ["D1", "D2", "D3", "D4"];

pub fn demo_config() -> NetworkConfig {
    let plants = vec![
        PlantConfig {
            id: "P1".into(),
            fixed_cost: 650_000.0,
            capacity: 50_000.0,
            jobs: 100.0,
            emission_per_unit: 1.8,
        },
        PlantConfig {
            id: "P2".into(),
            fixed_cost: 800_000.0,
            capacity: 70_000.0,
            jobs: 150.0,
            emission_per_unit: 1.2,
        },
        PlantConfig {
            id: "P3".into(),
            fixed_cost: 720_000.0,
            capacity: 60_000.0,
            jobs: 120.0,
            emission_per_unit: 1.5,
        },
    ];

    let dcs = vec![
        DcConfig {
            id: "D1".into(),
            fixed_cost: 200_000.0,
            capacity: 80_000.0,
            jobs: 40.0,
        },
        DcConfig {
            id: "D2".into(),
            fixed_cost: 250_000.0,
            capacity: 90_000.0,
            jobs: 55.0,
        },
        DcConfig {
            id: "D3".into(),
            fixed_cost: 220_000.0,
            capacity: 85_000.0,
            jobs: 50.0,
        },
        DcConfig {
            id: "D4".into(),
            fixed_cost: 180_000.0,
            capacity: 75_000.0,
            jobs: 35.0,
        },
    ];

    let customers = (0..10)
        .map(|i| CustomerConfig {
            id: format!("C{}", i + 1),
            demand: 8_000.0 + 500.0 * i as f64,
        })
        .collect();

    let inbound_costs: [(&str, [f64; 4]); 3] = [
        ("P1", [2.5, 3.1, 4.0, 5.0]),
        ("P2", [3.5, 2.8, 3.6, 4.2]),
        ("P3", [4.2, 3.9, 2.9, 3.3]),
    ];
    let mut plant_dc_lanes = Vec::with_capacity(12);
    for (plant, row) in inbound_costs {
        for (d, &cost) in row.iter().enumerate() {
            plant_dc_lanes.push(lane(plant, DC_IDS[d], cost));
        }
    }

    // outbound cost grows with both the DC index and the customer index
    let mut dc_customer_lanes = Vec::with_capacity(40);
    for (d, dc) in DC_IDS.iter().enumerate() {
        for c in 0..10 {
            let cost = 1.5 + 0.1 * d as f64 + 0.2 * c as f64;
            dc_customer_lanes.push(lane(dc, &format!("C{}", c + 1), cost));
        }
    }

    NetworkConfig {
        plants,
        dcs,
        customers,
        plant_dc_lanes,
        dc_customer_lanes,
    }
}

/// Transport emissions track transport cost at 0.1 kg CO2 per currency unit
fn lane(from: &str, to: &str, cost: f64) -> LaneConfig {
    LaneConfig {
        from: from.into(),
        to: to.into(),
        cost_per_unit: cost,
        emission_per_unit: cost * 0.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Network;

    #[test]
    fn demo_config_builds_a_complete_network() {
        let config = demo_config();
        assert_eq!(config.plant_dc_lanes.len(), 12);
        assert_eq!(config.dc_customer_lanes.len(), 40);

        let network = Network::from_config(&config).unwrap();
        assert_eq!(network.plants().len(), 3);
        assert_eq!(network.dcs().len(), 4);
        assert_eq!(network.customers().len(), 10);
        // 8000 + 8500 + ... + 12500
        assert_eq!(network.total_demand(), 102_500.0);
    }

    #[test]
    fn open_plant_capacity_covers_total_demand() {
        let network = Network::from_config(&demo_config()).unwrap();
        let plant_capacity: f64 = network.plants().iter().map(|p| p.capacity).sum();
        let dc_capacity: f64 = network.dcs().iter().map(|d| d.capacity).sum();
        assert!(plant_capacity >= network.total_demand());
        assert!(dc_capacity >= network.total_demand());
    }
}
