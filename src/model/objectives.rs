//! Builds the three competing objective expressions from the network
//! data and the decision variables. All builders are deterministic pure
//! functions of their inputs.

use crate::domain::{LinearExpr, Network};

use super::variables::NetworkVariables;

/// The three objective expressions of the design model
#[derive(Debug, Clone)]
pub struct Objectives {
    pub cost: LinearExpr,
    pub emissions: LinearExpr,
    pub jobs: LinearExpr,
}

pub fn build_objectives(network: &Network, vars: &NetworkVariables) -> Objectives {
    Objectives {
        cost: cost_expression(network, vars),
        emissions: emissions_expression(network, vars),
        jobs: jobs_expression(network, vars),
    }
}

/// Total monetary cost: fixed opening costs of open facilities plus
/// per-unit transport cost over every arc.
pub fn cost_expression(network: &Network, vars: &NetworkVariables) -> LinearExpr {
    let mut expr = LinearExpr::with_capacity(vars.len());
    for (p, plant) in network.plants().iter().enumerate() {
        expr.add_term(vars.open_plant(p), plant.fixed_cost);
    }
    for (d, dc) in network.dcs().iter().enumerate() {
        expr.add_term(vars.open_dc(d), dc.fixed_cost);
    }
    for p in 0..network.plants().len() {
        for d in 0..network.dcs().len() {
            expr.add_term(
                vars.flow_plant_dc(p, d),
                network.plant_dc_lane(p, d).cost_per_unit,
            );
        }
    }
    for d in 0..network.dcs().len() {
        for c in 0..network.customers().len() {
            expr.add_term(
                vars.flow_dc_customer(d, c),
                network.dc_customer_lane(d, c).cost_per_unit,
            );
        }
    }
    expr
}

/// Total carbon emissions: production emissions on plant outflow plus
/// transport emissions over every arc.
pub fn emissions_expression(network: &Network, vars: &NetworkVariables) -> LinearExpr {
    let mut expr = LinearExpr::with_capacity(vars.len());
    for (p, plant) in network.plants().iter().enumerate() {
        for d in 0..network.dcs().len() {
            expr.add_term(vars.flow_plant_dc(p, d), plant.emission_per_unit);
        }
    }
    for p in 0..network.plants().len() {
        for d in 0..network.dcs().len() {
            expr.add_term(
                vars.flow_plant_dc(p, d),
                network.plant_dc_lane(p, d).emission_per_unit,
            );
        }
    }
    for d in 0..network.dcs().len() {
        for c in 0..network.customers().len() {
            expr.add_term(
                vars.flow_dc_customer(d, c),
                network.dc_customer_lane(d, c).emission_per_unit,
            );
        }
    }
    expr
}

/// Jobs created: per-facility headcount on the open indicators.
pub fn jobs_expression(network: &Network, vars: &NetworkVariables) -> LinearExpr {
    let mut expr = LinearExpr::with_capacity(vars.len());
    for (p, plant) in network.plants().iter().enumerate() {
        expr.add_term(vars.open_plant(p), plant.jobs);
    }
    for (d, dc) in network.dcs().iter().enumerate() {
        expr.add_term(vars.open_dc(d), dc.jobs);
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data;

    fn demo() -> (Network, NetworkVariables) {
        let network = Network::from_config(&demo_data::demo_config()).unwrap();
        let vars = NetworkVariables::new(&network);
        (network, vars)
    }

    #[test]
    fn cost_coefficients_match_the_demo_tables() {
        let (network, vars) = demo();
        let cost = cost_expression(&network, &vars);

        assert_eq!(cost.coefficient(vars.open_plant(0)), 650_000.0);
        assert_eq!(cost.coefficient(vars.open_dc(1)), 250_000.0);
        assert_eq!(cost.coefficient(vars.flow_plant_dc(0, 0)), 2.5);
        assert_eq!(cost.coefficient(vars.flow_plant_dc(2, 3)), 3.3);
        // D2→C3: 1.5 + 1*0.1 + 2*0.2
        assert!((cost.coefficient(vars.flow_dc_customer(1, 2)) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn emissions_combine_production_and_transport() {
        let (network, vars) = demo();
        let emissions = emissions_expression(&network, &vars);

        // P1→D1: production 1.8 + transport 0.1 * 2.5
        assert!((emissions.coefficient(vars.flow_plant_dc(0, 0)) - 2.05).abs() < 1e-12);
        // no production term on the outbound layer
        let d1_c1 = emissions.coefficient(vars.flow_dc_customer(0, 0));
        assert!((d1_c1 - 0.15).abs() < 1e-12);
        // open indicators carry no emissions
        assert_eq!(emissions.coefficient(vars.open_plant(0)), 0.0);
    }

    #[test]
    fn jobs_sit_on_the_open_indicators_only() {
        let (network, vars) = demo();
        let jobs = jobs_expression(&network, &vars);

        assert_eq!(jobs.coefficient(vars.open_plant(1)), 150.0);
        assert_eq!(jobs.coefficient(vars.open_dc(2)), 50.0);
        assert_eq!(jobs.coefficient(vars.flow_plant_dc(0, 0)), 0.0);
    }

    #[test]
    fn builders_are_deterministic() {
        let (network, vars) = demo();
        assert_eq!(
            cost_expression(&network, &vars),
            cost_expression(&network, &vars)
        );
        assert_eq!(
            emissions_expression(&network, &vars),
            emissions_expression(&network, &vars)
        );
    }
}
