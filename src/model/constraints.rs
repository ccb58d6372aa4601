//! Structural constraints every strategy shares: demand satisfaction,
//! DC flow conservation, and capacity linkage to the open indicators.
//! Strategy-specific constraints (ε bounds, goal deviations, pins) are
//! layered on top by the strategy and engine layers.

use crate::domain::{Constraint, LinearExpr, Network, Relation};

use super::variables::NetworkVariables;

pub fn structural_constraints(network: &Network, vars: &NetworkVariables) -> Vec<Constraint> {
    let num_plants = network.plants().len();
    let num_dcs = network.dcs().len();
    let num_customers = network.customers().len();

    let mut constraints =
        Vec::with_capacity(num_customers + num_dcs + num_plants + num_dcs);

    // every customer's inbound flow equals its demand exactly
    for (c, customer) in network.customers().iter().enumerate() {
        let mut expr = LinearExpr::with_capacity(vars.len());
        for d in 0..num_dcs {
            expr.add_term(vars.flow_dc_customer(d, c), 1.0);
        }
        constraints.push(
            Constraint::new(expr, Relation::Equal, customer.demand)
                .labeled(format!("demand_{}", customer.id)),
        );
    }

    // DC inbound equals DC outbound
    for (d, dc) in network.dcs().iter().enumerate() {
        let mut expr = LinearExpr::with_capacity(vars.len());
        for p in 0..num_plants {
            expr.add_term(vars.flow_plant_dc(p, d), 1.0);
        }
        for c in 0..num_customers {
            expr.add_term(vars.flow_dc_customer(d, c), -1.0);
        }
        constraints.push(
            Constraint::new(expr, Relation::Equal, 0.0)
                .labeled(format!("conservation_{}", dc.id)),
        );
    }

    // facility throughput at most capacity, and zero when closed
    for (p, plant) in network.plants().iter().enumerate() {
        let mut expr = LinearExpr::with_capacity(vars.len());
        for d in 0..num_dcs {
            expr.add_term(vars.flow_plant_dc(p, d), 1.0);
        }
        expr.add_term(vars.open_plant(p), -plant.capacity);
        constraints.push(
            Constraint::new(expr, Relation::LessOrEqual, 0.0)
                .labeled(format!("capacity_{}", plant.id)),
        );
    }
    for (d, dc) in network.dcs().iter().enumerate() {
        let mut expr = LinearExpr::with_capacity(vars.len());
        for c in 0..num_customers {
            expr.add_term(vars.flow_dc_customer(d, c), 1.0);
        }
        expr.add_term(vars.open_dc(d), -dc.capacity);
        constraints.push(
            Constraint::new(expr, Relation::LessOrEqual, 0.0)
                .labeled(format!("capacity_{}", dc.id)),
        );
    }

    constraints
}
