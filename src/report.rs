//! Plain-text rendering of a finished design, used by the demo binary.

use std::fmt::Write;

use crate::domain::NetworkDesign;

pub fn render_design(design: &NetworkDesign) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", design.method);
    let _ = writeln!(out, "Status: {}", design.status);
    let _ = writeln!(out, "Total cost      = {:>14.2}", design.total_cost);
    let _ = writeln!(out, "Total emissions = {:>14.2} kg CO2", design.total_emissions);
    let _ = writeln!(out, "Total jobs      = {:>14.0}", design.total_jobs);

    let _ = writeln!(out, "Network configuration:");
    for plant in &design.open_plants {
        let _ = writeln!(out, "  plant {plant} is OPEN");
    }
    for dc in &design.open_dcs {
        let _ = writeln!(out, "  DC {dc} is OPEN");
    }
    let _ = writeln!(out, "Flows:");
    for flow in &design.flows {
        let _ = writeln!(out, "  {} -> {:<4} {:>10.1}", flow.from, flow.to, flow.quantity);
    }
    out
}

pub fn print_design(design: &NetworkDesign) {
    println!("{}", render_design(design));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArcFlow, SolveStatus};
    use std::collections::BTreeSet;

    #[test]
    fn report_lists_totals_open_facilities_and_flows() {
        let design = NetworkDesign {
            method: "cost_optimal".into(),
            status: SolveStatus::Optimal,
            total_cost: 1_234_567.891,
            total_emissions: 98_765.4,
            total_jobs: 190.0,
            open_plants: BTreeSet::from(["P2".to_string()]),
            open_dcs: BTreeSet::from(["D1".to_string(), "D4".to_string()]),
            flows: vec![ArcFlow {
                from: "P2".into(),
                to: "D1".into(),
                quantity: 42_000.0,
            }],
        };

        let report = render_design(&design);
        assert!(report.contains("--- cost_optimal ---"));
        assert!(report.contains("Status: Optimal"));
        assert!(report.contains("1234567.89"));
        assert!(report.contains("plant P2 is OPEN"));
        assert!(report.contains("DC D4 is OPEN"));
        assert!(report.contains("P2 -> D1"));
    }
}
