use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{
    ArcFlow, Constraint, DesignError, DesignResult, MilpProblem, Network, NetworkDesign, Relation,
    Sense, SolveOutcome, SolveStatus, SolverAdapter, SolverError,
};
use crate::model::{build_objectives, structural_constraints, NetworkVariables, Objectives};
use crate::strategy::{SolvePhase, Strategy};

use super::request::DesignRequest;

/// Flows below this are solver noise and are dropped from the response
const FLOW_EPSILON: f64 = 1e-6;

/// Runs one strategy request end to end.
///
/// Every call builds its own decision variables and constraint set from
/// the immutable network, so an engine shared between callers cannot
/// leak model state between requests. Within one call, phases run
/// strictly in order; a lexicographic chain accumulates its pin
/// constraints privately.
pub struct DesignEngine {
    solver: Arc<dyn SolverAdapter>,
}

impl DesignEngine {
    pub fn new(solver: Arc<dyn SolverAdapter>) -> Self {
        Self { solver }
    }

    /// Resolves an untyped request and runs it
    pub fn run_request(
        &self,
        network: &Network,
        request: &DesignRequest,
        timeout: Option<Duration>,
    ) -> DesignResult<NetworkDesign> {
        let strategy = request.to_strategy()?;
        self.run(network, &strategy, timeout)
    }

    /// Runs a typed strategy against the network
    pub fn run(
        &self,
        network: &Network,
        strategy: &Strategy,
        timeout: Option<Duration>,
    ) -> DesignResult<NetworkDesign> {
        let method = strategy.method();

        let mut vars = NetworkVariables::new(network);
        let objectives = build_objectives(network, &vars);
        let mut accumulated = structural_constraints(network, &vars);
        let plan = strategy.plan(&objectives, &mut vars);
        debug!(
            method,
            variables = vars.len(),
            constraints = accumulated.len(),
            phases = plan.phases.len(),
            solver = self.solver.name(),
            "model built"
        );

        let num_phases = plan.phases.len();
        let mut last: Option<SolveOutcome> = None;
        for (index, phase) in plan.phases.into_iter().enumerate() {
            let outcome =
                self.run_phase(method, &vars, &accumulated, &phase, index, num_phases, timeout)?;
            if phase.pin_after {
                let achieved = outcome.objective_value.ok_or_else(|| {
                    SolverError::ExecutionFailed(format!(
                        "optimal solve of phase '{}' reported no objective value",
                        phase.label
                    ))
                })?;
                accumulated.push(pin_constraint(&phase, achieved));
            }
            last = Some(outcome);
        }

        let outcome = last.ok_or_else(|| {
            DesignError::Configuration(format!("method '{method}' produced an empty solve plan"))
        })?;
        Ok(assemble_design(network, &vars, &objectives, method, &outcome))
    }

    #[allow(clippy::too_many_arguments)]
    fn run_phase(
        &self,
        method: &str,
        vars: &NetworkVariables,
        accumulated: &[Constraint],
        phase: &SolvePhase,
        index: usize,
        num_phases: usize,
        timeout: Option<Duration>,
    ) -> DesignResult<SolveOutcome> {
        let problem = MilpProblem::new(
            format!("{method}/{}", phase.label),
            vars.defs().to_vec(),
            phase.objective.clone(),
            phase.sense,
        )
        .with_constraints(accumulated.iter().cloned())
        .with_constraints(phase.extra_constraints.iter().cloned())
        .with_time_limit(timeout);

        let outcome = self.solver.solve(&problem)?;
        info!(
            method,
            phase = %phase.label,
            step = index + 1,
            of = num_phases,
            status = %outcome.status,
            objective = ?outcome.objective_value,
            "phase solved"
        );

        match outcome.status {
            SolveStatus::Optimal => Ok(outcome),
            SolveStatus::TimeLimit => Err(DesignError::SolverTimeout {
                method: method.to_string(),
                phase: phase.label.clone(),
            }),
            SolveStatus::Infeasible if index == 0 => Err(DesignError::InfeasibleModel {
                method: method.to_string(),
            }),
            SolveStatus::Infeasible => Err(DesignError::InfeasibleChain {
                phase: phase.label.clone(),
            }),
            SolveStatus::Unbounded => Err(DesignError::UnboundedModel {
                method: method.to_string(),
            }),
            SolveStatus::Error => {
                Err(SolverError::ExecutionFailed(outcome.message).into())
            }
        }
    }
}

/// Bounds a solved phase's objective at its achieved optimum: `≤` after
/// a minimization, `≥` after a maximization. Pins are never relaxed, so
/// later phases cannot degrade an earlier, higher-priority objective.
fn pin_constraint(phase: &SolvePhase, achieved: f64) -> Constraint {
    let relation = match phase.sense {
        Sense::Minimize => Relation::LessOrEqual,
        Sense::Maximize => Relation::GreaterOrEqual,
    };
    Constraint::new(phase.objective.clone(), relation, achieved)
        .labeled(format!("pin_{}", phase.label))
}

fn assemble_design(
    network: &Network,
    vars: &NetworkVariables,
    objectives: &Objectives,
    method: &str,
    outcome: &SolveOutcome,
) -> NetworkDesign {
    let assignment = &outcome.variable_values;
    let value_of = |id: crate::domain::VarId| assignment.get(id.index()).copied().unwrap_or(0.0);

    let open_plants = network
        .plants()
        .iter()
        .enumerate()
        .filter(|(p, _)| value_of(vars.open_plant(*p)) > 0.5)
        .map(|(_, plant)| plant.id.clone())
        .collect();
    let open_dcs = network
        .dcs()
        .iter()
        .enumerate()
        .filter(|(d, _)| value_of(vars.open_dc(*d)) > 0.5)
        .map(|(_, dc)| dc.id.clone())
        .collect();

    let mut flows = Vec::new();
    for (p, plant) in network.plants().iter().enumerate() {
        for (d, dc) in network.dcs().iter().enumerate() {
            let quantity = value_of(vars.flow_plant_dc(p, d));
            if quantity > FLOW_EPSILON {
                flows.push(ArcFlow {
                    from: plant.id.clone(),
                    to: dc.id.clone(),
                    quantity,
                });
            }
        }
    }
    for (d, dc) in network.dcs().iter().enumerate() {
        for (c, customer) in network.customers().iter().enumerate() {
            let quantity = value_of(vars.flow_dc_customer(d, c));
            if quantity > FLOW_EPSILON {
                flows.push(ArcFlow {
                    from: dc.id.clone(),
                    to: customer.id.clone(),
                    quantity,
                });
            }
        }
    }

    NetworkDesign {
        method: method.to_string(),
        status: outcome.status,
        total_cost: objectives.cost.evaluate(assignment),
        total_emissions: objectives.emissions.evaluate(assignment),
        total_jobs: objectives.jobs.evaluate(assignment),
        open_plants,
        open_dcs,
        flows,
    }
}
