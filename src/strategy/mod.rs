//! The seven scalarization strategies.
//!
//! Each variant composes a final objective and optimization sense from
//! the three base expressions, possibly adds extra constraints, and
//! possibly requires several sequential solve phases. The engine runs
//! the resulting [`SolvePlan`]; strategies themselves never call a
//! solver.

use crate::domain::{Constraint, LinearExpr, Relation, Sense, Variable};
use crate::model::{NetworkVariables, Objectives};

/// Weights folding the three objectives into one minimized scalar.
///
/// The jobs term is subtracted because jobs is a benefit inside a
/// minimization. No normalization is applied: cost in currency units
/// dwarfs emissions and job counts, so callers must pick weights that
/// absorb the scale difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSumParams {
    pub w1: f64,
    pub w2: f64,
    pub w3: f64,
}

impl Default for WeightedSumParams {
    fn default() -> Self {
        Self {
            w1: 0.5,
            w2: 0.3,
            w3: 0.2,
        }
    }
}

/// Bounds on the non-primary objectives while cost is minimized:
/// emissions capped above, jobs floored below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonParams {
    pub epsilon_emissions: f64,
    pub epsilon_jobs: f64,
}

impl Default for EpsilonParams {
    fn default() -> Self {
        Self {
            epsilon_emissions: 75_000.0,
            epsilon_jobs: 150.0,
        }
    }
}

/// Soft targets for the three objectives plus penalty weights on the
/// deviation variables that absorb any violation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalParams {
    pub goal_cost: f64,
    pub goal_emissions: f64,
    pub goal_jobs: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
}

impl Default for GoalParams {
    fn default() -> Self {
        Self {
            goal_cost: 2_000_000.0,
            goal_emissions: 80_000.0,
            goal_jobs: 180.0,
            p1: 1.0,
            p2: 1.0,
            p3: 1.0,
        }
    }
}

/// Scalarization strategy for the three-objective design model
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Minimize monetary cost alone
    CostOptimal,
    /// Minimize carbon emissions alone
    EmissionOptimal,
    /// Maximize jobs created alone
    JobsOptimal,
    /// Minimize `w1·cost + w2·emissions − w3·jobs`
    WeightedSum(WeightedSumParams),
    /// Minimize cost with the other objectives bounded as constraints
    EpsilonConstrained(EpsilonParams),
    /// Cost, then emissions, then jobs, each phase pinned at its optimum
    Lexicographic,
    /// Minimize penalized deviations from the three soft goals
    GoalProgramming(GoalParams),
}

impl Strategy {
    /// Stable method tag, also accepted by the request mapper
    pub fn method(&self) -> &'static str {
        match self {
            Strategy::CostOptimal => "cost_optimal",
            Strategy::EmissionOptimal => "emission_optimal",
            Strategy::JobsOptimal => "jobs_optimal",
            Strategy::WeightedSum(_) => "weighted_sum",
            Strategy::EpsilonConstrained(_) => "epsilon_constrained",
            Strategy::Lexicographic => "lexicographic",
            Strategy::GoalProgramming(_) => "goal_programming",
        }
    }

    /// Composes the ordered solve phases for this strategy.
    ///
    /// Goal programming registers its deviation variables in `vars`, so
    /// the pool handed to the solver afterwards includes them.
    pub fn plan(&self, objectives: &Objectives, vars: &mut NetworkVariables) -> SolvePlan {
        match self {
            Strategy::CostOptimal => {
                SolvePlan::single(SolvePhase::new("cost", objectives.cost.clone(), Sense::Minimize))
            }
            Strategy::EmissionOptimal => SolvePlan::single(SolvePhase::new(
                "emissions",
                objectives.emissions.clone(),
                Sense::Minimize,
            )),
            Strategy::JobsOptimal => SolvePlan::single(SolvePhase::new(
                "jobs",
                objectives.jobs.clone(),
                Sense::Maximize,
            )),
            Strategy::WeightedSum(weights) => {
                let mut objective = objectives.cost.scaled(weights.w1);
                objective.add_scaled(&objectives.emissions, weights.w2);
                objective.add_scaled(&objectives.jobs, -weights.w3);
                SolvePlan::single(SolvePhase::new("weighted_sum", objective, Sense::Minimize))
            }
            Strategy::EpsilonConstrained(eps) => {
                let phase = SolvePhase::new("cost", objectives.cost.clone(), Sense::Minimize)
                    .with_extra_constraints(vec![
                        Constraint::new(
                            objectives.emissions.clone(),
                            Relation::LessOrEqual,
                            eps.epsilon_emissions,
                        )
                        .labeled("epsilon_emissions"),
                        Constraint::new(
                            objectives.jobs.clone(),
                            Relation::GreaterOrEqual,
                            eps.epsilon_jobs,
                        )
                        .labeled("epsilon_jobs"),
                    ]);
                SolvePlan::single(phase)
            }
            Strategy::Lexicographic => SolvePlan {
                phases: vec![
                    SolvePhase::new("cost", objectives.cost.clone(), Sense::Minimize).pinned(),
                    SolvePhase::new("emissions", objectives.emissions.clone(), Sense::Minimize)
                        .pinned(),
                    SolvePhase::new("jobs", objectives.jobs.clone(), Sense::Maximize),
                ],
            },
            Strategy::GoalProgramming(goal) => {
                let dev_cost = vars.register(Variable::continuous("dev_cost_plus"));
                let dev_emissions = vars.register(Variable::continuous("dev_emis_plus"));
                let dev_jobs = vars.register(Variable::continuous("dev_jobs_minus"));

                let mut soft_cost = objectives.cost.clone();
                soft_cost.add_term(dev_cost, -1.0);
                let mut soft_emissions = objectives.emissions.clone();
                soft_emissions.add_term(dev_emissions, -1.0);
                let mut soft_jobs = objectives.jobs.clone();
                soft_jobs.add_term(dev_jobs, 1.0);

                let mut objective = LinearExpr::with_capacity(vars.len());
                objective.add_term(dev_cost, goal.p1);
                objective.add_term(dev_emissions, goal.p2);
                objective.add_term(dev_jobs, goal.p3);

                let phase = SolvePhase::new("goal_deviations", objective, Sense::Minimize)
                    .with_extra_constraints(vec![
                        Constraint::new(soft_cost, Relation::LessOrEqual, goal.goal_cost)
                            .labeled("goal_cost"),
                        Constraint::new(
                            soft_emissions,
                            Relation::LessOrEqual,
                            goal.goal_emissions,
                        )
                        .labeled("goal_emissions"),
                        Constraint::new(soft_jobs, Relation::GreaterOrEqual, goal.goal_jobs)
                            .labeled("goal_jobs"),
                    ]);
                SolvePlan::single(phase)
            }
        }
    }
}

/// One solver invocation within a strategy
#[derive(Debug, Clone)]
pub struct SolvePhase {
    pub label: String,
    pub objective: LinearExpr,
    pub sense: Sense,
    pub extra_constraints: Vec<Constraint>,
    /// After this phase solves to optimality, bound its objective at the
    /// achieved value for all later phases.
    pub pin_after: bool,
}

impl SolvePhase {
    fn new(label: impl Into<String>, objective: LinearExpr, sense: Sense) -> Self {
        Self {
            label: label.into(),
            objective,
            sense,
            extra_constraints: Vec::new(),
            pin_after: false,
        }
    }

    fn with_extra_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.extra_constraints = constraints;
        self
    }

    fn pinned(mut self) -> Self {
        self.pin_after = true;
        self
    }
}

/// Ordered solve phases composed by a strategy
#[derive(Debug, Clone)]
pub struct SolvePlan {
    pub phases: Vec<SolvePhase>,
}

impl SolvePlan {
    fn single(phase: SolvePhase) -> Self {
        Self {
            phases: vec![phase],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data;
    use crate::domain::Network;
    use crate::model::build_objectives;

    fn demo_plan(strategy: &Strategy) -> (SolvePlan, NetworkVariables, Objectives) {
        let network = Network::from_config(&demo_data::demo_config()).unwrap();
        let mut vars = NetworkVariables::new(&network);
        let objectives = build_objectives(&network, &vars);
        let plan = strategy.plan(&objectives, &mut vars);
        (plan, vars, objectives)
    }

    #[test]
    fn baselines_are_single_unpinned_phases() {
        for (strategy, sense) in [
            (Strategy::CostOptimal, Sense::Minimize),
            (Strategy::EmissionOptimal, Sense::Minimize),
            (Strategy::JobsOptimal, Sense::Maximize),
        ] {
            let (plan, _, _) = demo_plan(&strategy);
            assert_eq!(plan.phases.len(), 1);
            let phase = &plan.phases[0];
            assert_eq!(phase.sense, sense);
            assert!(phase.extra_constraints.is_empty());
            assert!(!phase.pin_after);
        }
    }

    #[test]
    fn weighted_sum_subtracts_the_jobs_term() {
        let (plan, vars, objectives) = demo_plan(&Strategy::WeightedSum(WeightedSumParams::default()));
        let objective = &plan.phases[0].objective;

        // open_P1: 0.5 * 650000 fixed cost − 0.2 * 100 jobs
        let expected = 0.5 * objectives.cost.coefficient(vars.open_plant(0))
            - 0.2 * objectives.jobs.coefficient(vars.open_plant(0));
        assert!((objective.coefficient(vars.open_plant(0)) - expected).abs() < 1e-9);

        // flow_P1_D1: 0.5 * 2.5 + 0.3 * 2.05
        let flow = objective.coefficient(vars.flow_plant_dc(0, 0));
        assert!((flow - (0.5 * 2.5 + 0.3 * 2.05)).abs() < 1e-9);
    }

    #[test]
    fn epsilon_constrains_the_secondary_objectives() {
        let (plan, _, objectives) = demo_plan(&Strategy::EpsilonConstrained(EpsilonParams::default()));
        let phase = &plan.phases[0];

        assert_eq!(phase.sense, Sense::Minimize);
        assert_eq!(phase.objective, objectives.cost);
        assert_eq!(phase.extra_constraints.len(), 2);

        let emissions = &phase.extra_constraints[0];
        assert_eq!(emissions.label, "epsilon_emissions");
        assert_eq!(emissions.relation, Relation::LessOrEqual);
        assert_eq!(emissions.bound, 75_000.0);

        let jobs = &phase.extra_constraints[1];
        assert_eq!(jobs.label, "epsilon_jobs");
        assert_eq!(jobs.relation, Relation::GreaterOrEqual);
        assert_eq!(jobs.bound, 150.0);
    }

    #[test]
    fn lexicographic_is_a_three_phase_chain() {
        let (plan, _, _) = demo_plan(&Strategy::Lexicographic);

        assert_eq!(plan.phases.len(), 3);
        let labels: Vec<&str> = plan.phases.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["cost", "emissions", "jobs"]);
        let senses: Vec<Sense> = plan.phases.iter().map(|p| p.sense).collect();
        assert_eq!(senses, [Sense::Minimize, Sense::Minimize, Sense::Maximize]);
        assert!(plan.phases[0].pin_after);
        assert!(plan.phases[1].pin_after);
        assert!(!plan.phases[2].pin_after);
    }

    #[test]
    fn goal_programming_registers_three_deviations() {
        let network = Network::from_config(&demo_data::demo_config()).unwrap();
        let mut vars = NetworkVariables::new(&network);
        let objectives = build_objectives(&network, &vars);
        let before = vars.len();

        let goal = GoalParams {
            p1: 2.0,
            p2: 3.0,
            p3: 4.0,
            ..GoalParams::default()
        };
        let plan = Strategy::GoalProgramming(goal).plan(&objectives, &mut vars);

        assert_eq!(vars.len(), before + 3);
        let names: Vec<&str> = vars.defs()[before..].iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["dev_cost_plus", "dev_emis_plus", "dev_jobs_minus"]);

        let phase = &plan.phases[0];
        assert_eq!(phase.sense, Sense::Minimize);
        assert_eq!(phase.extra_constraints.len(), 3);

        // the objective touches only the deviations, with the priorities
        let coefficients = phase.objective.coefficients();
        assert_eq!(&coefficients[before..], [2.0, 3.0, 4.0]);
        assert!(coefficients[..before].iter().all(|&c| c == 0.0));

        // soft goal rows: base expression plus the absorbing deviation
        let cost_goal = &phase.extra_constraints[0];
        assert_eq!(cost_goal.label, "goal_cost");
        assert_eq!(cost_goal.relation, Relation::LessOrEqual);
        assert_eq!(cost_goal.bound, 2_000_000.0);
        assert_eq!(cost_goal.expr.coefficients()[before], -1.0);

        let jobs_goal = &phase.extra_constraints[2];
        assert_eq!(jobs_goal.relation, Relation::GreaterOrEqual);
        assert_eq!(jobs_goal.bound, 180.0);
        assert_eq!(jobs_goal.expr.coefficients()[before + 2], 1.0);
    }

    #[test]
    fn method_tags_are_stable() {
        assert_eq!(Strategy::CostOptimal.method(), "cost_optimal");
        assert_eq!(Strategy::Lexicographic.method(), "lexicographic");
        assert_eq!(
            Strategy::GoalProgramming(GoalParams::default()).method(),
            "goal_programming"
        );
    }
}
