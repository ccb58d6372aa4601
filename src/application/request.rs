// Edge-layer mapping between untyped strategy requests and the typed
// Strategy enum, keeping transport shapes out of the strategy layer.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{DesignError, DesignResult};
use crate::strategy::{EpsilonParams, GoalParams, Strategy, WeightedSumParams};

/// Untyped strategy request as received from an external caller.
///
/// `method` is one of the seven strategy tags; `params` carries the
/// method's numeric parameters. Omitted parameters take their
/// documented defaults; unrecognized parameter keys are rejected so a
/// typo cannot silently fall back to a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignRequest {
    pub method: String,
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

impl DesignRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Resolves this request into a typed strategy
    pub fn to_strategy(&self) -> DesignResult<Strategy> {
        let mut reader = ParamReader::new(&self.params);
        let strategy = match self.method.as_str() {
            "cost_optimal" => Strategy::CostOptimal,
            "emission_optimal" => Strategy::EmissionOptimal,
            "jobs_optimal" => Strategy::JobsOptimal,
            "weighted_sum" => {
                let defaults = WeightedSumParams::default();
                Strategy::WeightedSum(WeightedSumParams {
                    w1: reader.take("w1", defaults.w1),
                    w2: reader.take("w2", defaults.w2),
                    w3: reader.take("w3", defaults.w3),
                })
            }
            "epsilon_constrained" => {
                let defaults = EpsilonParams::default();
                Strategy::EpsilonConstrained(EpsilonParams {
                    epsilon_emissions: reader
                        .take("epsilon_emissions", defaults.epsilon_emissions),
                    epsilon_jobs: reader.take("epsilon_jobs", defaults.epsilon_jobs),
                })
            }
            "lexicographic" => Strategy::Lexicographic,
            "goal_programming" => {
                let defaults = GoalParams::default();
                Strategy::GoalProgramming(GoalParams {
                    goal_cost: reader.take("goal_cost", defaults.goal_cost),
                    goal_emissions: reader.take("goal_emissions", defaults.goal_emissions),
                    goal_jobs: reader.take("goal_jobs", defaults.goal_jobs),
                    p1: reader.take("p1", defaults.p1),
                    p2: reader.take("p2", defaults.p2),
                    p3: reader.take("p3", defaults.p3),
                })
            }
            other => return Err(DesignError::UnknownStrategy(other.to_string())),
        };
        reader.finish(&self.method)?;
        Ok(strategy)
    }
}

/// Tracks which parameter keys a method consumed so leftovers can be
/// reported instead of ignored.
struct ParamReader<'a> {
    params: &'a BTreeMap<String, f64>,
    consumed: BTreeSet<&'a str>,
}

impl<'a> ParamReader<'a> {
    fn new(params: &'a BTreeMap<String, f64>) -> Self {
        Self {
            params,
            consumed: BTreeSet::new(),
        }
    }

    fn take(&mut self, key: &'static str, default: f64) -> f64 {
        self.consumed.insert(key);
        self.params.get(key).copied().unwrap_or(default)
    }

    fn finish(self, method: &str) -> DesignResult<()> {
        for key in self.params.keys() {
            if !self.consumed.contains(key.as_str()) {
                return Err(DesignError::Configuration(format!(
                    "unrecognized parameter '{key}' for method '{method}'"
                )));
            }
        }
        Ok(())
    }
}
