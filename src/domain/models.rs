use super::value_objects::{Relation, Sense, SolveStatus, VarKind};
use std::time::Duration;

/// Decision variable handed to solver backends
#[derive(Debug, Clone)]
pub struct Variable {
    pub kind: VarKind,
    pub lower: f64,
    pub upper: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            kind: VarKind::Continuous,
            lower: 0.0,
            upper: None,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            kind: VarKind::Binary,
            lower: 0.0,
            upper: Some(1.0),
            name: name.into(),
        }
    }
}

/// Index of a variable within a model's variable pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Linear expression over a variable pool, stored as a dense coefficient
/// vector indexed by [`VarId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    coefficients: Vec<f64>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coefficients: Vec::with_capacity(capacity),
        }
    }

    /// Adds `coeff` to the coefficient of `var`, growing the vector as
    /// needed so late-registered variables (deviations) are addressable.
    pub fn add_term(&mut self, var: VarId, coeff: f64) {
        let index = var.index();
        if index >= self.coefficients.len() {
            self.coefficients.resize(index + 1, 0.0);
        }
        self.coefficients[index] += coeff;
    }

    pub fn coefficient(&self, var: VarId) -> f64 {
        self.coefficients.get(var.index()).copied().unwrap_or(0.0)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns `factor * self`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|c| c * factor).collect(),
        }
    }

    /// Adds `factor * other` onto `self`
    pub fn add_scaled(&mut self, other: &LinearExpr, factor: f64) {
        if other.coefficients.len() > self.coefficients.len() {
            self.coefficients.resize(other.coefficients.len(), 0.0);
        }
        for (target, &coeff) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *target += coeff * factor;
        }
    }

    /// Evaluates the expression against a variable assignment. The
    /// assignment may be longer than the expression; extra entries
    /// belong to variables this expression never references.
    pub fn evaluate(&self, assignment: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(assignment)
            .map(|(coeff, value)| coeff * value)
            .sum()
    }

    pub(crate) fn pad_to(&mut self, len: usize) {
        if self.coefficients.len() < len {
            self.coefficients.resize(len, 0.0);
        }
    }
}

/// Linear constraint: `expr` `relation` `bound`
#[derive(Debug, Clone)]
pub struct Constraint {
    pub expr: LinearExpr,
    pub relation: Relation,
    pub bound: f64,
    pub label: String,
}

impl Constraint {
    pub fn new(expr: LinearExpr, relation: Relation, bound: f64) -> Self {
        Self {
            expr,
            relation,
            bound,
            label: String::new(),
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// One complete solve handed to a [`SolverAdapter`](super::SolverAdapter)
#[derive(Debug, Clone)]
pub struct MilpProblem {
    pub name: String,
    pub sense: Sense,
    pub objective: LinearExpr,
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub time_limit: Option<Duration>,
}

impl MilpProblem {
    pub fn new(
        name: impl Into<String>,
        variables: Vec<Variable>,
        mut objective: LinearExpr,
        sense: Sense,
    ) -> Self {
        objective.pad_to(variables.len());
        Self {
            name: name.into(),
            sense,
            objective,
            variables,
            constraints: Vec::new(),
            time_limit: None,
        }
    }

    pub fn add_constraint(&mut self, mut constraint: Constraint) {
        constraint.expr.pad_to(self.variables.len());
        self.constraints.push(constraint);
    }

    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        for constraint in constraints {
            self.add_constraint(constraint);
        }
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.variables
            .iter()
            .any(|v| matches!(v.kind, VarKind::Binary))
    }
}

/// Result of one solver call
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
}

impl SolveOutcome {
    pub fn new(status: SolveStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
        }
    }

    pub fn optimal(objective_value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective_value: Some(objective_value),
            variable_values,
            message: "optimal solution found".to_string(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}
