// Domain value objects shared by the modeling and solver layers

use serde::Serialize;
use std::fmt;

/// Kind of decision variable in the design model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Nonnegative continuous quantity (flows, deviations)
    Continuous,
    /// Open/closed indicator (x ∈ {0, 1})
    Binary,
}

/// Comparison relation of a linear constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Less than or equal (≤)
    LessOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterOrEqual,
}

/// Direction of optimization for one solve phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

/// Status reported by a solver backend for one solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    /// Found a proven optimal solution
    Optimal,
    /// No assignment satisfies all constraints
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Time limit reached before proving optimality
    TimeLimit,
    /// Solver error occurred
    Error,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::TimeLimit => write!(f, "Time Limit Reached"),
            SolveStatus::Error => write!(f, "Error"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    /// Automatically select the default backend
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}
