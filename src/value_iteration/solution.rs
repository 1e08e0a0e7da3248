//! Result of a value-iteration run

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::SolverConfig;
use crate::{
    gridworld::{Action, Cell},
    value_grid::ValueGrid,
};

/// Why the sweep loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The convergence criterion held between the last two snapshots
    Stabilized,
    /// The sweep cap was reached first
    IterationCap,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Stabilized => f.write_str("stabilized"),
            Termination::IterationCap => f.write_str("did not stabilize"),
        }
    }
}

/// Final snapshot of a run together with how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The last grid produced
    pub grid: ValueGrid,
    /// Number of sweeps performed (equal to the grid's generation)
    pub iterations: usize,
    pub termination: Termination,
    /// Configuration the run used
    pub config: SolverConfig,
}

impl Solution {
    pub fn is_stabilized(&self) -> bool {
        self.termination == Termination::Stabilized
    }

    pub fn action_at(&self, cell: Cell) -> Option<Action> {
        self.grid.policy(cell)
    }

    pub fn value_at(&self, cell: Cell) -> Option<f64> {
        self.grid.value(cell)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.termination {
            Termination::Stabilized => writeln!(f, "{} iterations", self.iterations)?,
            Termination::IterationCap => writeln!(
                f,
                "{} iterations (did not stabilize)",
                self.iterations
            )?,
        }
        write!(f, "{}", self.grid)
    }
}
