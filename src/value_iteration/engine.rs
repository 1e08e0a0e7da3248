//! The sweep loop

use serde::Serialize;
use tracing::{debug, warn};

use super::{
    config::SolverConfig,
    observers::NullObserver,
    solution::{Solution, Termination},
};
use crate::{
    Error, Result,
    gridworld::{Action, Cell, GridWorld, Transition},
    ports::IterationObserver,
    value_grid::ValueGrid,
};

/// Greedy action for a cell and the value it was chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionChoice {
    pub action: Action,
    pub expected_value: f64,
}

/// Everything that went into one cell's backup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellUpdate {
    /// Generation being written
    pub generation: usize,
    pub cell: Cell,
    pub action: Action,
    pub next: Transition,
    pub reward: f64,
    pub shaping: f64,
    /// Value of `action` under the previous snapshot
    pub expected_value: f64,
    /// `reward + shaping + γ · expected_value`
    pub value: f64,
}

/// Value-iteration solver over an injected domain.
#[derive(Debug, Clone)]
pub struct ValueIteration {
    model: GridWorld,
    config: SolverConfig,
}

impl ValueIteration {
    /// Create a solver, validating the configuration.
    pub fn new(model: GridWorld, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &GridWorld {
        &self.model
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The legal, wall-avoiding action with the highest expected value under
    /// `previous`. Ties go to the action listed first in [`Action::ALL`].
    ///
    /// # Errors
    ///
    /// [`Error::NoLegalActions`] if no candidate remains after filtering.
    pub fn best_action(&self, previous: &ValueGrid, cell: Cell) -> Result<ActionChoice> {
        let mut best: Option<ActionChoice> = None;
        for action in self.model.legal_actions(cell) {
            let Some(expected_value) = previous.expected_value(&self.model, cell, action) else {
                continue;
            };
            if best.is_none_or(|b| expected_value > b.expected_value) {
                best = Some(ActionChoice {
                    action,
                    expected_value,
                });
            }
        }
        best.ok_or(Error::NoLegalActions { cell })
    }

    /// Back up a single cell from the previous snapshot.
    pub fn backup(&self, previous: &ValueGrid, cell: Cell) -> Result<CellUpdate> {
        let ActionChoice {
            action,
            expected_value,
        } = self.best_action(previous, cell)?;
        let next = previous.resulting_state(cell, action);
        let reward = self
            .model
            .reward(cell, action)
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!("no reward defined for {action} at {cell}"),
            })?;
        let shaping = if self.config.shaping {
            self.model.shaping_bonus(cell, next)
        } else {
            0.0
        };
        let value = reward + shaping + self.config.discount * expected_value;
        Ok(CellUpdate {
            generation: previous.generation() + 1,
            cell,
            action,
            next,
            reward,
            shaping,
            expected_value,
            value,
        })
    }

    /// Build the next snapshot from `previous`.
    pub fn sweep(&self, previous: &ValueGrid) -> Result<ValueGrid> {
        self.sweep_observed(previous, &mut NullObserver)
    }

    /// [`sweep`](Self::sweep), reporting each backup to `observer`.
    pub fn sweep_observed(
        &self,
        previous: &ValueGrid,
        observer: &mut dyn IterationObserver,
    ) -> Result<ValueGrid> {
        if (previous.rows(), previous.cols()) != (self.model.rows(), self.model.cols()) {
            return Err(Error::DimensionMismatch {
                what: "previous",
                rows: self.model.rows(),
                cols: self.model.cols(),
                got: previous.rows() * previous.cols(),
            });
        }

        let mut next = previous.successor(&self.model);
        observer.on_sweep_start(next.generation())?;
        for cell in self.model.cells().filter(|&c| !self.model.is_wall(c)) {
            let update = self.backup(previous, cell)?;
            next.set_value(cell, update.value)?;
            next.set_policy(cell, update.action)?;
            observer.on_cell_update(&update)?;
        }
        observer.on_sweep_end(previous, &next)?;
        Ok(next)
    }

    /// Sweep from the zero seed until the convergence criterion holds or the
    /// sweep cap is reached.
    pub fn solve(&self) -> Result<Solution> {
        self.solve_with(&mut NullObserver)
    }

    /// [`solve`](Self::solve) with an observer attached.
    pub fn solve_with(&self, observer: &mut dyn IterationObserver) -> Result<Solution> {
        observer.on_solve_start(&self.config)?;

        let mut previous = ValueGrid::seed(&self.model);
        let mut termination = Termination::IterationCap;
        while previous.generation() < self.config.max_iterations {
            let next = self.sweep_observed(&previous, observer)?;
            let settled =
                self.config
                    .criterion
                    .is_satisfied(&previous, &next, self.config.tolerance);
            debug!(
                generation = next.generation(),
                policy_changes = next.policy_changes(&previous),
                max_value_delta = next.max_value_delta(&previous),
                settled,
                "sweep complete"
            );
            previous = next;
            if settled {
                termination = Termination::Stabilized;
                break;
            }
        }

        if termination == Termination::IterationCap {
            warn!(
                max_iterations = self.config.max_iterations,
                criterion = %self.config.criterion,
                discount = self.config.discount,
                "value iteration did not stabilize"
            );
        }

        let solution = Solution {
            iterations: previous.generation(),
            grid: previous,
            termination,
            config: self.config.clone(),
        };
        observer.on_solve_end(&solution)?;
        Ok(solution)
    }
}
