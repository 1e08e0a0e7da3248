//! Observer adapters for value iteration
//!
//! Observers allow composable data collection during a solve without coupling
//! the sweep loop to logging or export formats.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CellUpdate, Solution, SolverConfig};
use crate::{Result, ports::IterationObserver, value_grid::ValueGrid};

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl IterationObserver for NullObserver {}

/// Per-cell trace of every backup, emitted through `tracing`.
///
/// Cell events are logged at `debug`, sweep and solve summaries at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl IterationObserver for TracingObserver {
    fn on_solve_start(&mut self, config: &SolverConfig) -> Result<()> {
        info!(
            discount = config.discount,
            criterion = %config.criterion,
            max_iterations = config.max_iterations,
            shaping = config.shaping,
            "starting value iteration"
        );
        Ok(())
    }

    fn on_cell_update(&mut self, update: &CellUpdate) -> Result<()> {
        debug!(
            generation = update.generation,
            cell = %update.cell,
            action = %update.action,
            next = %update.next,
            reward = update.reward,
            shaping = update.shaping,
            expected = update.expected_value,
            value = update.value,
            "backup"
        );
        Ok(())
    }

    fn on_sweep_end(&mut self, previous: &ValueGrid, next: &ValueGrid) -> Result<()> {
        info!(
            generation = next.generation(),
            policy_changes = next.policy_changes(previous),
            max_value_delta = next.max_value_delta(previous),
            "sweep finished"
        );
        Ok(())
    }

    fn on_solve_end(&mut self, solution: &Solution) -> Result<()> {
        info!(
            iterations = solution.iterations,
            termination = %solution.termination,
            "value iteration finished"
        );
        Ok(())
    }
}

/// Summary of one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub generation: usize,
    /// Cells whose recorded action changed
    pub policy_changes: usize,
    /// Largest absolute value change
    pub max_value_delta: f64,
}

/// Collects a [`SweepRecord`] per sweep.
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    records: Vec<SweepRecord>,
}

impl HistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SweepRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SweepRecord> {
        self.records
    }
}

impl IterationObserver for HistoryObserver {
    fn on_solve_start(&mut self, _config: &SolverConfig) -> Result<()> {
        self.records.clear();
        Ok(())
    }

    fn on_sweep_end(&mut self, previous: &ValueGrid, next: &ValueGrid) -> Result<()> {
        self.records.push(SweepRecord {
            generation: next.generation(),
            policy_changes: next.policy_changes(previous),
            max_value_delta: next.max_value_delta(previous),
        });
        Ok(())
    }
}

/// Fans every event out to a list of observers, in order.
pub struct CompositeObserver<'a> {
    observers: Vec<&'a mut dyn IterationObserver>,
}

impl<'a> CompositeObserver<'a> {
    pub fn new(observers: Vec<&'a mut dyn IterationObserver>) -> Self {
        Self { observers }
    }

    pub fn push(&mut self, observer: &'a mut dyn IterationObserver) {
        self.observers.push(observer);
    }
}

impl IterationObserver for CompositeObserver<'_> {
    fn on_solve_start(&mut self, config: &SolverConfig) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_solve_start(config)?;
        }
        Ok(())
    }

    fn on_sweep_start(&mut self, generation: usize) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_sweep_start(generation)?;
        }
        Ok(())
    }

    fn on_cell_update(&mut self, update: &CellUpdate) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_cell_update(update)?;
        }
        Ok(())
    }

    fn on_sweep_end(&mut self, previous: &ValueGrid, next: &ValueGrid) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_sweep_end(previous, next)?;
        }
        Ok(())
    }

    fn on_solve_end(&mut self, solution: &Solution) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_solve_end(solution)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridWorld, ValueIteration};

    #[derive(Default)]
    struct Counter {
        sweeps: usize,
        cells: usize,
        finished: bool,
    }

    impl IterationObserver for Counter {
        fn on_sweep_start(&mut self, _generation: usize) -> Result<()> {
            self.sweeps += 1;
            Ok(())
        }

        fn on_cell_update(&mut self, _update: &CellUpdate) -> Result<()> {
            self.cells += 1;
            Ok(())
        }

        fn on_solve_end(&mut self, _solution: &Solution) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_history_records_each_sweep() {
        let engine =
            ValueIteration::new(GridWorld::standard().unwrap(), SolverConfig::new(0.5)).unwrap();
        let mut history = HistoryObserver::new();
        let solution = engine.solve_with(&mut history).unwrap();

        assert_eq!(history.records().len(), solution.iterations);
        assert_eq!(history.records()[0].generation, 1);
        // Seed has no actions; every one of the 21 open cells gains one.
        assert_eq!(history.records()[0].policy_changes, 21);
        assert_eq!(history.records().last().unwrap().policy_changes, 0);
    }

    #[test]
    fn test_composite_fans_out() {
        let engine =
            ValueIteration::new(GridWorld::standard().unwrap(), SolverConfig::new(0.5)).unwrap();
        let mut counter = Counter::default();
        let mut history = HistoryObserver::new();
        let solution = {
            let mut composite = CompositeObserver::new(vec![
                &mut counter as &mut dyn IterationObserver,
                &mut history,
            ]);
            engine.solve_with(&mut composite).unwrap()
        };

        assert_eq!(counter.sweeps, solution.iterations);
        assert_eq!(counter.cells, 21 * solution.iterations);
        assert!(counter.finished);
        assert_eq!(history.records().len(), solution.iterations);
    }
}
