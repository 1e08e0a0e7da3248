//! Observer port - hooks into a running value iteration
//!
//! Observers see every cell backup and every finished sweep without the
//! solver knowing how the information is used.

use crate::{
    Result,
    value_grid::ValueGrid,
    value_iteration::{CellUpdate, SolverConfig, Solution},
};

/// Observer trait for monitoring a solve.
///
/// # Event Sequence
///
/// 1. `on_solve_start(config)` - Once at the beginning
/// 2. For each sweep:
///    - `on_sweep_start(generation)`
///    - `on_cell_update(update)` - For each non-wall cell, row-major
///    - `on_sweep_end(previous, next)`
/// 3. `on_solve_end(solution)` - Once at the end
///
/// An error returned from any hook aborts the solve.
///
/// # Examples
///
/// ```no_run
/// use stabilizer::{ports::IterationObserver, value_iteration::CellUpdate};
///
/// struct ExitCounter {
///     exits: usize,
/// }
///
/// impl IterationObserver for ExitCounter {
///     fn on_cell_update(&mut self, update: &CellUpdate) -> stabilizer::Result<()> {
///         if update.next.is_exited() {
///             self.exits += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait IterationObserver {
    /// Called before the first sweep.
    fn on_solve_start(&mut self, _config: &SolverConfig) -> Result<()> {
        Ok(())
    }

    /// Called before a sweep writes generation `generation`.
    fn on_sweep_start(&mut self, _generation: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a cell's new value and action are written.
    fn on_cell_update(&mut self, _update: &CellUpdate) -> Result<()> {
        Ok(())
    }

    /// Called once the successor grid is complete, before the convergence
    /// check.
    fn on_sweep_end(&mut self, _previous: &ValueGrid, _next: &ValueGrid) -> Result<()> {
        Ok(())
    }

    /// Called with the final result.
    fn on_solve_end(&mut self, _solution: &Solution) -> Result<()> {
        Ok(())
    }
}
