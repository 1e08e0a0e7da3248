//! Value iteration over a [`GridWorld`](crate::gridworld::GridWorld)
//!
//! Each sweep reads the previous [`ValueGrid`](crate::value_grid::ValueGrid)
//! and writes a fresh one. For every non-wall cell the greedy action is
//! chosen from the previous snapshot and the cell is backed up as
//!
//! ```text
//! V'(s) = R(s, a*) + F(s, s') + γ · V(s')
//! ```
//!
//! where `F` is the distance shaping bonus and `V(s')` is the exit reward when
//! `a*` is `Exit`. Iteration stops once the configured convergence criterion
//! holds between consecutive snapshots, or after the sweep cap.
//!
//! ```
//! use stabilizer::{GridWorld, SolverConfig, ValueIteration};
//!
//! let engine = ValueIteration::new(GridWorld::standard()?, SolverConfig::new(0.5))?;
//! let solution = engine.solve()?;
//! assert!(solution.is_stabilized());
//! # Ok::<(), stabilizer::Error>(())
//! ```

pub mod config;
pub mod convergence;
pub mod engine;
pub mod observers;
pub mod solution;

pub use config::SolverConfig;
pub use convergence::{ConvergenceCriterion, Tolerance};
pub use engine::{ActionChoice, CellUpdate, ValueIteration};
pub use observers::{CompositeObserver, HistoryObserver, NullObserver, SweepRecord, TracingObserver};
pub use solution::{Solution, Termination};
