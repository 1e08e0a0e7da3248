//! Value iteration for a small grid-world Markov decision process
//!
//! This crate provides:
//! - The fixed 6x5 grid-world domain with walls, numbered exit states and
//!   distance-based reward shaping
//! - Value grids holding per-cell values and the greedy policy
//! - A value-iteration solver with configurable convergence criteria
//! - Discount sweeps, policy-switch threshold search and JSON/CSV export

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod gridworld;
pub mod ports;
pub mod value_grid;
pub mod value_iteration;

pub use error::{Error, Result};
pub use gridworld::{Action, Cell, GridWorld, Transition};
pub use value_grid::ValueGrid;
pub use value_iteration::{
    ConvergenceCriterion, Solution, SolverConfig, Termination, Tolerance, ValueIteration,
};
