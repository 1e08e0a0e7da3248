//! Analysis tools built on repeated solves

pub mod sweep;

pub use sweep::{SweepPoint, Threshold, find_threshold, linspace, solve_at, sweep_discounts};
