//! Ports (trait boundaries) between the solver and its surroundings.
//!
//! The solver owns these traits; tracing, history collection and progress
//! reporting are adapters that implement them.

pub mod observer;

pub use observer::IterationObserver;
