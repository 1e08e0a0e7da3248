//! CLI infrastructure for the stabilizer solver
//!
//! This module provides the command-line interface for solving the grid world,
//! sweeping discount factors and locating policy switches.

pub mod commands;
pub mod config;
pub mod output;
