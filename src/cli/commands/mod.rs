//! Subcommands of the `stabilizer` binary

pub mod layout;
pub mod solve;
pub mod sweep;
pub mod threshold;
