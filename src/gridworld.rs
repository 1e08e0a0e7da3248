//! Grid-world domain: cells, actions, rewards and reward shaping

pub mod action;
pub mod cell;
pub mod layout;
pub mod model;
pub mod shaping;

pub use action::{Action, BLOCKED_GLYPH};
pub use cell::{Cell, Transition};
pub use model::{GridWorld, GridWorldBuilder};
