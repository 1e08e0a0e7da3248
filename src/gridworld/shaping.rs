//! Distance-based reward shaping
//!
//! A move earns the model's shaping bonus when it brings the agent strictly
//! closer (in Manhattan distance) to its nearest numbered state. Landing on a
//! numbered state, or exiting, earns nothing extra.

use super::{Cell, GridWorld, Transition};

impl GridWorld {
    /// Manhattan distance from `cell` to the closest numbered state.
    ///
    /// Several numbered states may be equally close; the distance is the same
    /// whichever one is picked. `None` when the domain has no numbered states.
    pub fn distance_to_nearest_numbered(&self, cell: Cell) -> Option<usize> {
        self.numbered_states()
            .iter()
            .map(|&numbered| cell.manhattan_distance(numbered))
            .min()
    }

    /// Shaping term for moving from `start` to `next`.
    pub fn shaping_bonus(&self, start: Cell, next: Transition) -> f64 {
        let Transition::Moved(next) = next else {
            return 0.0;
        };
        if self.is_numbered(next) {
            return 0.0;
        }
        match (
            self.distance_to_nearest_numbered(next),
            self.distance_to_nearest_numbered(start),
        ) {
            (Some(after), Some(before)) if after < before => self.shaping_constant(),
            _ => 0.0,
        }
    }
}
