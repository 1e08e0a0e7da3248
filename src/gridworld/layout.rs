//! Constants of the standard 6x5 domain
//!
//! ```text
//!        c0   c1   c2   c3   c4
//! r0      .    █    █    █    █
//! r1      .   +1    .    █   -1
//! r2     +4    █   +8   +1    .
//! r3     +3    █    .   +2    .
//! r4      .    █   +2    █    .
//! r5      .    .    .    .    .
//! ```

use super::Cell;

pub const ROWS: usize = 6;
pub const COLS: usize = 5;

/// Cells that are never entered or updated.
pub const WALLS: [Cell; 9] = [
    Cell::new(0, 1),
    Cell::new(0, 2),
    Cell::new(0, 3),
    Cell::new(0, 4),
    Cell::new(1, 3),
    Cell::new(2, 1),
    Cell::new(3, 1),
    Cell::new(4, 1),
    Cell::new(4, 3),
];

/// Numbered states and the reward paid for exiting from them.
pub const NUMBERED_STATES: [(Cell, f64); 8] = [
    (Cell::new(1, 1), 1.0),
    (Cell::new(2, 2), 8.0),
    (Cell::new(2, 0), 4.0),
    (Cell::new(2, 3), 1.0),
    (Cell::new(3, 0), 3.0),
    (Cell::new(3, 3), 2.0),
    (Cell::new(1, 4), -1.0),
    (Cell::new(4, 2), 2.0),
];

/// Bonus paid for a move that gets strictly closer to a numbered state.
pub const SHAPING_BONUS: f64 = 8.0;

/// Default discount factor.
pub const DEFAULT_DISCOUNT: f64 = 0.5;

/// Hard cap on the number of sweeps.
pub const MAX_ITERATIONS: usize = 100;
