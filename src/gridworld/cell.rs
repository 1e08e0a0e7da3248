//! Grid coordinates and movement

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::action::Action;

/// A cell on the grid, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Manhattan (L1) distance between two cells.
    pub fn manhattan_distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Where `action` leads from this cell on a `rows` x `cols` grid.
    ///
    /// `Exit` always leaves the grid. Directional moves compute the naive
    /// neighbour and clamp each axis independently, so pushing against an
    /// edge leaves that coordinate unchanged.
    pub fn step(self, action: Action, rows: usize, cols: usize) -> Transition {
        let Some((d_row, d_col)) = action.delta() else {
            return Transition::Exited;
        };
        let row = clamp_axis(self.row, d_row, rows);
        let col = clamp_axis(self.col, d_col, cols);
        Transition::Moved(Cell::new(row, col))
    }
}

fn clamp_axis(position: usize, delta: isize, len: usize) -> usize {
    let max = len.saturating_sub(1);
    position.saturating_add_signed(delta).min(max)
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = crate::Error;

    /// Parses `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || crate::Error::ParseCell {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Cell::new(row, col))
    }
}

/// The outcome of applying an action to a cell.
///
/// `Exited` stands for having left the grid through an `Exit` action. It is
/// only ever an intermediate result and never occupies a grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Moved(Cell),
    Exited,
}

impl Transition {
    /// The destination cell, or `None` after an exit.
    pub fn cell(self) -> Option<Cell> {
        match self {
            Transition::Moved(cell) => Some(cell),
            Transition::Exited => None,
        }
    }

    pub fn is_exited(self) -> bool {
        matches!(self, Transition::Exited)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Moved(cell) => write!(f, "{cell}"),
            Transition::Exited => write!(f, "exited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_moves_clamp() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(Action::Up, 6, 5), Transition::Moved(corner));
        assert_eq!(corner.step(Action::Left, 6, 5), Transition::Moved(corner));
        assert_eq!(
            corner.step(Action::Right, 6, 5),
            Transition::Moved(Cell::new(0, 1))
        );
    }

    #[test]
    fn test_far_corner_clamps() {
        let corner = Cell::new(5, 4);
        assert_eq!(corner.step(Action::Down, 6, 5), Transition::Moved(corner));
        assert_eq!(corner.step(Action::Right, 6, 5), Transition::Moved(corner));
    }

    #[test]
    fn test_exit_leaves_grid() {
        assert_eq!(Cell::new(2, 2).step(Action::Exit, 6, 5), Transition::Exited);
        assert_eq!(Transition::Exited.cell(), None);
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(2, 3)), 5);
        assert_eq!(Cell::new(4, 1).manhattan_distance(Cell::new(1, 4)), 6);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!("1,4".parse::<Cell>().unwrap(), Cell::new(1, 4));
        assert_eq!("(5, 0)".parse::<Cell>().unwrap(), Cell::new(5, 0));
        assert!("5".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
    }
}
