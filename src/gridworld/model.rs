//! The grid-world model: bounds, walls, numbered states and rewards

use super::{Action, Cell, Transition, layout};
use crate::{Error, Result};

/// Immutable description of a grid-world domain.
///
/// A model is built once, validated, and then handed to the solver. All
/// lookups are pure.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    /// Row-major wall mask
    walls: Vec<bool>,
    /// Row-major exit rewards, `Some` only on numbered states
    exit_rewards: Vec<Option<f64>>,
    /// Numbered states in declaration order
    numbered: Vec<Cell>,
    shaping_bonus: f64,
}

impl GridWorld {
    /// Start building a custom domain of the given size.
    pub fn builder(rows: usize, cols: usize) -> GridWorldBuilder {
        GridWorldBuilder::new(rows, cols)
    }

    /// The fixed 6x5 domain described in [`layout`].
    pub fn standard() -> Result<Self> {
        GridWorld::builder(layout::ROWS, layout::COLS)
            .walls(layout::WALLS)
            .numbered_states(layout::NUMBERED_STATES)
            .shaping_bonus(layout::SHAPING_BONUS)
            .build()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|idx| self.walls[idx])
    }

    pub fn is_numbered(&self, cell: Cell) -> bool {
        self.terminal_reward(cell).is_some()
    }

    pub fn numbered_states(&self) -> &[Cell] {
        &self.numbered
    }

    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&cell| self.is_wall(cell))
    }

    /// Exit reward of a numbered state.
    pub fn terminal_reward(&self, cell: Cell) -> Option<f64> {
        self.index(cell).and_then(|idx| self.exit_rewards[idx])
    }

    pub fn shaping_constant(&self) -> f64 {
        self.shaping_bonus
    }

    /// Immediate reward for taking `action` in `cell`.
    ///
    /// Movement is free everywhere. `Exit` pays the numbered state's reward,
    /// nothing on an ordinary cell, and is undefined (`None`) on walls and
    /// outside the grid.
    pub fn reward(&self, cell: Cell, action: Action) -> Option<f64> {
        if action.is_directional() {
            return Some(0.0);
        }
        let idx = self.index(cell)?;
        if self.walls[idx] {
            return None;
        }
        Some(self.exit_rewards[idx].unwrap_or(0.0))
    }

    /// Legal actions in tie-break order.
    ///
    /// Movement toward an edge the cell sits on is omitted. `Exit` is only
    /// offered on numbered states.
    pub fn legal_actions(&self, cell: Cell) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| match action {
                Action::Right => cell.col + 1 < self.cols,
                Action::Down => cell.row + 1 < self.rows,
                Action::Left => cell.col > 0,
                Action::Up => cell.row > 0,
                Action::Exit => self.is_numbered(cell),
            })
            .collect()
    }

    /// Where `action` leads from `cell`, clamped to the grid.
    pub fn transition(&self, cell: Cell, action: Action) -> Transition {
        cell.step(action, self.rows, self.cols)
    }

    /// Legal actions whose outcome is not a wall.
    pub fn wall_avoiding_actions(&self, cell: Cell) -> Vec<Action> {
        self.legal_actions(cell)
            .into_iter()
            .filter(|&action| match self.transition(cell, action) {
                Transition::Moved(next) => !self.is_wall(next),
                Transition::Exited => true,
            })
            .collect()
    }
}

/// Builder for [`GridWorld`].
///
/// # Examples
///
/// ```
/// use stabilizer::gridworld::{Cell, GridWorld};
///
/// let corridor = GridWorld::builder(1, 3)
///     .numbered_state(Cell::new(0, 2), 5.0)
///     .build()?;
/// assert!(corridor.is_numbered(Cell::new(0, 2)));
/// # Ok::<(), stabilizer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridWorldBuilder {
    rows: usize,
    cols: usize,
    walls: Vec<Cell>,
    numbered: Vec<(Cell, f64)>,
    shaping_bonus: f64,
}

impl GridWorldBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: Vec::new(),
            numbered: Vec::new(),
            shaping_bonus: layout::SHAPING_BONUS,
        }
    }

    pub fn wall(mut self, cell: Cell) -> Self {
        self.walls.push(cell);
        self
    }

    pub fn walls(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.walls.extend(cells);
        self
    }

    pub fn numbered_state(mut self, cell: Cell, reward: f64) -> Self {
        self.numbered.push((cell, reward));
        self
    }

    pub fn numbered_states(mut self, states: impl IntoIterator<Item = (Cell, f64)>) -> Self {
        self.numbered.extend(states);
        self
    }

    pub fn shaping_bonus(mut self, bonus: f64) -> Self {
        self.shaping_bonus = bonus;
        self
    }

    /// Validate the tables and produce the model.
    ///
    /// # Errors
    ///
    /// Any malformed table is a configuration error: empty dimensions,
    /// out-of-bounds cells, numbered states on walls or listed twice,
    /// non-finite rewards, and non-wall cells with no wall-avoiding action.
    pub fn build(self) -> Result<GridWorld> {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        if !self.shaping_bonus.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!("shaping bonus {} must be finite", self.shaping_bonus),
            });
        }

        let out_of_bounds = |cell: Cell| Error::CellOutOfBounds { cell, rows, cols };
        let mut walls = vec![false; rows * cols];
        for cell in self.walls {
            if cell.row >= rows || cell.col >= cols {
                return Err(out_of_bounds(cell));
            }
            walls[cell.row * cols + cell.col] = true;
        }

        let mut exit_rewards = vec![None; rows * cols];
        let mut numbered = Vec::with_capacity(self.numbered.len());
        for (cell, reward) in self.numbered {
            if cell.row >= rows || cell.col >= cols {
                return Err(out_of_bounds(cell));
            }
            let idx = cell.row * cols + cell.col;
            if walls[idx] {
                return Err(Error::NumberedOnWall { cell });
            }
            if exit_rewards[idx].is_some() {
                return Err(Error::DuplicateNumbered { cell });
            }
            if !reward.is_finite() {
                return Err(Error::InvalidReward {
                    cell,
                    value: reward,
                });
            }
            exit_rewards[idx] = Some(reward);
            numbered.push(cell);
        }

        let model = GridWorld {
            rows,
            cols,
            walls,
            exit_rewards,
            numbered,
            shaping_bonus: self.shaping_bonus,
        };

        if let Some(cell) = model
            .cells()
            .find(|&cell| !model.is_wall(cell) && model.wall_avoiding_actions(cell).is_empty())
        {
            return Err(Error::NoLegalActions { cell });
        }

        Ok(model)
    }
}
