//! Snapshots of state values and the greedy policy that produced them

use std::fmt;

use serde::Serialize;

use crate::{
    Error, Result,
    gridworld::{Action, Cell, GridWorld, Transition},
    value_iteration::Tolerance,
};

/// One generation of value estimates plus the action chosen in every cell.
///
/// Values and policy are stored row-major in two parallel vectors of the same
/// length. Wall cells hold no value and no action, and writes to them are
/// rejected. A grid being read as the previous snapshot is only ever borrowed
/// immutably; the next snapshot is a distinct owned grid.
///
/// `==` is structural: values, policy and generation must all match. Two
/// grids count as the same policy grid when [`same_policy`](Self::same_policy)
/// holds, which is what the default convergence criterion checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueGrid {
    rows: usize,
    cols: usize,
    values: Vec<Option<f64>>,
    policy: Vec<Option<Action>>,
    generation: usize,
}

impl ValueGrid {
    /// Generation 0: zero at every non-wall cell, no recorded actions.
    pub fn seed(model: &GridWorld) -> Self {
        Self::zeroed(model, 0)
    }

    /// A fresh grid for the generation after this one.
    ///
    /// Every non-wall cell starts at zero and is expected to be overwritten
    /// exactly once by the sweep that owns it.
    pub fn successor(&self, model: &GridWorld) -> Self {
        Self::zeroed(model, self.generation + 1)
    }

    fn zeroed(model: &GridWorld, generation: usize) -> Self {
        let values = model
            .cells()
            .map(|cell| (!model.is_wall(cell)).then_some(0.0))
            .collect();
        Self {
            rows: model.rows(),
            cols: model.cols(),
            values,
            policy: vec![None; model.len()],
            generation,
        }
    }

    /// Assemble a grid from raw row-major parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if either vector does not match the
    /// model, and [`Error::WallWrite`] if a wall carries a value or action.
    pub fn from_parts(
        model: &GridWorld,
        values: Vec<Option<f64>>,
        policy: Vec<Option<Action>>,
        generation: usize,
    ) -> Result<Self> {
        let (rows, cols) = (model.rows(), model.cols());
        for (what, got) in [("value", values.len()), ("policy", policy.len())] {
            if got != rows * cols {
                return Err(Error::DimensionMismatch {
                    what,
                    rows,
                    cols,
                    got,
                });
            }
        }
        for (idx, cell) in model.cells().enumerate() {
            let is_wall = model.is_wall(cell);
            if is_wall && (values[idx].is_some() || policy[idx].is_some()) {
                return Err(Error::WallWrite { cell });
            }
            if !is_wall && values[idx].is_none() {
                return Err(Error::InvalidConfiguration {
                    message: format!("non-wall cell {cell} has no value"),
                });
            }
        }
        Ok(Self {
            rows,
            cols,
            values,
            policy,
            generation,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    fn writable_index(&self, cell: Cell) -> Result<usize> {
        let idx = self.index(cell).ok_or(Error::CellOutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        })?;
        if self.values[idx].is_none() {
            return Err(Error::WallWrite { cell });
        }
        Ok(idx)
    }

    /// Stored value, `None` for walls and out-of-bounds cells.
    pub fn value(&self, cell: Cell) -> Option<f64> {
        self.index(cell).and_then(|idx| self.values[idx])
    }

    /// Recorded action, `None` for walls and cells not yet updated.
    pub fn policy(&self, cell: Cell) -> Option<Action> {
        self.index(cell).and_then(|idx| self.policy[idx])
    }

    pub fn set_value(&mut self, cell: Cell, value: f64) -> Result<()> {
        let idx = self.writable_index(cell)?;
        self.values[idx] = Some(value);
        Ok(())
    }

    pub fn set_policy(&mut self, cell: Cell, action: Action) -> Result<()> {
        let idx = self.writable_index(cell)?;
        self.policy[idx] = Some(action);
        Ok(())
    }

    /// Where `action` leads from `cell`, clamped to this grid's bounds.
    pub fn resulting_state(&self, cell: Cell, action: Action) -> Transition {
        cell.step(action, self.rows, self.cols)
    }

    /// Value of taking `action` in `cell` according to this snapshot.
    ///
    /// Exiting is worth the exit reward; moving is worth the stored value of
    /// the destination. `None` when the destination is a wall.
    pub fn expected_value(&self, model: &GridWorld, cell: Cell, action: Action) -> Option<f64> {
        match self.resulting_state(cell, action) {
            Transition::Exited => model.reward(cell, Action::Exit),
            Transition::Moved(next) => self.value(next),
        }
    }

    /// Whether both grids record the same action in every cell.
    pub fn same_policy(&self, other: &ValueGrid) -> bool {
        self.policy == other.policy
    }

    /// Number of cells whose recorded action differs.
    pub fn policy_changes(&self, other: &ValueGrid) -> usize {
        self.policy
            .iter()
            .zip(&other.policy)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Element-wise closeness; absent values only match absent values.
    pub fn values_close(&self, other: &ValueGrid, tolerance: Tolerance) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| match (a, b) {
                    (Some(a), Some(b)) => tolerance.is_close(*a, *b),
                    (None, None) => true,
                    _ => false,
                })
    }

    /// Largest absolute difference between present values.
    pub fn max_value_delta(&self, other: &ValueGrid) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .filter_map(|(a, b)| Some((a.as_ref()? - b.as_ref()?).abs()))
            .fold(0.0, f64::max)
    }

    /// Values as rows, for rendering and export.
    pub fn value_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.values.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Policy as rows of glyphs, walls and unset cells shown as blocked.
    pub fn policy_rows(&self) -> Vec<String> {
        self.policy
            .chunks(self.cols)
            .map(|row| row.iter().map(|&a| Action::glyph_or_blocked(a)).collect())
            .collect()
    }
}

impl fmt::Display for ValueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.value_rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|value| match value {
                    Some(v) => format!("{v:>8.3}"),
                    None => format!("{:>8}", "·"),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        for row in self.policy_rows() {
            let glyphs: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", glyphs.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> GridWorld {
        GridWorld::standard().unwrap()
    }

    #[test]
    fn test_seed_grid() {
        let model = standard();
        let grid = ValueGrid::seed(&model);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.value(Cell::new(0, 0)), Some(0.0));
        assert_eq!(grid.value(Cell::new(0, 1)), None);
        assert_eq!(grid.policy(Cell::new(0, 0)), None);
    }

    #[test]
    fn test_successor_is_fresh() {
        let model = standard();
        let mut grid = ValueGrid::seed(&model);
        grid.set_value(Cell::new(5, 0), 3.5).unwrap();
        grid.set_policy(Cell::new(5, 0), Action::Up).unwrap();

        let next = grid.successor(&model);
        assert_eq!(next.generation(), 1);
        assert_eq!(next.value(Cell::new(5, 0)), Some(0.0));
        assert_eq!(next.policy(Cell::new(5, 0)), None);
        assert_eq!(grid.value(Cell::new(5, 0)), Some(3.5));
    }

    #[test]
    fn test_wall_writes_are_rejected() {
        let model = standard();
        let mut grid = ValueGrid::seed(&model);
        assert!(matches!(
            grid.set_value(Cell::new(2, 1), 1.0),
            Err(Error::WallWrite { .. })
        ));
        assert!(matches!(
            grid.set_policy(Cell::new(2, 1), Action::Up),
            Err(Error::WallWrite { .. })
        ));
        assert!(matches!(
            grid.set_value(Cell::new(6, 0), 1.0),
            Err(Error::CellOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_resulting_state_clamps_at_corner() {
        let grid = ValueGrid::seed(&standard());
        let corner = Cell::new(0, 0);
        assert_eq!(grid.resulting_state(corner, Action::Up), Transition::Moved(corner));
        assert_eq!(grid.resulting_state(corner, Action::Left), Transition::Moved(corner));
    }

    #[test]
    fn test_expected_value() {
        let model = standard();
        let mut grid = ValueGrid::seed(&model);
        grid.set_value(Cell::new(1, 2), 6.0).unwrap();

        assert_eq!(grid.expected_value(&model, Cell::new(1, 1), Action::Right), Some(6.0));
        assert_eq!(grid.expected_value(&model, Cell::new(1, 1), Action::Exit), Some(1.0));
        assert_eq!(grid.expected_value(&model, Cell::new(1, 1), Action::Down), None);
    }

    #[test]
    fn test_from_parts_rejects_mismatched_dimensions() {
        let model = standard();
        let result = ValueGrid::from_parts(&model, vec![Some(0.0); 30], vec![None; 29], 0);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { what: "policy", got: 29, .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_value_on_wall() {
        let model = standard();
        let result = ValueGrid::from_parts(&model, vec![Some(0.0); 30], vec![None; 30], 0);
        assert!(matches!(result, Err(Error::WallWrite { .. })));
    }

    #[test]
    fn test_policy_comparison() {
        let model = standard();
        let a = ValueGrid::seed(&model);
        let mut b = a.successor(&model);
        assert!(a.same_policy(&b));
        b.set_policy(Cell::new(5, 4), Action::Left).unwrap();
        assert!(!a.same_policy(&b));
        assert_eq!(a.policy_changes(&b), 1);
    }

    #[test]
    fn test_equality_is_structural_but_policy_match_ignores_values() {
        let model = standard();
        let a = ValueGrid::seed(&model);
        let mut b = a.clone();
        b.set_value(Cell::new(3, 2), 0.5).unwrap();
        assert!(a.same_policy(&b));
        assert_ne!(a, b);
        assert_ne!(a, a.successor(&model));
    }

    #[test]
    fn test_values_close_and_delta() {
        let model = standard();
        let a = ValueGrid::seed(&model);
        let mut b = a.successor(&model);
        b.set_value(Cell::new(3, 2), 1e-12).unwrap();
        assert!(a.values_close(&b, Tolerance::default()));
        b.set_value(Cell::new(3, 2), 0.5).unwrap();
        assert!(!a.values_close(&b, Tolerance::default()));
        assert_eq!(a.max_value_delta(&b), 0.5);
    }

    #[test]
    fn test_rendering_marks_walls() {
        let grid = ValueGrid::seed(&standard());
        let rows = grid.policy_rows();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.chars().all(|c| c == '█')));
        let text = grid.to_string();
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().next().unwrap().contains('·'));
    }
}
