//! Invariants of the domain and of every generation the solver produces

use stabilizer::{
    Action, Cell, GridWorld, SolverConfig, Transition, ValueGrid, ValueIteration,
    gridworld::BLOCKED_GLYPH,
};

mod common;

use common::{random_discounts, solve_standard};

fn standard() -> GridWorld {
    GridWorld::standard().unwrap()
}

mod domain {
    use super::*;

    #[test]
    fn test_exit_never_legal_off_numbered_states() {
        let model = standard();
        for cell in model.cells() {
            if model.is_wall(cell) || model.is_numbered(cell) {
                continue;
            }
            assert!(
                !model.legal_actions(cell).contains(&Action::Exit),
                "exit offered at {cell}"
            );
        }
        assert!(!model.legal_actions(Cell::new(0, 0)).contains(&Action::Exit));
    }

    #[test]
    fn test_corner_moves_are_no_ops() {
        let grid = ValueGrid::seed(&standard());
        let corner = Cell::new(0, 0);
        assert_eq!(
            grid.resulting_state(corner, Action::Up),
            Transition::Moved(corner)
        );
        assert_eq!(
            grid.resulting_state(corner, Action::Left),
            Transition::Moved(corner)
        );
    }

    #[test]
    fn test_reward_table() {
        let model = standard();
        assert_eq!(model.reward(Cell::new(1, 4), Action::Exit), Some(-1.0));
        assert_eq!(model.reward(Cell::new(2, 2), Action::Exit), Some(8.0));
        for cell in model.cells() {
            for action in Action::DIRECTIONS {
                assert_eq!(model.reward(cell, action), Some(0.0));
            }
        }
    }

    #[test]
    fn test_shaping_is_zero_on_numbered_destinations() {
        let model = standard();
        for start in model.cells() {
            for &numbered in model.numbered_states() {
                assert_eq!(model.shaping_bonus(start, Transition::Moved(numbered)), 0.0);
            }
        }
    }

    #[test]
    fn test_every_open_cell_has_a_move() {
        let model = standard();
        for cell in model.cells().filter(|&c| !model.is_wall(c)) {
            assert!(!model.wall_avoiding_actions(cell).is_empty(), "{cell}");
        }
    }
}

mod generations {
    use super::*;

    #[test]
    fn test_walls_stay_blocked_in_every_generation() {
        let model = standard();
        let engine = ValueIteration::new(model.clone(), SolverConfig::new(0.5)).unwrap();
        let mut grid = ValueGrid::seed(&model);
        for _ in 0..10 {
            for wall in model.walls() {
                assert_eq!(grid.value(wall), None);
                assert_eq!(grid.policy(wall), None);
            }
            for (row, glyphs) in grid.policy_rows().iter().enumerate() {
                for (col, glyph) in glyphs.chars().enumerate() {
                    if model.is_wall(Cell::new(row, col)) {
                        assert_eq!(glyph, BLOCKED_GLYPH);
                    }
                }
            }
            grid = engine.sweep(&grid).unwrap();
        }
    }

    #[test]
    fn test_every_open_cell_written_each_sweep() {
        let model = standard();
        let engine = ValueIteration::new(model.clone(), SolverConfig::new(0.5)).unwrap();
        let next = engine.sweep(&ValueGrid::seed(&model)).unwrap();
        for cell in model.cells().filter(|&c| !model.is_wall(c)) {
            assert!(next.value(cell).is_some());
            assert!(next.policy(cell).is_some());
        }
    }

    #[test]
    fn test_exit_only_recorded_on_numbered_states() {
        let solution = solve_standard(SolverConfig::new(0.9));
        let model = standard();
        for cell in model.cells() {
            if solution.action_at(cell) == Some(Action::Exit) {
                assert!(model.is_numbered(cell), "{cell}");
            }
        }
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeat_runs_are_identical() {
        let first = solve_standard(SolverConfig::new(0.5));
        let second = solve_standard(SolverConfig::new(0.5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeat_runs_are_identical_for_random_discounts() {
        for discount in random_discounts(42, 12) {
            let first = solve_standard(SolverConfig::new(discount));
            let second = solve_standard(SolverConfig::new(discount));
            assert_eq!(first.iterations, second.iterations, "γ={discount}");
            assert_eq!(first.grid, second.grid, "γ={discount}");
            assert!(first.iterations <= 100);
        }
    }
}
