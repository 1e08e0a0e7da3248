//! Pinned results for the standard 6x5 domain

use stabilizer::{Action, Cell, ConvergenceCriterion, SolverConfig, Termination};

mod common;

use common::{policy_rows, solve_standard};

#[test]
fn default_run_stabilizes_after_six_sweeps() {
    let solution = solve_standard(SolverConfig::new(0.5));

    assert_eq!(solution.termination, Termination::Stabilized);
    assert_eq!(solution.iterations, 6);
    assert_eq!(solution.grid.generation(), 6);

    assert_eq!(
        solution.grid.policy_rows(),
        policy_rows(&["D####", "URD#D", "U#XLL", "X#ULD", "D#U#D", "RRLRL"])
    );

    let expected: [[Option<f64>; 5]; 6] = [
        [Some(10.5), None, None, None, None],
        [Some(5.25), Some(3.0), Some(6.0), None, Some(1.5)],
        [Some(2.5), None, Some(12.0), Some(6.0), Some(3.0)],
        [Some(4.5), None, Some(6.0), Some(3.0), Some(2.5)],
        [Some(2.5), None, Some(3.0), None, Some(5.25)],
        [Some(5.25), Some(10.5), Some(5.25), Some(5.25), Some(10.5)],
    ];
    let rows = solution.grid.value_rows();
    for (row, expected_row) in rows.iter().zip(expected.iter()) {
        assert_eq!(row.as_slice(), expected_row.as_slice());
    }
}

#[test]
fn largest_reward_cell_exits() {
    let solution = solve_standard(SolverConfig::new(0.5));
    assert_eq!(solution.action_at(Cell::new(2, 2)), Some(Action::Exit));
    assert_eq!(solution.value_at(Cell::new(2, 2)), Some(12.0));
    // (3,0) cashes out its 3 rather than chasing the shaping bonus.
    assert_eq!(solution.action_at(Cell::new(3, 0)), Some(Action::Exit));
}

#[test]
fn low_discount_makes_small_reward_cell_exit() {
    let solution = solve_standard(SolverConfig::new(0.1));
    assert!(solution.is_stabilized());
    assert_eq!(solution.iterations, 4);
    assert_eq!(solution.action_at(Cell::new(1, 1)), Some(Action::Exit));
}

#[test]
fn without_shaping_the_policy_oscillates_until_the_cap() {
    let solution = solve_standard(SolverConfig::new(0.5).with_shaping(false));

    assert_eq!(solution.termination, Termination::IterationCap);
    assert_eq!(solution.iterations, 100);
    assert_eq!(
        solution.grid.policy_rows(),
        policy_rows(&["D####", "DRD#D", "D#XLL", "U#ULL", "U#U#U", "URULL"])
    );
    assert_eq!(solution.value_at(Cell::new(0, 0)), Some(0.75));
    assert_eq!(solution.value_at(Cell::new(5, 4)), Some(0.375));
}

#[test]
fn odd_cap_lands_on_the_other_half_of_the_cycle() {
    let solution = solve_standard(
        SolverConfig::new(0.5)
            .with_shaping(false)
            .with_max_iterations(99),
    );
    assert_eq!(solution.termination, Termination::IterationCap);
    assert_eq!(
        solution.grid.policy_rows(),
        policy_rows(&["D####", "RRD#D", "X#XLL", "X#ULL", "U#U#U", "URULL"])
    );
}

#[test]
fn convergence_criteria_disagree_on_when_to_stop() {
    let run = |criterion| {
        solve_standard(SolverConfig::new(0.5).with_criterion(criterion)).iterations
    };
    assert_eq!(run(ConvergenceCriterion::Policy), 6);
    assert_eq!(run(ConvergenceCriterion::Either), 6);
    assert_eq!(run(ConvergenceCriterion::Values), 20);
    assert_eq!(run(ConvergenceCriterion::Both), 20);
}

#[test]
fn stabilizes_well_under_the_cap() {
    let solution = solve_standard(SolverConfig::default());
    assert!(solution.is_stabilized());
    assert!(solution.iterations < 100);
}

#[test]
fn printed_report_for_the_default_run() {
    let text = solve_standard(SolverConfig::new(0.5)).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "6 iterations");
    assert_eq!(lines[1], "  10.500        ·        ·        ·        ·");
    assert_eq!(lines[7], "↓ █ █ █ █");
    assert_eq!(lines[12], "→ → ← → ←");
}

#[test]
fn printed_report_flags_a_run_that_hit_the_cap() {
    let text = solve_standard(SolverConfig::new(0.5).with_shaping(false)).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "100 iterations (did not stabilize)");
    assert_eq!(lines[7], "↓ █ █ █ █");
}
