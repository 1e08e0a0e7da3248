//! Common test utilities for the stabilizer test suite.

#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use stabilizer::{GridWorld, Solution, SolverConfig, ValueIteration};

/// Solve the standard domain with the given configuration.
pub fn solve_standard(config: SolverConfig) -> Solution {
    let model = GridWorld::standard().expect("standard domain should build");
    ValueIteration::new(model, config)
        .expect("config should be valid")
        .solve()
        .expect("solve should succeed")
}

/// Translate compact policy rows (`R D L U X #`) into rendered glyph rows.
pub fn policy_rows(rows: &[&str]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'R' => '→',
                    'D' => '↓',
                    'L' => '←',
                    'U' => '↑',
                    'X' => 'X',
                    '#' => '█',
                    other => panic!("unknown policy code '{other}'"),
                })
                .collect()
        })
        .collect()
}

/// Seeded discount factors in (0, 1].
pub fn random_discounts(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0.05..=1.0)).collect()
}
