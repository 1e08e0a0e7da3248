//! When to stop sweeping

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::value_grid::ValueGrid;

/// Absolute plus relative closeness test, `|a - b| <= absolute + relative * |b|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Tolerance {
    pub const fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.absolute + self.relative * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-5, 1e-8)
    }
}

/// Test applied to consecutive snapshots after each sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceCriterion {
    /// The recorded action is unchanged in every cell. Values may still drift.
    #[default]
    Policy,
    /// Every value is within tolerance of its predecessor.
    Values,
    /// Both the policy and the values have settled.
    Both,
    /// Either the policy or the values have settled.
    Either,
}

impl ConvergenceCriterion {
    pub const ALL: [ConvergenceCriterion; 4] = [
        ConvergenceCriterion::Policy,
        ConvergenceCriterion::Values,
        ConvergenceCriterion::Both,
        ConvergenceCriterion::Either,
    ];

    pub fn is_satisfied(
        self,
        previous: &ValueGrid,
        next: &ValueGrid,
        tolerance: Tolerance,
    ) -> bool {
        let policy = || next.same_policy(previous);
        let values = || next.values_close(previous, tolerance);
        match self {
            ConvergenceCriterion::Policy => policy(),
            ConvergenceCriterion::Values => values(),
            ConvergenceCriterion::Both => policy() && values(),
            ConvergenceCriterion::Either => policy() || values(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConvergenceCriterion::Policy => "policy",
            ConvergenceCriterion::Values => "values",
            ConvergenceCriterion::Both => "both",
            ConvergenceCriterion::Either => "either",
        }
    }
}

impl fmt::Display for ConvergenceCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConvergenceCriterion {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConvergenceCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::ParseCriterion {
                input: s.to_string(),
                expected: "policy, values, both, either".to_string(),
            })
    }
}
