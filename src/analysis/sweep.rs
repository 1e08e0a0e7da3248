//! Discount sweeps and policy-switch thresholds
//!
//! Solving the same domain for a range of discount factors shows where the
//! optimal policy changes, e.g. the discount below which a numbered state
//! prefers to cash out instead of walking toward a larger reward.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    gridworld::{Action, Cell, GridWorld},
    value_iteration::{SolverConfig, Termination, ValueIteration},
};

/// Outcome of one solve in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub discount: f64,
    pub iterations: usize,
    pub termination: Termination,
    /// Action recorded at the probe cell, if a probe was given
    pub probe_action: Option<Action>,
    pub probe_value: Option<f64>,
}

/// `steps` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Solve `model` once with `base` at the given discount.
pub fn solve_at(
    model: &GridWorld,
    base: &SolverConfig,
    discount: f64,
    probe: Option<Cell>,
) -> Result<SweepPoint> {
    let config = base.clone().with_discount(discount);
    let solution = ValueIteration::new(model.clone(), config)?.solve()?;
    let point = SweepPoint {
        discount,
        iterations: solution.iterations,
        termination: solution.termination,
        probe_action: probe.and_then(|cell| solution.action_at(cell)),
        probe_value: probe.and_then(|cell| solution.value_at(cell)),
    };
    debug!(
        discount,
        iterations = point.iterations,
        termination = %point.termination,
        "sweep point solved"
    );
    Ok(point)
}

/// Solve once per discount, in order.
pub fn sweep_discounts(
    model: &GridWorld,
    base: &SolverConfig,
    discounts: &[f64],
    probe: Option<Cell>,
) -> Result<Vec<SweepPoint>> {
    discounts
        .iter()
        .map(|&discount| solve_at(model, base, discount, probe))
        .collect()
}

/// A bracket around a discount at which the probe's action switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub probe: Cell,
    pub action: Action,
    /// Discount on the `low` side of the switch
    pub below: f64,
    /// Discount on the `high` side of the switch
    pub above: f64,
    /// Whether `action` is chosen at `below`
    pub chosen_below: bool,
    /// Number of solves performed
    pub evaluations: usize,
}

impl Threshold {
    pub fn midpoint(&self) -> f64 {
        (self.below + self.above) / 2.0
    }
}

/// Bisect `[low, high]` for a discount where choosing `action` at `probe`
/// flips, until the bracket is no wider than `precision`.
///
/// # Errors
///
/// [`Error::ThresholdNotBracketed`] if `action` is chosen at both ends or at
/// neither; [`Error::InvalidConfiguration`] for an empty interval or a
/// non-positive precision.
pub fn find_threshold(
    model: &GridWorld,
    base: &SolverConfig,
    probe: Cell,
    action: Action,
    low: f64,
    high: f64,
    precision: f64,
) -> Result<Threshold> {
    if !(low < high) {
        return Err(Error::InvalidConfiguration {
            message: format!("threshold interval [{low}, {high}] is empty"),
        });
    }
    if !(precision > 0.0) {
        return Err(Error::InvalidConfiguration {
            message: format!("threshold precision {precision} must be positive"),
        });
    }

    let mut evaluations = 0;
    let mut chosen = |discount: f64| -> Result<(bool, Option<Action>)> {
        evaluations += 1;
        let point = solve_at(model, base, discount, Some(probe))?;
        Ok((point.probe_action == Some(action), point.probe_action))
    };

    let (at_low, low_action) = chosen(low)?;
    let (at_high, high_action) = chosen(high)?;
    if at_low == at_high {
        let describe = |a: Option<Action>| a.map_or("unset".to_string(), |a| a.to_string());
        return Err(Error::ThresholdNotBracketed {
            probe,
            low,
            high,
            at_low: describe(low_action),
            at_high: describe(high_action),
        });
    }

    let (mut below, mut above) = (low, high);
    while above - below > precision {
        let mid = (below + above) / 2.0;
        let (at_mid, _) = chosen(mid)?;
        if at_mid == at_low {
            below = mid;
        } else {
            above = mid;
        }
    }

    Ok(Threshold {
        probe,
        action,
        below,
        above,
        chosen_below: at_low,
        evaluations,
    })
}
