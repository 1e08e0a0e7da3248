//! Solver configuration.

use serde::{Deserialize, Serialize};

use super::convergence::{ConvergenceCriterion, Tolerance};
use crate::{Error, Result, gridworld::layout};

/// Parameters of a value-iteration run.
///
/// The domain itself is not part of the configuration; it is injected as a
/// [`GridWorld`](crate::gridworld::GridWorld).
///
/// # Examples
///
/// ```
/// use stabilizer::{ConvergenceCriterion, SolverConfig};
///
/// let config = SolverConfig::new(0.9)
///     .with_criterion(ConvergenceCriterion::Both)
///     .with_max_iterations(250)
///     .with_shaping(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Discount factor γ, in (0, 1]
    pub discount: f64,
    /// Sweep cap; reaching it ends the run as not stabilized
    pub max_iterations: usize,
    /// Stopping rule between consecutive snapshots
    pub criterion: ConvergenceCriterion,
    /// Closeness used by value-based criteria
    pub tolerance: Tolerance,
    /// Whether the distance shaping bonus is added to each backup
    pub shaping: bool,
}

impl SolverConfig {
    /// Create a configuration with the given discount and default settings.
    ///
    /// Defaults: sweep cap 100, policy-only convergence, shaping enabled.
    pub fn new(discount: f64) -> Self {
        Self {
            discount,
            max_iterations: layout::MAX_ITERATIONS,
            criterion: ConvergenceCriterion::default(),
            tolerance: Tolerance::default(),
            shaping: true,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_criterion(mut self, criterion: ConvergenceCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_shaping(mut self, shaping: bool) -> Self {
        self.shaping = shaping;
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDiscount`] for γ outside (0, 1], and
    /// [`Error::InvalidConfiguration`] for a zero sweep cap or a negative or
    /// non-finite tolerance.
    pub fn validate(&self) -> Result<()> {
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(Error::InvalidDiscount {
                value: self.discount,
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_iterations must be at least 1".to_string(),
            });
        }
        let Tolerance { relative, absolute } = self.tolerance;
        if !(relative.is_finite() && relative >= 0.0 && absolute.is_finite() && absolute >= 0.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "tolerance must be non-negative and finite \
                     (relative={relative}, absolute={absolute})"
                ),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(layout::DEFAULT_DISCOUNT)
    }
}
