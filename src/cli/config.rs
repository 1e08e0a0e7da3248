//! Shared solver options for CLI commands

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;

use crate::value_iteration::{ConvergenceCriterion, SolverConfig, Tolerance};

/// Solver options accepted by every command.
///
/// Values come from `--config` when given, then individual flags override
/// them.
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// JSON file with solver settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Convergence criterion (policy, values, both, either)
    #[arg(long)]
    pub criterion: Option<String>,

    /// Maximum number of sweeps before giving up
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Absolute tolerance for value-based criteria
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Relative tolerance for value-based criteria
    #[arg(long)]
    pub relative_tolerance: Option<f64>,

    /// Disable the distance shaping bonus
    #[arg(long)]
    pub no_shaping: bool,
}

impl SolverArgs {
    /// Build the effective configuration, overriding the discount if given.
    pub fn resolve(&self, discount: Option<f64>) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => load_solver_config(path)?,
            None => SolverConfig::default(),
        };

        if let Some(discount) = discount {
            config.discount = discount;
        }
        if let Some(criterion) = &self.criterion {
            config.criterion = criterion.parse::<ConvergenceCriterion>()?;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if self.tolerance.is_some() || self.relative_tolerance.is_some() {
            config.tolerance = Tolerance::new(
                self.relative_tolerance.unwrap_or(config.tolerance.relative),
                self.tolerance.unwrap_or(config.tolerance.absolute),
            );
        }
        if self.no_shaping {
            config.shaping = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read a [`SolverConfig`] from a JSON file; missing fields take defaults.
pub fn load_solver_config(path: &Path) -> Result<SolverConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}
