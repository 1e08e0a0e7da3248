//! JSON document for a finished solve

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    value_iteration::{ConvergenceCriterion, Solution, SweepRecord, Termination},
};

/// Serializable view of a [`Solution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionExport {
    pub discount: f64,
    pub criterion: ConvergenceCriterion,
    pub shaping: bool,
    pub iterations: usize,
    pub termination: Termination,
    /// Row-major values, `null` at walls
    pub values: Vec<Vec<Option<f64>>>,
    /// One string of glyphs per row
    pub policy: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<SweepRecord>>,
}

impl SolutionExport {
    pub fn new(solution: &Solution) -> Self {
        Self {
            discount: solution.config.discount,
            criterion: solution.config.criterion,
            shaping: solution.config.shaping,
            iterations: solution.iterations,
            termination: solution.termination,
            values: solution.grid.value_rows(),
            policy: solution.grid.policy_rows(),
            history: None,
        }
    }

    /// Attach per-sweep records collected by a
    /// [`HistoryObserver`](crate::value_iteration::HistoryObserver).
    pub fn with_history(mut self, history: Vec<SweepRecord>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridWorld, SolverConfig, ValueIteration};

    #[test]
    fn test_walls_serialize_as_null() {
        let solution = ValueIteration::new(GridWorld::standard().unwrap(), SolverConfig::new(0.5))
            .unwrap()
            .solve()
            .unwrap();
        let json = SolutionExport::new(&solution).to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["iterations"], 6);
        assert_eq!(value["termination"], "stabilized");
        assert_eq!(value["criterion"], "policy");
        assert!(value["values"][0][1].is_null());
        assert_eq!(value["policy"][0], "↓████");
        assert!(value.get("history").is_none());
    }
}
