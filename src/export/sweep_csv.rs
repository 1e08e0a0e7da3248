//! CSV table of a discount sweep

use std::{io::Write, path::Path};

use serde::Serialize;

use crate::{Result, analysis::SweepPoint, value_iteration::Termination};

/// A single row in the sweep CSV export
#[derive(Debug, Clone, Serialize)]
pub struct SweepCsvRecord {
    pub discount: f64,
    pub iterations: usize,
    pub stabilized: bool,
    pub probe_action: Option<String>,
    pub probe_value: Option<f64>,
}

impl From<&SweepPoint> for SweepCsvRecord {
    fn from(point: &SweepPoint) -> Self {
        Self {
            discount: point.discount,
            iterations: point.iterations,
            stabilized: point.termination == Termination::Stabilized,
            probe_action: point.probe_action.map(|a| a.to_string()),
            probe_value: point.probe_value,
        }
    }
}

/// Write `points` as CSV with a header row.
pub fn write_sweep_csv_to<W: Write>(writer: W, points: &[SweepPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(SweepCsvRecord::from(point))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sweep_csv(path: &Path, points: &[SweepPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for point in points {
        wtr.serialize(SweepCsvRecord::from(point))?;
    }
    wtr.flush()?;
    Ok(())
}
