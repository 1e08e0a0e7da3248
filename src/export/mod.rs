//! Export functionality for solutions and sweeps
//!
//! Solutions are written as pretty-printed JSON, discount sweeps as CSV.

mod solution_json;
mod sweep_csv;

pub use solution_json::SolutionExport;
pub use sweep_csv::{SweepCsvRecord, write_sweep_csv, write_sweep_csv_to};
