//! Error types for the stabilizer crate

use thiserror::Error;

use crate::gridworld::Cell;

/// Main error type for the stabilizer crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{what} grid has {got} cells but the domain is {rows}x{cols}")]
    DimensionMismatch {
        what: &'static str,
        rows: usize,
        cols: usize,
        got: usize,
    },

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    CellOutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("numbered state {cell} is a wall")]
    NumberedOnWall { cell: Cell },

    #[error("numbered state {cell} is listed more than once")]
    DuplicateNumbered { cell: Cell },

    #[error("reward {value} for {cell} must be finite")]
    InvalidReward { cell: Cell, value: f64 },

    #[error("non-wall cell {cell} has no legal action that avoids a wall")]
    NoLegalActions { cell: Cell },

    #[error("attempted to write a value into wall cell {cell}")]
    WallWrite { cell: Cell },

    #[error("discount factor {value} must lie in (0, 1]")]
    InvalidDiscount { value: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid cell '{input}' (expected 'row,col')")]
    ParseCell { input: String },

    #[error("invalid action '{input}'. Expected one of: {expected}")]
    ParseAction { input: String, expected: String },

    #[error("invalid convergence criterion '{input}'. Expected one of: {expected}")]
    ParseCriterion { input: String, expected: String },

    #[error(
        "policy at {probe} is {at_low} at discount {low} and {at_high} at discount {high}; \
         no switch to bracket"
    )]
    ThresholdNotBracketed {
        probe: Cell,
        low: f64,
        high: f64,
        at_low: String,
        at_high: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
