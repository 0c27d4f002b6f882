//! Error types for the movement phase detection library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// CSV reading or parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Trajectory too short to compute a first difference
    #[error("trajectory has {0} sample(s); at least 2 are required")]
    InsufficientSamples(usize),

    /// Coordinate sequences of a trajectory differ in length
    #[error("trajectory axes have mismatched lengths: x={x}, y={y}, z={z}")]
    MismatchedAxes {
        /// Length of the x sequence
        x: usize,
        /// Length of the y sequence
        y: usize,
        /// Length of the z sequence
        z: usize,
    },

    /// A cell in the input table failed to parse as a number
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    InvalidCell {
        /// Zero-based data row index (header excluded)
        row: usize,
        /// Column name from the header
        column: String,
        /// The offending cell content
        value: String,
    },

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
