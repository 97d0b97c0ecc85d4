/// Error types for loading and building a dataset
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to read the source
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// More than one record for the same country and year
    #[error("Duplicate record for {country} in {year}")]
    DuplicateRecord { country: String, year: i32 },

    /// The source contained no usable rows
    #[error("Dataset contains no usable records")]
    Empty,
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
