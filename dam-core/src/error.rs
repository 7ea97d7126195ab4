/// Error types for the dashboard core
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Failed to read or write CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A timestamp did not match the `M/DD/YY HH:MM` layout
    #[error("Failed to parse timestamp '{value}': {source}")]
    TimestampParse {
        value: String,
        source: chrono::ParseError,
    },

    /// The dataset has no rows
    #[error("Dataset contains no observations")]
    EmptyDataset,

    /// A timestamp is earlier than the one before it. `row` counts data
    /// rows from 1, excluding the header.
    #[error("Timestamp out of order at data row {row}: {timestamp} precedes {previous}")]
    OutOfOrder {
        row: usize,
        timestamp: String,
        previous: String,
    },

    /// A volume is negative, NaN or infinite. `row` counts data rows from 1.
    #[error("Invalid volume at data row {row}: {volume}")]
    InvalidVolume { row: usize, volume: f64 },

    /// A projected date falls outside the representable calendar
    #[error("Projecting {days} days from {anchor} exceeds the supported date range")]
    ProjectionOverflow { anchor: String, days: u32 },

    /// Export serialization failed
    #[error("Failed to export data: {0}")]
    Export(String),

    /// Failed to read a file from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a JSON configuration document
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
