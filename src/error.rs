//! Error type shared by the baseline loader, adjustment validation and report export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// A percentage adjustment fell outside the allowed slider range
    #[error("{item} adjustment of {value}% is outside the allowed range [{min}%, {max}%]")]
    AdjustmentOutOfRange {
        item: String,
        value: i32,
        min: i32,
        max: i32,
    },

    /// Wrong number of per-line adjustments (e.g. 3 supplier values instead of 4)
    #[error("expected {expected} {group} adjustments, got {actual}")]
    AdjustmentCount {
        group: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("baseline: {0}")]
    Baseline(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
