//! Error types for input loading and checked projections

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("compounding frequency must be at least 1")]
    InvalidFrequency,

    #[error("invalid annual rate: {0}")]
    InvalidRate(f64),

    /// Growth over the horizon does not fit in an f64
    #[error("projection overflowed after {years} years at {annual_rate}%")]
    Overflow { years: f64, annual_rate: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
