//! Error types for yield simulation

use thiserror::Error;

/// Errors raised by the simulator, the input loaders and the presenters
#[derive(Debug, Error)]
pub enum YieldError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid floating-rate distribution: mean {mean}, std dev {std_dev}")]
    InvalidDistribution { mean: f64, std_dev: f64 },

    #[error("Cash flows sum to zero; total investment cannot be used as a divisor")]
    ZeroInvestment,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YieldError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        YieldError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, YieldError>;
