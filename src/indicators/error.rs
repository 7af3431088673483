//! Indicator error taxonomy

use thiserror::Error;

/// Coarse error class, used by callers that need to tell unreadable input
/// apart from readable-but-unusable input (e.g. for process exit codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    Data,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Input cannot be read as the required shape
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Required OHLC(V) fields absent on a record
    #[error("{record} missing fields: {}", fields.join(", "))]
    MissingField { record: String, fields: Vec<String> },

    #[error("Need at least {required} {unit}, got {got}")]
    InsufficientData {
        required: usize,
        got: usize,
        unit: &'static str,
    },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl IndicatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndicatorError::MalformedInput(_) => ErrorKind::Malformed,
            _ => ErrorKind::Data,
        }
    }

    pub fn missing_fields(index: usize, fields: Vec<String>) -> Self {
        IndicatorError::MissingField {
            record: format!("Candle {index}"),
            fields,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
