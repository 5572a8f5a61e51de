//! Error types for workout processing

use thiserror::Error;

/// Errors raised while building or reporting a training
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("invalid argument count for {code}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrainingError>;
