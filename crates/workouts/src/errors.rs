use thiserror::Error;

use crate::models::ActivityKind;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("{kind} reading expects {expected} fields, got {actual}")]
    ArityMismatch {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed reading batch: {0}")]
    MalformedBatch(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
