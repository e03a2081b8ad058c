//! Engine errors.
//!
//! Structural problems and invalid edits are errors; an unfillable shift
//! is not (it stays empty in the output).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the engine.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Malformed input: {0:?}")]
    Structural(Vec<ValidationError>),
    #[error("Cannot generate a schedule without workers")]
    EmptyWorkforce,
    #[error("Shift not found: {0}")]
    UnknownShift(String),
    #[error("Worker not found: {0}")]
    UnknownWorker(String),
    #[error("Worker {worker_id} is not assigned to shift {shift_id}")]
    WorkerNotInShift { worker_id: String, shift_id: String },
    #[error("No suggested schedule to apply")]
    NoPendingSuggestion,
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::Structural(errors)
    }
}

impl SchedulerError {
    /// Whether this error rejects a manual edit (as opposed to bad input).
    pub fn is_invalid_edit(&self) -> bool {
        matches!(
            self,
            SchedulerError::UnknownShift(_)
                | SchedulerError::UnknownWorker(_)
                | SchedulerError::WorkerNotInShift { .. }
        )
    }
}
