use thiserror::Error;

use labelsched_model::{ExecutorKind, ModelError};

/// Errors surfaced by the scheduling pipeline.
///
/// None of them is retryable: the workload must not be scheduled on that executor.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("NOT_RECOGNIZED_RUNTIME_TYPE: executor kind {kind} expects a service group, got {got}")]
    NotRecognizedRuntimeType { kind: ExecutorKind, got: &'static str },

    #[error("NOT_RECOGNIZED_JOB_TYPE: executor kind {kind} expects a job, got {got}")]
    NotRecognizedJobType { kind: ExecutorKind, got: &'static str },

    #[error("unknown executor: {0}")]
    UnknownExecutor(String),

    #[error("duplicate executor: '{0}' is already registered")]
    DuplicateExecutor(String),
}

impl CoreError {
    /// Stable short name used as metrics label.
    pub fn as_label(&self) -> &'static str {
        match self {
            CoreError::Model(ModelError::UnknownExecutorKind(_)) => "unknown_executor_kind",
            CoreError::NotRecognizedRuntimeType { .. } => "not_recognized_runtime_type",
            CoreError::NotRecognizedJobType { .. } => "not_recognized_job_type",
            CoreError::UnknownExecutor(_) => "unknown_executor",
            CoreError::DuplicateExecutor(_) => "duplicate_executor",
        }
    }
}
