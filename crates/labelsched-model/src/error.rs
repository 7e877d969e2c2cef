use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown executor kind: {0}")]
    UnknownExecutorKind(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
