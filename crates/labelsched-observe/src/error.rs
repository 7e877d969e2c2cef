use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format '{0}' (expected text, json or journald)")]
    InvalidFormat(String),

    #[error("journald is only available on linux")]
    JournaldNotSupported,

    #[error("journald layer: {0}")]
    JournaldInitFailed(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized,

    #[error("invalid timezone '{0}' (expected utc or local)")]
    InvalidTimeZone(String),

    #[error("invalid log filter {0}")]
    InvalidLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
