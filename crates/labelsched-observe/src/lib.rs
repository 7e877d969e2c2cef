//! Logging setup shared by labelsched binaries.
//!
//! ```no_run
//! use labelsched_observe::{LoggerConfig, init_local_offset, init_logger};
//!
//! init_local_offset();
//! init_logger(&LoggerConfig::default()).unwrap();
//! tracing::info!("ready");
//! ```
mod config;
mod error;
mod format;
mod level;
mod timezone;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timezone::{LoggerTimeZone, Rfc3339Timer, init_local_offset};

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] on a second call.
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    let filter = cfg.level.to_env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LoggerFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(cfg.should_use_color())
                .with_target(cfg.with_targets)
                .with_timer(Rfc3339Timer::new(cfg.tz));
            install(registry.with(layer))
        }
        LoggerFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(cfg.with_targets)
                .with_timer(Rfc3339Timer::new(cfg.tz));
            install(registry.with(layer))
        }
        LoggerFormat::Journald => install(registry.with(journald_layer()?)),
    }
}

#[cfg(target_os = "linux")]
fn journald_layer() -> LoggerResult<tracing_journald::Layer> {
    tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn journald_layer() -> LoggerResult<tracing_subscriber::layer::Identity> {
    Err(LoggerError::JournaldNotSupported)
}

fn install<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
