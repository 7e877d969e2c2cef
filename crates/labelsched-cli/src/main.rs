use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use labelsched_observe::{LoggerLevel, init_local_offset, init_logger};

mod cli;
mod config;

use cli::Cli;
use config::AppConfig;

fn main() -> Result<()> {
    // before anything can spawn a thread
    init_local_offset();

    let cli = Cli::parse();
    let mut cfg = AppConfig::load(&cli.config)?;

    if let Some(level) = cli.log_level.as_deref() {
        cfg.logger.level = LoggerLevel::new(level).context("--log-level")?;
    }
    init_logger(&cfg.logger).context("initializing logger")?;
    debug!(config = %cli.config.display(), "configuration loaded");

    cli.run(cfg)
}
