use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use labelsched_core::{ExecutorRegistration, StaticConfigProvider};
use labelsched_observe::LoggerConfig;

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub executors: Vec<ExecutorRegistration>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Registered executors; names must be unique.
    pub fn provider(&self) -> Result<StaticConfigProvider> {
        StaticConfigProvider::from_registrations(self.executors.iter().cloned())
            .context("building executor registry")
    }
}
