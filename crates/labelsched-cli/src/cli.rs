use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use labelsched_core::{ExecutorConfigProvider, LabelScheduler};
use labelsched_model::Workload;
use labelsched_prometheus::PrometheusMetrics;

use crate::config::AppConfig;

/// Evaluate label-based placement constraints for workloads.
#[derive(Debug, Parser)]
#[command(name = "labelsched", version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(long, short, global = true, env = "LABELSCHED_CONFIG", default_value = "labelsched.json")]
    pub config: PathBuf,

    /// Override the configured log filter, e.g. `labelsched_core=debug,info`.
    #[arg(long, global = true, env = "LABELSCHED_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a workload through the label filter chain of one executor.
    Eval {
        /// Registered executor name.
        #[arg(long, short)]
        executor: String,

        /// Workload JSON file, `-` for stdin.
        #[arg(long, short, default_value = "-")]
        workload: String,

        /// Print Prometheus metrics to stderr afterwards.
        #[arg(long)]
        metrics: bool,
    },

    /// List registered executors.
    Executors,
}

#[derive(Serialize)]
struct ExecutorRow<'a> {
    name: &'a str,
    kind: &'a str,
    enabled: bool,
    orgs: usize,
}

impl Cli {
    pub fn run(self, cfg: AppConfig) -> Result<()> {
        let provider = Arc::new(cfg.provider()?);
        info!(executors = provider.len(), "executor registry loaded");

        match self.command {
            Commands::Executors => {
                let mut rows = Vec::with_capacity(provider.len());
                for name in provider.names() {
                    let Some(reg) = provider.registration(name) else {
                        continue;
                    };
                    rows.push(ExecutorRow {
                        name,
                        kind: reg.kind.as_str(),
                        enabled: reg.configs.enable_label_schedule(),
                        orgs: reg.configs.plus_configs.as_ref().map_or(0, |p| p.orgs.len()),
                    });
                }
                print_json(&rows)
            }
            Commands::Eval {
                executor,
                workload,
                metrics,
            } => {
                let workload = read_workload(&workload)?;
                let prom = PrometheusMetrics::new().context("registering metrics")?;
                let scheduler = LabelScheduler::new(provider).with_metrics(Arc::new(prom.clone()));

                let outcome = scheduler
                    .schedule(&executor, &workload)
                    .with_context(|| format!("scheduling '{}' on executor '{executor}'", workload.name()))?;
                print_json(&outcome)?;

                if metrics {
                    eprint!("{}", prom.encode_text().context("encoding metrics")?);
                }
                Ok(())
            }
        }
    }
}

fn read_workload(src: &str) -> Result<Workload> {
    let raw = if src == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading workload from stdin")?;
        buf
    } else {
        fs::read_to_string(src).with_context(|| format!("reading workload {src}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("parsing workload {src}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
