//! Scheduler facade: looks up the executor registration, runs the pipeline, records metrics.
mod provider;
pub use provider::{ExecutorConfigProvider, ExecutorRegistration, StaticConfigProvider};

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{debug, instrument};

use labelsched_model::Workload;

use crate::{
    error::CoreError,
    metrics::{EvaluationOutcome, MetricsHandle, noop_metrics},
    pipeline::{ScheduleOutcome, label_filter_chain},
};

/// Kind label used when the executor itself is unknown.
const UNKNOWN_KIND: &str = "unknown";

/// Entry point for components that need scheduling constraints.
///
/// Holds no mutable state; one instance can serve any number of threads.
pub struct LabelScheduler {
    provider: Arc<dyn ExecutorConfigProvider>,
    metrics: MetricsHandle,
}

impl LabelScheduler {
    /// Create a scheduler over `provider` with no-op metrics.
    pub fn new(provider: Arc<dyn ExecutorConfigProvider>) -> Self {
        Self {
            provider,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend and return updated scheduler.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Scheduling constraints of `workload` on executor `executor_name`.
    ///
    /// An error means the workload must not be scheduled on that executor.
    #[instrument(level = "debug", skip(self, workload), fields(workload = workload.name()))]
    pub fn schedule(&self, executor_name: &str, workload: &Workload) -> Result<ScheduleOutcome, CoreError> {
        let Some(reg) = self.provider.registration(executor_name) else {
            self.metrics
                .record_evaluation(UNKNOWN_KIND, EvaluationOutcome::Rejected, 0);
            return Err(CoreError::UnknownExecutor(executor_name.to_string()));
        };
        let kind = reg.kind.as_str();

        let started = Instant::now();
        let res = label_filter_chain(&reg.configs, executor_name, kind, workload);
        let elapsed_us = saturating_micros(started.elapsed());

        match &res {
            Ok(out) => {
                self.metrics
                    .record_evaluation(kind, out.evaluation.into(), elapsed_us);
                for d in &out.schedule_info2.diagnostics {
                    self.metrics.record_diagnostic(kind, d);
                }
            }
            Err(e) => {
                debug!(error = %e, kind, "label scheduling rejected workload");
                self.metrics
                    .record_evaluation(kind, EvaluationOutcome::Rejected, elapsed_us);
            }
        }
        res
    }
}

/// Whole microseconds, clamped to `u64::MAX`.
fn saturating_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
