use std::sync::Arc;

use crate::{pipeline::Evaluation, schedule::Diagnostic};

/// Result of one scheduling evaluation, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationOutcome {
    /// The filter chain ran and produced constraints.
    Labeled,
    /// Label scheduling is off for the executor.
    Disabled,
    /// The executor kind does not take part in label scheduling.
    Unsupported,
    /// The request was refused with an error.
    Rejected,
}

impl EvaluationOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            EvaluationOutcome::Labeled => "labeled",
            EvaluationOutcome::Disabled => "disabled",
            EvaluationOutcome::Unsupported => "unsupported",
            EvaluationOutcome::Rejected => "rejected",
        }
    }
}

impl From<Evaluation> for EvaluationOutcome {
    fn from(e: Evaluation) -> Self {
        match e {
            Evaluation::Labeled => EvaluationOutcome::Labeled,
            Evaluation::Disabled => EvaluationOutcome::Disabled,
            Evaluation::Unsupported => EvaluationOutcome::Unsupported,
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record one evaluation of the label pipeline.
    ///
    /// # Arguments
    /// - `executor_kind`: registered executor kind, e.g. `K8S`
    /// - `outcome`: how the evaluation ended
    /// - `duration_us`: wall time spent in the pipeline, in microseconds
    fn record_evaluation(&self, executor_kind: &str, outcome: EvaluationOutcome, duration_us: u64);
    /// Record a tolerated problem reported by a filter.
    fn record_diagnostic(&self, executor_kind: &str, diagnostic: &Diagnostic);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
