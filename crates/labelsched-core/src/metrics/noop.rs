use crate::{
    metrics::backend::{EvaluationOutcome, MetricsBackend},
    schedule::Diagnostic,
};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_evaluation(&self, _: &str, _: EvaluationOutcome, _: u64) {}

    #[inline(always)]
    fn record_diagnostic(&self, _: &str, _: &Diagnostic) {}
}
