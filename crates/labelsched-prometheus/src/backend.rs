use std::sync::Arc;

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder, proto::MetricFamily,
};

use labelsched_core::{Diagnostic, EvaluationOutcome, MetricsBackend};

/// Prometheus implementation of [`MetricsBackend`].
///
/// ## Metrics
/// - `labelsched_evaluations_total{executor_kind, outcome}`
/// - `labelsched_evaluation_duration_seconds{executor_kind}`
/// - `labelsched_diagnostics_total{executor_kind, kind}`
///
/// Label values are bounded: executor kinds are the closed set of registered kinds plus
/// `unknown`, outcomes and diagnostic kinds are fixed enums.
#[derive(Clone)]
pub struct PrometheusMetrics {
    evaluations: CounterVec,
    duration: HistogramVec,
    diagnostics: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let evaluations = CounterVec::new(
            Opts::new("evaluations_total", "Label scheduling evaluations by outcome").namespace("labelsched"),
            &["executor_kind", "outcome"],
        )?;
        registry.register(Box::new(evaluations.clone()))?;

        // Evaluations are pure in-memory work; buckets start at 10us.
        let duration = HistogramVec::new(
            HistogramOpts::new("evaluation_duration_seconds", "Time spent in the label filter chain")
                .namespace("labelsched")
                .buckets(vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]),
            &["executor_kind"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        let diagnostics = CounterVec::new(
            Opts::new("diagnostics_total", "Tolerated label problems reported by filters")
                .namespace("labelsched"),
            &["executor_kind", "kind"],
        )?;
        registry.register(Box::new(diagnostics.clone()))?;

        Ok(Self {
            evaluations,
            duration,
            diagnostics,
            registry,
        })
    }

    /// Backend over a fresh private registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Current state in the text exposition format.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_evaluation(&self, executor_kind: &str, outcome: EvaluationOutcome, duration_us: u64) {
        self.evaluations
            .with_label_values(&[executor_kind, outcome.as_label()])
            .inc();

        // Rejections before the chain ran carry no timing.
        if duration_us > 0 || outcome != EvaluationOutcome::Rejected {
            self.duration
                .with_label_values(&[executor_kind])
                .observe(duration_us as f64 / 1_000_000.0);
        }
    }

    fn record_diagnostic(&self, executor_kind: &str, diagnostic: &Diagnostic) {
        self.diagnostics
            .with_label_values(&[executor_kind, diagnostic.as_label()])
            .inc();
    }
}
