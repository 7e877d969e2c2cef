//! Prometheus backend for label scheduling metrics.
//!
//! ```rust
//! use std::sync::Arc;
//! use labelsched_core::{LabelScheduler, StaticConfigProvider};
//! use labelsched_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let scheduler = LabelScheduler::new(Arc::new(StaticConfigProvider::new()))
//!     .with_metrics(Arc::new(metrics.clone()));
//! # let _ = scheduler;
//! let exposition = metrics.encode_text()?;
//! # let _ = exposition;
//! # Ok(())
//! # }
//! ```
//!
//! No HTTP endpoint is served here; callers expose [`PrometheusMetrics::gather`] or
//! [`PrometheusMetrics::encode_text`] through whatever server they already run.
mod backend;
pub use backend::PrometheusMetrics;
