//! Label scheduling pipeline.
//!
//! Turns a workload's labels and selectors plus its executor's configuration into
//! placement constraints, produced in two shapes: tag expressions ([`ScheduleInfo`])
//! for constraint-string schedulers and typed fields ([`ScheduleInfo2`]) for structured ones.
pub mod error;
pub mod filter;
pub mod info;
pub mod metrics;
pub mod pipeline;
pub mod schedule;
pub mod scheduler;

pub use error::CoreError;
pub use info::LabelInfo;
pub use metrics::{EvaluationOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use pipeline::{Evaluation, ScheduleOutcome, label_filter_chain};
pub use schedule::{Diagnostic, ScheduleInfo, ScheduleInfo2};
pub use scheduler::{ExecutorConfigProvider, ExecutorRegistration, LabelScheduler, StaticConfigProvider};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::pipeline::{ScheduleOutcome, label_filter_chain};
    pub use crate::schedule::{ScheduleInfo, ScheduleInfo2};
    pub use crate::scheduler::{ExecutorConfigProvider, LabelScheduler};
}
