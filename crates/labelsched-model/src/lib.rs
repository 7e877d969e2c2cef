//! Data model for label-based scheduling.
//!
//! Describes what the scheduling pipeline consumes: executor identity and configuration,
//! workloads (service groups or jobs) with their labels and per-service selectors,
//! and the flattened org/workspace override map handed back to callers.
mod domain;
pub use domain::constants;
pub use domain::{Labels, Selector, Selectors};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{ExecutorKind, LabelSupport};

mod config;
pub use config::{BasicConfig, ExecutorWholeConfigs, OrgOptions, PlusConfigs, RefinedConfig, WorkspaceOptions};

mod workload;
pub use workload::{Job, Service, ServiceGroup, Workload};
