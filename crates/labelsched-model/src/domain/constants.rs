//! Well-known keys shared across the model and the pipeline.
//!
//! Three families live here: workload label keys, executor configuration keys and the
//! tag vocabulary emitted for tag-matching schedulers.
//! Keeping them here avoids scattering magic strings throughout the codebase.

// Workload label keys.

/// Organization the workload belongs to.
pub const LABEL_ORG_NAME: &str = "DICE_ORG_NAME";
/// Workspace (environment) the workload is deployed into.
pub const LABEL_WORKSPACE: &str = "DICE_WORKSPACE";
/// Project identifier (deprecated project-level scheduling).
pub const LABEL_PROJECT: &str = "DICE_PROJECT";
/// Service type: `ADDONS`, `STATELESS` or `DAEMONSET`.
pub const LABEL_SERVICE_TYPE: &str = "SERVICE_TYPE";
/// Job kind; only `bigdata` is meaningful.
pub const LABEL_JOB_KIND: &str = "JOB_KIND";
/// Marks a job as a pack (build) job.
pub const LABEL_PACK: &str = "PACK";
/// Presence alone marks the workload as a platform component.
pub const LABEL_PLATFORM: &str = "PLATFORM";
/// JSON array of service-name groups that must not share a host.
pub const LABEL_HOST_UNIQUE: &str = "HOST_UNIQUE";
/// Comma separated list of hosts the workload must land on.
pub const LABEL_SPECIFIC_HOSTS: &str = "SPECIFIC_HOSTS";
/// Prefix of the legacy service-group level location labels, e.g. `LOCATION-EDGE`.
pub const LABEL_LOCATION_PREFIX: &str = "LOCATION-";

pub const SERVICE_TYPE_ADDONS: &str = "ADDONS";
pub const SERVICE_TYPE_STATELESS: &str = "STATELESS";
pub const SERVICE_TYPE_DAEMONSET: &str = "DAEMONSET";
pub const JOB_KIND_BIGDATA: &str = "bigdata";

// Selector keys.

pub const SELECTOR_ORG: &str = "org";
pub const SELECTOR_WORKSPACE: &str = "workspace";
pub const SELECTOR_PLATFORM: &str = "platform";
pub const SELECTOR_LOCATION: &str = "location";

// Executor configuration keys.

/// Master switch for label scheduling on an executor (compared case-sensitively).
pub const ENABLE_TAG: &str = "ENABLETAG";
/// Org-level scheduling switch, basic config or refined org options.
pub const ENABLE_ORG: &str = "ENABLE_ORG";
/// Workspace-level scheduling switch, basic config or refined workspace options.
pub const ENABLE_WORKSPACE: &str = "ENABLE_WORKSPACE";
/// Deprecated comma list of workspaces that keep workspace tags even when workspace scheduling is off.
pub const WORKSPACE_TAGS: &str = "WORKSPACETAGS";
/// Comma list of workspaces a staging batch job may run in.
pub const STAGING_JOB_DEST: &str = "STAGING_JOB_DEST";
/// Comma list of workspaces a prod batch job may run in.
pub const PROD_JOB_DEST: &str = "PROD_JOB_DEST";
pub const CPU_SUBSCRIBE_RATIO: &str = "CPU_SUBSCRIBE_RATIO";
pub const MEMORY_SUBSCRIBE_RATIO: &str = "MEMORY_SUBSCRIBE_RATIO";

// Workspace names with special job-destination handling.

pub const WORKSPACE_DEV: &str = "dev";
pub const WORKSPACE_TEST: &str = "test";
pub const WORKSPACE_STAGING: &str = "staging";
pub const WORKSPACE_PROD: &str = "prod";

// Tag vocabulary.

pub const TAG_ORG_PREFIX: &str = "org-";
pub const TAG_WORKSPACE_PREFIX: &str = "workspace-";
pub const TAG_PROJECT_PREFIX: &str = "project-";
pub const TAG_JOB: &str = "job";
pub const TAG_SERVICE_STATEFUL: &str = "service-stateful";
pub const TAG_SERVICE_STATELESS: &str = "service-stateless";
pub const TAG_BIGDATA: &str = "bigdata";
