//! Results of one pass through the filter chain.
//!
//! Both shapes are filled in lockstep by the same filters; scheduler adapters pick
//! whichever fits their backend.
use std::collections::BTreeMap;

use serde::Serialize;

use labelsched_model::Selector;

/// Tag-expression result for constraint-string schedulers (DCOS style).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    /// Tags the target node should carry.
    pub likes: Vec<String>,
    /// Tags the target node must not carry.
    pub un_likes: Vec<String>,
    pub like_prefixs: Vec<String>,
    /// Tag prefixes the target must not carry any tag of, e.g. `workspace-`.
    pub un_like_prefixs: Vec<String>,
    /// Tags that must match exactly, e.g. `org-acme`.
    pub exclusive_likes: Vec<String>,
    /// Tags of which any single one suffices (job destination redirection).
    pub inclusive_likes: Vec<String>,
    /// Generic "any" preference applies: nothing exclusive claimed the workload.
    pub flag: bool,

    pub host_unique: bool,
    /// Groups of service names that must not share a host.
    pub host_unique_info: Vec<Vec<String>>,
    pub specific_host: Vec<String>,
    /// `location` selector per service name.
    pub location: BTreeMap<String, Selector>,

    pub is_platform: bool,
    pub is_unlocked: bool,
}

/// Structured result for schedulers consuming typed fields (Kubernetes style).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo2 {
    pub has_org: bool,
    pub org: String,
    pub has_workspace: bool,
    pub workspaces: Vec<String>,
    pub has_project: bool,
    pub project: String,

    pub job: bool,
    pub pack: bool,
    pub is_daemonset: bool,
    pub stateful: bool,
    pub stateless: bool,
    pub bigdata: bool,

    pub is_platform: bool,
    pub is_unlocked: bool,

    pub host_unique: bool,
    pub host_unique_info: Vec<Vec<String>>,
    pub specific_host: Vec<String>,
    pub location: BTreeMap<String, Selector>,

    pub prefer_jobs: bool,
    pub prefer_packs: bool,
    pub prefer_stateful: bool,
    pub prefer_stateless: bool,

    /// Non-fatal problems met while filtering; the results are still valid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ScheduleInfo {
    /// Result returned when label scheduling does not apply.
    pub fn unlocked() -> Self {
        Self {
            is_unlocked: true,
            ..Default::default()
        }
    }
}

impl ScheduleInfo2 {
    /// Result returned when label scheduling does not apply.
    pub fn unlocked() -> Self {
        Self {
            is_unlocked: true,
            ..Default::default()
        }
    }
}

/// Problem tolerated by a filter instead of failing the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Diagnostic {
    /// `HOST_UNIQUE` is not a JSON array of string arrays; the label was ignored.
    MalformedHostUnique { raw: String, reason: String },
}

impl Diagnostic {
    /// Stable short name used as metrics label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Diagnostic::MalformedHostUnique { .. } => "malformed_host_unique",
        }
    }
}
