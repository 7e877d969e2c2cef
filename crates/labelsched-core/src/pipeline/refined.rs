use tracing::debug;

use labelsched_model::RefinedConfig;

use crate::info::LabelInfo;

/// Org/workspace overrides for the workload in `li`.
///
/// Org and workspace resolve like in the filters (selector first, then label).
/// Returns `None` when the org has no refined entry; a missing workspace entry
/// leaves the org options alone.
pub fn set_runtime_refined_config(li: &LabelInfo<'_>) -> Option<RefinedConfig> {
    let org_name = li.org_name()?;
    let org = li.options_plus?.org(org_name)?;

    let workspace = li
        .workspace_name()
        .and_then(|ws| org.workspace_opt(&ws));

    let refined = RefinedConfig::merge(org, workspace);
    debug!(
        org = org_name,
        workspace = ?workspace.map(|w| w.name.as_str()),
        keys = refined.0.len(),
        obj = li.obj_name,
        "refined config resolved"
    );
    Some(refined)
}
