use tracing::debug;

use labelsched_model::constants::{
    ENABLE_WORKSPACE, TAG_WORKSPACE_PREFIX, WORKSPACE_DEV, WORKSPACE_PROD, WORKSPACE_STAGING,
    WORKSPACE_TEST,
};

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

/// Workspace exclusivity and batch-job destination redirection.
///
/// Resolution order: refined workspace entry with `ENABLE_WORKSPACE=true`, then the
/// basic `ENABLE_WORKSPACE` flag, then the deprecated `WORKSPACETAGS` list.
pub fn workspace_label_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let Some(workspace) = li.workspace_name() else {
        r.un_like_prefixs.push(TAG_WORKSPACE_PREFIX.to_string());
        return;
    };

    let refined = li
        .org_name()
        .and_then(|org| li.options_plus?.org(org))
        .and_then(|org| org.workspace_opt(&workspace))
        .is_some_and(|ws| ws.option(ENABLE_WORKSPACE) == Some("true"));

    if refined || li.executor_config.enable_workspace_label_schedule() {
        claim_workspace(r, r2, li, &workspace);
        return;
    }

    let legacy = li
        .executor_config
        .workspace_tags()
        .is_some_and(|tags| tags.iter().any(|t| *t == workspace));
    if legacy {
        r.exclusive_likes.push(format!("{TAG_WORKSPACE_PREFIX}{workspace}"));
        r2.has_workspace = true;
        r2.workspaces = vec![workspace];
        return;
    }

    r.un_like_prefixs.push(TAG_WORKSPACE_PREFIX.to_string());
}

/// Batch jobs from staging/prod may run in other workspaces; everything else is exclusive.
fn claim_workspace(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>, workspace: &str) {
    r2.has_workspace = true;

    if li.executor_kind.is_batch_job() {
        let dests = match workspace {
            WORKSPACE_STAGING => Some(li.executor_config.staging_job_avail_dest()),
            WORKSPACE_PROD => Some(li.executor_config.prod_job_avail_dest()),
            _ => None,
        };

        if let Some(dests) = dests {
            match dests {
                Some(dests) => {
                    r.inclusive_likes
                        .extend(dests.iter().map(|d| format!("{TAG_WORKSPACE_PREFIX}{d}")));
                    debug!(workspace, ?dests, obj = li.obj_name, "job redirected to configured workspaces");
                    r2.workspaces = dests;
                }
                None => {
                    // Only the tag result sees the default destinations.
                    r.inclusive_likes.extend(
                        [WORKSPACE_DEV, WORKSPACE_TEST]
                            .iter()
                            .map(|d| format!("{TAG_WORKSPACE_PREFIX}{d}")),
                    );
                    debug!(workspace, obj = li.obj_name, "job redirected to default dev/test workspaces");
                    r2.workspaces = vec![workspace.to_string()];
                }
            }
            return;
        }
    }

    r.exclusive_likes.push(format!("{TAG_WORKSPACE_PREFIX}{workspace}"));
    r2.workspaces = vec![workspace.to_string()];
}
