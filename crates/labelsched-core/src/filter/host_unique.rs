use tracing::warn;

use labelsched_model::constants::LABEL_HOST_UNIQUE;

use crate::{
    info::LabelInfo,
    schedule::{Diagnostic, ScheduleInfo, ScheduleInfo2},
};

/// Host anti-affinity groups from the `HOST_UNIQUE` label.
///
/// A malformed value is ignored: logged and recorded as a [`Diagnostic`], scheduling goes on.
pub fn host_unique_label_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let Some(raw) = li.label.get(LABEL_HOST_UNIQUE) else {
        return;
    };

    match serde_json::from_str::<Vec<Vec<String>>>(raw) {
        Ok(groups) => {
            r.host_unique = true;
            r.host_unique_info = groups.clone();
            r2.host_unique = true;
            r2.host_unique_info = groups;
        }
        Err(e) => {
            warn!(obj = li.obj_name, raw, error = %e, "ignoring malformed HOST_UNIQUE label");
            r2.diagnostics.push(Diagnostic::MalformedHostUnique {
                raw: raw.to_string(),
                reason: e.to_string(),
            });
        }
    }
}
