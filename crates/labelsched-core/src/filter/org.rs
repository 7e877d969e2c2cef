use tracing::debug;

use labelsched_model::constants::{ENABLE_ORG, TAG_ORG_PREFIX};

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

/// Org exclusivity.
///
/// A refined org entry with a matching name always claims the org, whatever its
/// `ENABLE_ORG` says; only orgs absent from the refined tree consult the basic flag.
/// The workspace filter does fall back in the analogous case.
pub fn org_label_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let Some(org) = li.org_name() else {
        r2.has_org = false;
        if li.executor_config.enable_label_schedule() {
            r.un_like_prefixs.push(TAG_ORG_PREFIX.to_string());
        }
        return;
    };

    if let Some(opt) = li.options_plus.and_then(|plus| plus.org(org)) {
        if opt.option(ENABLE_ORG) != Some("true") {
            debug!(org, obj = li.obj_name, "refined org entry without ENABLE_ORG=true still claims the org");
        }
        claim_org(r, r2, org);
        return;
    }

    if !li.executor_config.enable_org_label_schedule() {
        r.un_like_prefixs.push(TAG_ORG_PREFIX.to_string());
        return;
    }
    claim_org(r, r2, org);
}

fn claim_org(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, org: &str) {
    r.exclusive_likes.push(format!("{TAG_ORG_PREFIX}{org}"));
    r2.has_org = true;
    r2.org = org.to_string();
}
