//! Label filter chain.
//!
//! Every filter reads the [`LabelInfo`] and appends to both result shapes. Filters
//! never fail: missing data selects the filter's forbid/default branch.
//! Order matters, the identity filter's "any" fallback inspects what earlier filters emitted.
mod host_unique;
mod identity;
mod location;
mod org;
mod specific_host;
mod workspace;

pub use host_unique::host_unique_label_filter;
pub use identity::identity_filter;
pub use location::location_label_filter;
pub use org::org_label_filter;
pub use specific_host::specific_host_label_filter;
pub use workspace::workspace_label_filter;

use tracing::trace;

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

/// Signature shared by every filter of the chain.
pub type LabelFilter = fn(&mut ScheduleInfo, &mut ScheduleInfo2, &LabelInfo<'_>);

/// The chain, in execution order.
pub const LABEL_FILTERS: [(&str, LabelFilter); 6] = [
    ("org", org_label_filter as LabelFilter),
    ("workspace", workspace_label_filter as LabelFilter),
    ("identity", identity_filter as LabelFilter),
    ("host-unique", host_unique_label_filter as LabelFilter),
    ("specific-host", specific_host_label_filter as LabelFilter),
    ("location", location_label_filter as LabelFilter),
];

/// Run the whole chain once over `li`.
pub fn run_label_filters(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    for (name, filter) in LABEL_FILTERS {
        filter(r, r2, li);
        trace!(filter = name, obj = li.obj_name, "label filter applied");
    }
}
