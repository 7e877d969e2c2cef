use labelsched_model::constants::SELECTOR_LOCATION;

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

/// Copies each service's `location` selector into both results, keyed by service name.
pub fn location_label_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    for (svc, sel) in li.service_selectors(SELECTOR_LOCATION) {
        r.location.insert(svc.to_string(), sel.clone());
        r2.location.insert(svc.to_string(), sel.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use labelsched_model::{ExecutorKind, Selector, Selectors};

    use super::*;
    use crate::filter::testing::{apply, basic, labels};

    #[test]
    fn copies_location_per_service() {
        let mut edge = Selectors::new();
        edge.insert("location", Selector::new(["edge"]));
        edge.insert("org", Selector::new(["acme"]));
        let mut other = Selectors::new();
        other.insert("org", Selector::new(["acme"]));

        let mut per_service = BTreeMap::new();
        per_service.insert("web".to_string(), edge);
        per_service.insert("db".to_string(), other);

        let (r, r2) = apply(location_label_filter, ExecutorKind::K8s, &basic(&[]), &labels(&[]), per_service);
        assert_eq!(r.location.len(), 1);
        assert_eq!(r.location["web"], Selector::new(["edge"]));
        assert_eq!(r.location, r2.location);
    }
}
