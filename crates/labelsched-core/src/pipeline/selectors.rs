use std::collections::BTreeMap;

use labelsched_model::{
    Selector, Selectors, ServiceGroup,
    constants::{LABEL_LOCATION_PREFIX, SELECTOR_LOCATION},
};

/// Per-service selectors of a service group, keyed by service name.
///
/// Group-level `LOCATION-<NAME>` labels are the older location scheme: each one is
/// broadcast to every service as a synthetic `location` selector whose values are the
/// lower-cased `<NAME>` parts, in label order. The synthetic selector replaces any
/// `location` selector a service declared itself.
pub fn collect_service_selectors(sg: &ServiceGroup) -> BTreeMap<String, Selectors> {
    let mut out: BTreeMap<String, Selectors> = sg
        .services
        .iter()
        .filter_map(|svc| Some((svc.name.clone(), svc.selectors.clone()?)))
        .collect();

    let locations: Vec<String> = sg
        .labels
        .with_prefix(LABEL_LOCATION_PREFIX)
        .map(|(k, _)| k[LABEL_LOCATION_PREFIX.len()..].to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    if locations.is_empty() {
        return out;
    }

    for svc in &sg.services {
        out.entry(svc.name.clone())
            .or_default()
            .insert(SELECTOR_LOCATION, Selector::new(locations.iter().cloned()));
    }
    out
}
