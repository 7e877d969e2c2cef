//! Normalized per-request input of the filter chain.
use std::collections::BTreeMap;

use labelsched_model::{
    ExecutorKind, ExecutorWholeConfigs, Labels, PlusConfigs, Selector, Selectors,
    constants::{LABEL_ORG_NAME, LABEL_WORKSPACE, SELECTOR_ORG, SELECTOR_WORKSPACE},
};

/// One workload as seen by the filters.
///
/// Borrows everything from the caller's configuration and workload; only the
/// selector map is owned because it is assembled (see `collect_service_selectors`).
#[derive(Debug, Clone)]
pub struct LabelInfo<'a> {
    /// Flat labels of the workload.
    pub label: &'a Labels,
    pub executor_name: &'a str,
    pub executor_kind: ExecutorKind,
    pub executor_config: &'a ExecutorWholeConfigs,
    /// Same tree as `executor_config.plus_configs`.
    pub options_plus: Option<&'a PlusConfigs>,
    /// Workload identifier, diagnostics only.
    pub obj_name: &'a str,
    /// Per-service selectors keyed by service name.
    ///
    /// Ordered by service name, so "first service carrying a selector" is the
    /// lexicographically smallest name. Jobs have none.
    pub selectors: BTreeMap<String, Selectors>,
}

impl<'a> LabelInfo<'a> {
    pub fn new(
        label: &'a Labels,
        executor_name: &'a str,
        executor_kind: ExecutorKind,
        executor_config: &'a ExecutorWholeConfigs,
        obj_name: &'a str,
    ) -> Self {
        Self {
            label,
            executor_name,
            executor_kind,
            executor_config,
            options_plus: executor_config.plus_configs.as_ref(),
            obj_name,
            selectors: BTreeMap::new(),
        }
    }

    pub fn with_selectors(mut self, selectors: BTreeMap<String, Selectors>) -> Self {
        self.selectors = selectors;
        self
    }

    /// First positive value of selector `key` across services.
    pub fn selector_value(&self, key: &str) -> Option<&str> {
        self.selectors
            .values()
            .filter_map(|s| s.get(key))
            .find_map(Selector::positive_value)
    }

    /// Every service carrying selector `key`, with that selector.
    pub fn service_selectors<'s>(
        &'s self,
        key: &'s str,
    ) -> impl Iterator<Item = (&'s str, &'s Selector)> + 's {
        self.selectors
            .iter()
            .filter_map(move |(svc, s)| s.get(key).map(|sel| (svc.as_str(), sel)))
    }

    /// Effective org: `org` selector first, then the `DICE_ORG_NAME` label.
    pub fn org_name(&self) -> Option<&str> {
        self.selector_value(SELECTOR_ORG)
            .or_else(|| self.label.get(LABEL_ORG_NAME))
            .filter(|s| !s.is_empty())
    }

    /// Effective workspace, lower-cased: `workspace` selector first, then the `DICE_WORKSPACE` label.
    pub fn workspace_name(&self) -> Option<String> {
        self.selector_value(SELECTOR_WORKSPACE)
            .or_else(|| self.label.get(LABEL_WORKSPACE))
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(pairs: &[(&str, Selector)]) -> Selectors {
        let mut out = Selectors::new();
        for (k, v) in pairs {
            out.insert(*k, v.clone());
        }
        out
    }

    #[test]
    fn selector_wins_over_label() {
        let labels: Labels = [("DICE_ORG_NAME", "from-label"), ("DICE_WORKSPACE", "TEST")]
            .into_iter()
            .collect();
        let cfg = ExecutorWholeConfigs::default();
        let mut per_service = BTreeMap::new();
        per_service.insert(
            "web".to_string(),
            selectors(&[("org", Selector::new(["from-selector"]))]),
        );

        let li = LabelInfo::new(&labels, "exec", ExecutorKind::K8s, &cfg, "rt")
            .with_selectors(per_service);
        assert_eq!(li.org_name(), Some("from-selector"));
        assert_eq!(li.workspace_name().as_deref(), Some("test"));
    }

    #[test]
    fn negated_selector_falls_back_to_label() {
        let labels: Labels = [("DICE_ORG_NAME", "acme")].into_iter().collect();
        let cfg = ExecutorWholeConfigs::default();
        let mut per_service = BTreeMap::new();
        per_service.insert(
            "web".to_string(),
            selectors(&[("org", Selector::negated(["other"]))]),
        );

        let li = LabelInfo::new(&labels, "exec", ExecutorKind::K8s, &cfg, "rt")
            .with_selectors(per_service);
        assert_eq!(li.org_name(), Some("acme"));
    }

    #[test]
    fn first_service_by_name_wins() {
        let labels = Labels::new();
        let cfg = ExecutorWholeConfigs::default();
        let mut per_service = BTreeMap::new();
        per_service.insert("b".to_string(), selectors(&[("org", Selector::new(["second"]))]));
        per_service.insert("a".to_string(), selectors(&[("org", Selector::new(["first"]))]));

        let li = LabelInfo::new(&labels, "exec", ExecutorKind::K8s, &cfg, "rt")
            .with_selectors(per_service);
        assert_eq!(li.org_name(), Some("first"));
    }

    #[test]
    fn empty_values_resolve_to_none() {
        let labels: Labels = [("DICE_ORG_NAME", ""), ("DICE_WORKSPACE", "")].into_iter().collect();
        let cfg = ExecutorWholeConfigs::default();
        let li = LabelInfo::new(&labels, "exec", ExecutorKind::K8s, &cfg, "rt");
        assert_eq!(li.org_name(), None);
        assert_eq!(li.workspace_name(), None);
    }
}
