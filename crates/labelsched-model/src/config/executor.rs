use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use super::{OrgOptions, PlusConfigs, RefinedConfig, split_list};
use crate::constants::{
    CPU_SUBSCRIBE_RATIO, ENABLE_ORG, ENABLE_TAG, ENABLE_WORKSPACE, MEMORY_SUBSCRIBE_RATIO,
    PROD_JOB_DEST, STAGING_JOB_DEST, WORKSPACE_TAGS,
};

/// Flat executor-wide settings: feature flags, oversubscription ratios, legacy tag lists.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct BasicConfig(pub BTreeMap<String, String>);

impl BasicConfig {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite a setting, returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for BasicConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Whole configuration of one cluster executor.
///
/// Built once when the executor is registered and only read afterwards,
/// so a single value can be shared by any number of concurrent scheduling calls.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecutorWholeConfigs {
    #[serde(default)]
    pub basic_config: BasicConfig,
    /// Refined org/workspace overrides; absent when the executor has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_configs: Option<PlusConfigs>,
}

impl ExecutorWholeConfigs {
    pub fn new(basic_config: BasicConfig) -> Self {
        Self {
            basic_config,
            plus_configs: None,
        }
    }

    pub fn with_plus_configs(mut self, plus: PlusConfigs) -> Self {
        self.plus_configs = Some(plus);
        self
    }

    /// Label scheduling master switch: `ENABLETAG` must be exactly `"true"`.
    pub fn enable_label_schedule(&self) -> bool {
        self.basic_config.get(ENABLE_TAG) == Some("true")
    }

    /// Org scheduling switch; `ENABLE_ORG` compared case-insensitively.
    pub fn enable_org_label_schedule(&self) -> bool {
        self.flag_ignore_case(ENABLE_ORG)
    }

    /// Workspace scheduling switch; `ENABLE_WORKSPACE` compared case-insensitively.
    pub fn enable_workspace_label_schedule(&self) -> bool {
        self.flag_ignore_case(ENABLE_WORKSPACE)
    }

    /// Workspaces a staging batch job may be redirected to, if configured.
    pub fn staging_job_avail_dest(&self) -> Option<Vec<String>> {
        self.list(STAGING_JOB_DEST)
    }

    /// Workspaces a prod batch job may be redirected to, if configured.
    pub fn prod_job_avail_dest(&self) -> Option<Vec<String>> {
        self.list(PROD_JOB_DEST)
    }

    /// Deprecated `WORKSPACETAGS` list.
    pub fn workspace_tags(&self) -> Option<Vec<String>> {
        self.list(WORKSPACE_TAGS)
    }

    /// A project id takes part in project scheduling when it is itself a basic config key.
    pub fn project_id_for_compatibility(&self, project_id: &str) -> bool {
        self.basic_config.contains(project_id)
    }

    /// Refined options of an org, by exact name.
    pub fn org_opt(&self, org: &str) -> Option<&OrgOptions> {
        self.plus_configs.as_ref()?.org(org)
    }

    /// Oversubscription ratio for `key`.
    ///
    /// The refined override wins over the basic config; a level whose value
    /// is not a finite number >= 1.0 is skipped. Defaults to `1.0`.
    pub fn subscribe_ratio(&self, refined: Option<&RefinedConfig>, key: &str) -> f64 {
        refined
            .and_then(|r| parse_ratio(r.get(key)))
            .or_else(|| parse_ratio(self.basic_config.get(key)))
            .unwrap_or(1.0)
    }

    pub fn cpu_subscribe_ratio(&self, refined: Option<&RefinedConfig>) -> f64 {
        self.subscribe_ratio(refined, CPU_SUBSCRIBE_RATIO)
    }

    pub fn memory_subscribe_ratio(&self, refined: Option<&RefinedConfig>) -> f64 {
        self.subscribe_ratio(refined, MEMORY_SUBSCRIBE_RATIO)
    }

    fn flag_ignore_case(&self, key: &str) -> bool {
        self.basic_config
            .get(key)
            .is_some_and(|v| v.to_lowercase() == "true")
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        let items = split_list(self.basic_config.get(key)?);
        (!items.is_empty()).then_some(items)
    }
}

fn parse_ratio(raw: Option<&str>) -> Option<f64> {
    let ratio = raw?.trim().parse::<f64>().ok()?;
    (ratio.is_finite() && ratio >= 1.0).then_some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkspaceOptions;

    fn basic(pairs: &[(&str, &str)]) -> ExecutorWholeConfigs {
        ExecutorWholeConfigs::new(pairs.iter().copied().collect())
    }

    #[test]
    fn enable_tag_is_case_sensitive() {
        assert!(basic(&[("ENABLETAG", "true")]).enable_label_schedule());
        assert!(!basic(&[("ENABLETAG", "TRUE")]).enable_label_schedule());
        assert!(!basic(&[("ENABLETAG", "True")]).enable_label_schedule());
        assert!(!basic(&[]).enable_label_schedule());
    }

    #[test]
    fn org_and_workspace_flags_ignore_case() {
        let cfg = basic(&[("ENABLE_ORG", "TRUE"), ("ENABLE_WORKSPACE", "True")]);
        assert!(cfg.enable_org_label_schedule());
        assert!(cfg.enable_workspace_label_schedule());

        let cfg = basic(&[("ENABLE_ORG", "yes")]);
        assert!(!cfg.enable_org_label_schedule());
        assert!(!cfg.enable_workspace_label_schedule());
    }

    #[test]
    fn job_destinations_are_trimmed() {
        let cfg = basic(&[("STAGING_JOB_DEST", "test, prod"), ("PROD_JOB_DEST", " staging ")]);
        assert_eq!(cfg.staging_job_avail_dest(), Some(vec!["test".into(), "prod".into()]));
        assert_eq!(cfg.prod_job_avail_dest(), Some(vec!["staging".into()]));
    }

    #[test]
    fn blank_destination_counts_as_absent() {
        let cfg = basic(&[("STAGING_JOB_DEST", " , ")]);
        assert_eq!(cfg.staging_job_avail_dest(), None);
        assert_eq!(cfg.prod_job_avail_dest(), None);
    }

    #[test]
    fn project_compat_checks_key_presence() {
        let cfg = basic(&[("42", "")]);
        assert!(cfg.project_id_for_compatibility("42"));
        assert!(!cfg.project_id_for_compatibility("43"));
    }

    #[test]
    fn org_opt_requires_plus_configs() {
        assert!(basic(&[]).org_opt("acme").is_none());

        let cfg = basic(&[]).with_plus_configs(PlusConfigs {
            orgs: vec![OrgOptions::new("acme").with_workspace(WorkspaceOptions::new("prod"))],
        });
        assert!(cfg.org_opt("acme").is_some());
        assert!(cfg.org_opt("Acme").is_none());
        assert!(cfg.org_opt("acme").unwrap().workspace_opt("prod").is_some());
    }

    #[test]
    fn subscribe_ratio_precedence() {
        let cfg = basic(&[("CPU_SUBSCRIBE_RATIO", "1.5")]);
        assert_eq!(cfg.cpu_subscribe_ratio(None), 1.5);
        assert_eq!(cfg.memory_subscribe_ratio(None), 1.0);

        let refined: RefinedConfig = [("CPU_SUBSCRIBE_RATIO", "2")].into_iter().collect();
        assert_eq!(cfg.cpu_subscribe_ratio(Some(&refined)), 2.0);

        let bogus: RefinedConfig = [("CPU_SUBSCRIBE_RATIO", "0.5")].into_iter().collect();
        assert_eq!(cfg.cpu_subscribe_ratio(Some(&bogus)), 1.5);

        let nan: RefinedConfig = [("CPU_SUBSCRIBE_RATIO", "NaN")].into_iter().collect();
        assert_eq!(basic(&[]).cpu_subscribe_ratio(Some(&nan)), 1.0);
    }

    #[test]
    fn deserializes_camel_case_tree() {
        let json = r#"{
            "basicConfig": {"ENABLETAG": "true"},
            "plusConfigs": {"orgs": [
                {"name": "test1", "options": {"ENABLE_ORG": "true"},
                 "workspaces": [{"name": "prod", "options": {"ENABLE_WORKSPACE": "true"}}]}
            ]}
        }"#;
        let cfg: ExecutorWholeConfigs = serde_json::from_str(json).unwrap();
        assert!(cfg.enable_label_schedule());
        let org = cfg.org_opt("test1").unwrap();
        assert_eq!(org.option("ENABLE_ORG"), Some("true"));
        assert_eq!(
            org.workspace_opt("prod").unwrap().option("ENABLE_WORKSPACE"),
            Some("true")
        );
    }
}
