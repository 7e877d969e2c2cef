use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Refined configuration tree: orgs, each with its own workspaces.
///
/// Lookups are linear scans by exact (case-sensitive) name; the lists are small.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlusConfigs {
    #[serde(default)]
    pub orgs: Vec<OrgOptions>,
}

impl PlusConfigs {
    pub fn org(&self, name: &str) -> Option<&OrgOptions> {
        self.orgs.iter().find(|o| o.name == name)
    }
}

/// Options of one org plus its workspace overrides.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct OrgOptions {
    pub name: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceOptions>,
}

impl OrgOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.options.insert(key.into(), val.into());
        self
    }

    pub fn with_workspace(mut self, ws: WorkspaceOptions) -> Self {
        self.workspaces.push(ws);
        self
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }

    /// Workspace options by exact name.
    pub fn workspace_opt(&self, name: &str) -> Option<&WorkspaceOptions> {
        self.workspaces.iter().find(|w| w.name == name)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceOptions {
    pub name: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl WorkspaceOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.options.insert(key.into(), val.into());
        self
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_org_wins() {
        let plus = PlusConfigs {
            orgs: vec![
                OrgOptions::new("acme").with_option("K", "first"),
                OrgOptions::new("acme").with_option("K", "second"),
            ],
        };
        assert_eq!(plus.org("acme").unwrap().option("K"), Some("first"));
        assert!(plus.org("ACME").is_none());
    }

    #[test]
    fn workspace_lookup_is_scoped_to_org() {
        let plus = PlusConfigs {
            orgs: vec![
                OrgOptions::new("a").with_workspace(WorkspaceOptions::new("prod")),
                OrgOptions::new("b"),
            ],
        };
        assert!(plus.org("a").unwrap().workspace_opt("prod").is_some());
        assert!(plus.org("b").unwrap().workspace_opt("prod").is_none());
    }
}
