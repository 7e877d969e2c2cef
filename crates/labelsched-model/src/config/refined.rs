use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use super::{OrgOptions, WorkspaceOptions};

/// Flattened org/workspace overrides for one workload.
///
/// Produced next to the scheduling results and consumed outside the tag pipeline,
/// e.g. for oversubscription ratios.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct RefinedConfig(pub BTreeMap<String, String>);

impl RefinedConfig {
    /// Merge org options, then workspace options on top (last write wins).
    pub fn merge(org: &OrgOptions, workspace: Option<&WorkspaceOptions>) -> Self {
        let mut out = org.options.clone();
        if let Some(ws) = workspace {
            out.extend(ws.options.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self(out)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RefinedConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
