use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Declarative per-service scheduling hint.
///
/// `values` are ordered; consumers that need a single value take the first one.
/// `not` negates the whole selector.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[serde(default)]
    pub not: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Selector {
    /// Positive selector over the given values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            not: false,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Negated selector over the given values.
    pub fn negated<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            not: true,
            ..Self::new(values)
        }
    }

    /// First value of a non-negated selector.
    ///
    /// Negated or empty selectors never name a value.
    pub fn positive_value(&self) -> Option<&str> {
        if self.not {
            return None;
        }
        self.values.first().map(String::as_str)
    }
}

/// Selectors of one service, keyed by selector name (`org`, `workspace`, `platform`, `location`).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Selectors(pub BTreeMap<String, Selector>);

impl Selectors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Selector> {
        self.0.get(key)
    }

    /// Insert or overwrite a selector, returns `self` for chaining.
    pub fn insert(&mut self, key: impl Into<String>, selector: Selector) -> &mut Self {
        self.0.insert(key.into(), selector);
        self
    }
}
