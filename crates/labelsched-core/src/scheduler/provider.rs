use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use labelsched_model::{ExecutorKind, ExecutorWholeConfigs};

use crate::error::CoreError;

/// One registered cluster executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorRegistration {
    pub name: String,
    pub kind: ExecutorKind,
    #[serde(default)]
    pub configs: ExecutorWholeConfigs,
}

impl ExecutorRegistration {
    pub fn new(name: impl Into<String>, kind: ExecutorKind, configs: ExecutorWholeConfigs) -> Self {
        Self {
            name: name.into(),
            kind,
            configs,
        }
    }
}

/// Source of executor registrations.
///
/// Registrations are read-only once handed out and may be shared by concurrent evaluations.
pub trait ExecutorConfigProvider: Send + Sync {
    /// Registration of executor `name`, if known.
    fn registration(&self, name: &str) -> Option<Arc<ExecutorRegistration>>;
}

/// In-memory provider, filled once at startup.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigProvider {
    executors: BTreeMap<String, Arc<ExecutorRegistration>>,
}

impl StaticConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registration; executor names are unique.
    pub fn register(&mut self, reg: ExecutorRegistration) -> Result<(), CoreError> {
        if self.executors.contains_key(&reg.name) {
            return Err(CoreError::DuplicateExecutor(reg.name));
        }
        self.executors.insert(reg.name.clone(), Arc::new(reg));
        Ok(())
    }

    /// Build a provider from a list of registrations, rejecting duplicates.
    pub fn from_registrations<I>(regs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = ExecutorRegistration>,
    {
        let mut out = Self::new();
        for reg in regs {
            out.register(reg)?;
        }
        Ok(out)
    }

    /// Registered executor names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.executors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

impl ExecutorConfigProvider for StaticConfigProvider {
    fn registration(&self, name: &str) -> Option<Arc<ExecutorRegistration>> {
        self.executors.get(name).cloned()
    }
}
