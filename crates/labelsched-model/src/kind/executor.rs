use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Backend scheduler an executor integrates with.
///
/// Names are the exact upper-case identifiers used in executor registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutorKind {
    K8s,
    Marathon,
    Metronome,
    Edas,
    EdasV2,
    Chronos,
    Spark,
    K8sSpark,
    Flink,
    K8sJob,
}

/// Which workload shape an executor kind takes through label scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSupport {
    /// Long-running service groups.
    ServiceGroup,
    /// One-shot jobs.
    Job,
    /// Label scheduling does not apply; callers get default results.
    Unsupported,
}

impl ExecutorKind {
    pub const ALL: [ExecutorKind; 10] = [
        ExecutorKind::K8s,
        ExecutorKind::Marathon,
        ExecutorKind::Metronome,
        ExecutorKind::Edas,
        ExecutorKind::EdasV2,
        ExecutorKind::Chronos,
        ExecutorKind::Spark,
        ExecutorKind::K8sSpark,
        ExecutorKind::Flink,
        ExecutorKind::K8sJob,
    ];

    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutorKind::K8s => "K8S",
            ExecutorKind::Marathon => "MARATHON",
            ExecutorKind::Metronome => "METRONOME",
            ExecutorKind::Edas => "EDAS",
            ExecutorKind::EdasV2 => "EDASV2",
            ExecutorKind::Chronos => "CHRONOS",
            ExecutorKind::Spark => "SPARK",
            ExecutorKind::K8sSpark => "K8SSPARK",
            ExecutorKind::Flink => "FLINK",
            ExecutorKind::K8sJob => "K8SJOB",
        }
    }

    /// Batch-job executors; these get job tags and job destination redirection.
    pub fn is_batch_job(&self) -> bool {
        matches!(self, ExecutorKind::Metronome | ExecutorKind::K8sJob)
    }

    /// Executors able to run `JOB_KIND=bigdata` workloads.
    pub fn supports_bigdata(&self) -> bool {
        matches!(
            self,
            ExecutorKind::Metronome
                | ExecutorKind::K8sJob
                | ExecutorKind::Spark
                | ExecutorKind::K8sSpark
                | ExecutorKind::Flink
        )
    }

    pub fn label_support(&self) -> LabelSupport {
        match self {
            ExecutorKind::Marathon | ExecutorKind::K8s | ExecutorKind::EdasV2 => {
                LabelSupport::ServiceGroup
            }
            ExecutorKind::Metronome
            | ExecutorKind::Spark
            | ExecutorKind::K8sJob
            | ExecutorKind::K8sSpark => LabelSupport::Job,
            ExecutorKind::Chronos | ExecutorKind::Edas | ExecutorKind::Flink => {
                LabelSupport::Unsupported
            }
        }
    }
}

impl FromStr for ExecutorKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        ExecutorKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ModelError::UnknownExecutorKind(s.to_string()))
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_agree() {
        for kind in ExecutorKind::ALL {
            assert_eq!(kind.as_str().parse::<ExecutorKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn parse_is_exact() {
        for bad in ["k8s", "Marathon", " K8S", "DCOS", ""] {
            let err = bad.parse::<ExecutorKind>().unwrap_err();
            assert!(matches!(err, ModelError::UnknownExecutorKind(ref s) if s == bad));
        }
    }

    #[test]
    fn serde_uses_registration_names() {
        assert_eq!(serde_json::to_string(&ExecutorKind::K8sJob).unwrap(), r#""K8SJOB""#);
        assert_eq!(serde_json::to_string(&ExecutorKind::EdasV2).unwrap(), r#""EDASV2""#);
        let kind: ExecutorKind = serde_json::from_str(r#""K8SSPARK""#).unwrap();
        assert_eq!(kind, ExecutorKind::K8sSpark);
    }

    #[test]
    fn capability_predicates() {
        assert!(ExecutorKind::Metronome.is_batch_job());
        assert!(ExecutorKind::K8sJob.is_batch_job());
        assert!(!ExecutorKind::Spark.is_batch_job());

        assert!(ExecutorKind::Flink.supports_bigdata());
        assert!(!ExecutorKind::K8s.supports_bigdata());

        assert_eq!(ExecutorKind::EdasV2.label_support(), LabelSupport::ServiceGroup);
        assert_eq!(ExecutorKind::K8sSpark.label_support(), LabelSupport::Job);
        assert_eq!(ExecutorKind::Flink.label_support(), LabelSupport::Unsupported);
    }
}
