mod job;
pub use job::Job;

mod service_group;
pub use service_group::{Service, ServiceGroup};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;


/// Workload submitted for scheduling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum Workload {
    /// Long-running runtime: a group of services deployed together.
    ServiceGroup(ServiceGroup),
    /// One-shot or batch job.
    Job(Job),
}

impl Workload {
    /// Returns the shape as a static string.
    pub fn shape(&self) -> &'static str {
        match self {
            Workload::ServiceGroup(_) => "serviceGroup",
            Workload::Job(_) => "job",
        }
    }

    /// Identifier used in diagnostics: service group id or job name.
    pub fn name(&self) -> &str {
        match self {
            Workload::ServiceGroup(sg) => &sg.id,
            Workload::Job(job) => &job.name,
        }
    }
}

impl From<ServiceGroup> for Workload {
    fn from(sg: ServiceGroup) -> Self {
        Workload::ServiceGroup(sg)
    }
}

impl From<Job> for Workload {
    fn from(job: Job) -> Self {
        Workload::Job(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn externally_tagged_json() {
        let json = r#"{"job": {"name": "nightly", "labels": {"JOB_KIND": "bigdata"}}}"#;
        let wl: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(wl.shape(), "job");
        assert_eq!(wl.name(), "nightly");
        assert!(matches!(&wl, Workload::Job(job) if job.labels.get("JOB_KIND") == Some("bigdata")));

        let json = r#"{"serviceGroup": {"id": "rt-1", "services": [{"name": "web"}]}}"#;
        let wl: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(wl.shape(), "serviceGroup");
        assert_eq!(wl.name(), "rt-1");
        assert!(matches!(&wl, Workload::ServiceGroup(sg) if sg.labels.is_empty() && sg.services.len() == 1));
    }
}
