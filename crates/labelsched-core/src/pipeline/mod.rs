//! Entry point of label scheduling: classify the executor, build the [`LabelInfo`],
//! run the filter chain once.
mod refined;
mod selectors;

pub use refined::set_runtime_refined_config;
pub use selectors::collect_service_selectors;

use serde::Serialize;
use tracing::{debug, instrument};

use labelsched_model::{ExecutorKind, ExecutorWholeConfigs, LabelSupport, RefinedConfig, Workload};

use crate::{
    error::CoreError,
    filter::run_label_filters,
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

/// How a request went through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Evaluation {
    /// The filter chain ran.
    Labeled,
    /// Label scheduling is switched off for the executor.
    Disabled,
    /// The executor kind does not take part in label scheduling.
    Unsupported,
}

/// Everything a scheduler adapter needs from one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcome {
    pub evaluation: Evaluation,
    pub schedule_info: ScheduleInfo,
    pub schedule_info2: ScheduleInfo2,
    /// Org/workspace overrides, only for service groups on executors with refined config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined_config: Option<RefinedConfig>,
}

impl ScheduleOutcome {
    fn unlocked(evaluation: Evaluation) -> Self {
        Self {
            evaluation,
            schedule_info: ScheduleInfo::unlocked(),
            schedule_info2: ScheduleInfo2::unlocked(),
            refined_config: None,
        }
    }
}

/// Compute the scheduling constraints of `workload` on executor `executor_name`.
///
/// `kind` is the executor kind as registered. It is only validated once label
/// scheduling is known to be enabled; disabled executors return defaults for any kind.
#[instrument(
    level = "debug",
    skip(configs, workload),
    fields(workload = workload.name(), shape = workload.shape())
)]
pub fn label_filter_chain(
    configs: &ExecutorWholeConfigs,
    executor_name: &str,
    kind: &str,
    workload: &Workload,
) -> Result<ScheduleOutcome, CoreError> {
    if !configs.enable_label_schedule() {
        debug!("label scheduling disabled for executor");
        return Ok(ScheduleOutcome::unlocked(Evaluation::Disabled));
    }

    let kind: ExecutorKind = kind.parse()?;
    let (li, refined_config) = match (kind.label_support(), workload) {
        (LabelSupport::Unsupported, _) => {
            debug!(%kind, "executor kind does not support label scheduling");
            return Ok(ScheduleOutcome::unlocked(Evaluation::Unsupported));
        }
        (LabelSupport::ServiceGroup, Workload::ServiceGroup(sg)) => {
            let li = LabelInfo::new(&sg.labels, executor_name, kind, configs, &sg.id)
                .with_selectors(collect_service_selectors(sg));
            let refined = match configs.plus_configs {
                Some(_) => set_runtime_refined_config(&li),
                None => None,
            };
            (li, refined)
        }
        (LabelSupport::Job, Workload::Job(job)) => (
            LabelInfo::new(&job.labels, executor_name, kind, configs, &job.name),
            None,
        ),
        (LabelSupport::ServiceGroup, other) => {
            return Err(CoreError::NotRecognizedRuntimeType {
                kind,
                got: other.shape(),
            });
        }
        (LabelSupport::Job, other) => {
            return Err(CoreError::NotRecognizedJobType {
                kind,
                got: other.shape(),
            });
        }
    };

    let mut r = ScheduleInfo::default();
    let mut r2 = ScheduleInfo2::default();
    run_label_filters(&mut r, &mut r2, &li);

    debug!(
        likes = ?r.likes,
        exclusive = ?r.exclusive_likes,
        inclusive = ?r.inclusive_likes,
        unlike_prefixes = ?r.un_like_prefixs,
        flag = r.flag,
        "label filter chain done"
    );

    Ok(ScheduleOutcome {
        evaluation: Evaluation::Labeled,
        schedule_info: r,
        schedule_info2: r2,
        refined_config,
    })
}
