use labelsched_model::constants::{
    JOB_KIND_BIGDATA, LABEL_JOB_KIND, LABEL_PACK, LABEL_PLATFORM, LABEL_PROJECT,
    LABEL_SERVICE_TYPE, SELECTOR_PLATFORM, SERVICE_TYPE_ADDONS, SERVICE_TYPE_DAEMONSET,
    SERVICE_TYPE_STATELESS, TAG_BIGDATA, TAG_JOB, TAG_PROJECT_PREFIX, TAG_SERVICE_STATEFUL,
    TAG_SERVICE_STATELESS,
};

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

use super::LabelFilter;

/// Workload identity sub-filters, in execution order. `any` must stay last.
const IDENTITY_FILTERS: [LabelFilter; 10] = [
    job_filter,
    pack_filter,
    daemonset_filter,
    stateful_filter,
    stateless_filter,
    bigdata_filter,
    platform_filter,
    lock_filter,
    project_filter,
    any_filter,
];

/// What kind of workload this is: job, pack, daemonset, stateful, stateless, bigdata,
/// platform, project; then the "any" fallback.
pub fn identity_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    for filter in IDENTITY_FILTERS {
        filter(r, r2, li);
    }
}

fn is_bigdata_job(li: &LabelInfo<'_>) -> bool {
    li.label.get(LABEL_JOB_KIND) == Some(JOB_KIND_BIGDATA)
}

fn job_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.executor_kind.is_batch_job() && !is_bigdata_job(li) {
        r.likes.push(TAG_JOB.to_string());
        r2.job = true;
    }
}

/// Structured result only; tag schedulers have no pack tag.
fn pack_filter(_r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.executor_kind.is_batch_job() && li.label.get(LABEL_PACK) == Some("true") {
        r2.pack = true;
    }
}

/// Structured result only; DCOS cannot express daemonsets.
fn daemonset_filter(_r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.label.get(LABEL_SERVICE_TYPE) == Some(SERVICE_TYPE_DAEMONSET) {
        r2.is_daemonset = true;
    }
}

fn stateful_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.label.get(LABEL_SERVICE_TYPE) == Some(SERVICE_TYPE_ADDONS) {
        r.likes.push(TAG_SERVICE_STATEFUL.to_string());
        r2.stateful = true;
    }
}

fn stateless_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.label.get(LABEL_SERVICE_TYPE) == Some(SERVICE_TYPE_STATELESS) {
        r.likes.push(TAG_SERVICE_STATELESS.to_string());
        r2.stateless = true;
    }
}

fn bigdata_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    if li.executor_kind.supports_bigdata() && is_bigdata_job(li) {
        r.exclusive_likes.push(TAG_BIGDATA.to_string());
        r2.bigdata = true;
    }
}

/// Overwrites, never accumulates.
fn platform_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let platform = is_platform(li);
    r.is_platform = platform;
    r2.is_platform = platform;
}

/// `PLATFORM` label presence is enough. Otherwise at least one service must carry a
/// `platform` selector and every such selector must be a positive `true`; services
/// without one do not object.
fn is_platform(li: &LabelInfo<'_>) -> bool {
    if li.label.contains(LABEL_PLATFORM) {
        return true;
    }
    let mut seen = false;
    for (_, sel) in li.service_selectors(SELECTOR_PLATFORM) {
        let positive = !sel.not
            && sel
                .values
                .first()
                .is_some_and(|v| v.to_lowercase() == "true");
        if !positive {
            return false;
        }
        seen = true;
    }
    seen
}

fn lock_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, _li: &LabelInfo<'_>) {
    r.is_unlocked = true;
    r2.is_unlocked = true;
}

/// Deprecated project scheduling: only project ids listed as basic config keys take part.
fn project_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let project = li
        .label
        .get(LABEL_PROJECT)
        .filter(|id| li.executor_config.project_id_for_compatibility(id));

    match project {
        Some(id) => {
            r.exclusive_likes.push(format!("{TAG_PROJECT_PREFIX}{id}"));
            r2.has_project = true;
            r2.project = id.to_string();
        }
        None => {
            r.un_like_prefixs.push(TAG_PROJECT_PREFIX.to_string());
            r2.has_project = false;
        }
    }
}

/// Generic preference unless a bigdata exclusive or a project like claimed the workload.
fn any_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, _li: &LabelInfo<'_>) {
    let bigdata = r.exclusive_likes.iter().any(|t| t == TAG_BIGDATA);
    let project = r.likes.iter().any(|t| t.starts_with(TAG_PROJECT_PREFIX));
    if bigdata || project {
        return;
    }

    r.flag = true;
    r2.prefer_jobs = true;
    r2.prefer_packs = true;
    r2.prefer_stateful = true;
    r2.prefer_stateless = true;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use labelsched_model::{ExecutorKind, Selector, Selectors};

    use super::*;
    use crate::filter::testing::{apply, basic, labels};

    fn run(kind: ExecutorKind, pairs: &[(&str, &str)]) -> (ScheduleInfo, ScheduleInfo2) {
        apply(identity_filter, kind, &basic(&[]), &labels(pairs), BTreeMap::new())
    }

    fn platform_selectors(entries: &[(&str, Option<Selector>)]) -> BTreeMap<String, Selectors> {
        entries
            .iter()
            .map(|(svc, sel)| {
                let mut sels = Selectors::new();
                if let Some(sel) = sel {
                    sels.insert("platform", sel.clone());
                }
                (svc.to_string(), sels)
            })
            .collect()
    }

    #[test]
    fn batch_jobs_like_job_tag() {
        for kind in [ExecutorKind::Metronome, ExecutorKind::K8sJob] {
            let (r, r2) = run(kind, &[]);
            assert_eq!(r.likes, vec!["job"]);
            assert!(r2.job);
            assert!(r.flag);
            assert!(r2.prefer_jobs && r2.prefer_packs && r2.prefer_stateful && r2.prefer_stateless);
        }

        let (r, r2) = run(ExecutorKind::Spark, &[]);
        assert!(r.likes.is_empty());
        assert!(!r2.job);
    }

    #[test]
    fn pack_is_structured_only() {
        let (r, r2) = run(ExecutorKind::K8sJob, &[("PACK", "true")]);
        assert!(r2.pack);
        assert_eq!(r.likes, vec!["job"]);

        let (_, r2) = run(ExecutorKind::K8s, &[("PACK", "true")]);
        assert!(!r2.pack);
    }

    #[test]
    fn service_types() {
        let (r, r2) = run(ExecutorKind::K8s, &[("SERVICE_TYPE", "DAEMONSET")]);
        assert!(r2.is_daemonset);
        assert!(r.likes.is_empty());

        let (r, r2) = run(ExecutorKind::Marathon, &[("SERVICE_TYPE", "ADDONS")]);
        assert_eq!(r.likes, vec!["service-stateful"]);
        assert!(r2.stateful && !r2.stateless);

        let (r, r2) = run(ExecutorKind::Marathon, &[("SERVICE_TYPE", "STATELESS")]);
        assert_eq!(r.likes, vec!["service-stateless"]);
        assert!(r2.stateless && !r2.stateful);
    }

    #[test]
    fn bigdata_suppresses_any_fallback() {
        for kind in [
            ExecutorKind::Metronome,
            ExecutorKind::K8sJob,
            ExecutorKind::Spark,
            ExecutorKind::K8sSpark,
            ExecutorKind::Flink,
        ] {
            let (r, r2) = run(kind, &[("JOB_KIND", "bigdata")]);
            assert_eq!(r.exclusive_likes, vec!["bigdata"]);
            assert!(r.likes.is_empty());
            assert!(!r.flag);
            assert!(r2.bigdata);
            assert!(!r2.prefer_jobs);
        }
    }

    #[test]
    fn bigdata_ignored_on_service_executors() {
        let (r, r2) = run(ExecutorKind::K8s, &[("JOB_KIND", "bigdata")]);
        assert!(r.exclusive_likes.is_empty());
        assert!(!r2.bigdata);
        assert!(r.flag);
    }

    #[test]
    fn platform_label_presence() {
        let (r, r2) = run(ExecutorKind::K8s, &[("PLATFORM", "")]);
        assert!(r.is_platform && r2.is_platform);
    }

    #[test]
    fn platform_from_selectors() {
        let cfg = basic(&[]);
        let empty = labels(&[]);

        let all_true = platform_selectors(&[
            ("a", Some(Selector::new(["TRUE"]))),
            ("b", Some(Selector::new(["true", "false"]))),
        ]);
        let (r, _) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, all_true);
        assert!(r.is_platform);

        let one_negated = platform_selectors(&[
            ("a", Some(Selector::new(["true"]))),
            ("b", Some(Selector::negated(["true"]))),
        ]);
        let (r, _) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, one_negated);
        assert!(!r.is_platform);

        let one_empty = platform_selectors(&[("a", Some(Selector::new(Vec::<String>::new())))]);
        let (r, _) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, one_empty);
        assert!(!r.is_platform);

        let (r, r2) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, BTreeMap::new());
        assert!(!r.is_platform && !r2.is_platform);

        let partial = platform_selectors(&[("a", Some(Selector::new(["true"]))), ("b", None)]);
        let (r, _) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, partial);
        assert!(r.is_platform);
    }

    #[test]
    fn other_selectors_are_not_a_platform_claim() {
        let cfg = basic(&[]);
        let empty = labels(&[]);

        let mut org_only = Selectors::new();
        org_only.insert("org", Selector::new(["blue"]));
        let mut location_only = Selectors::new();
        location_only.insert("location", Selector::new(["edge"]));

        for sels in [org_only, location_only] {
            let selectors: BTreeMap<String, Selectors> =
                [("web".to_string(), sels)].into_iter().collect();
            let (r, r2) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, selectors);
            assert!(!r.is_platform && !r2.is_platform);
        }

        let no_platform_key = platform_selectors(&[("a", None), ("b", None)]);
        let (r, _) = apply(identity_filter, ExecutorKind::K8s, &cfg, &empty, no_platform_key);
        assert!(!r.is_platform);
    }

    #[test]
    fn platform_overwrites_previous_value() {
        let cfg = basic(&[]);
        let li_labels = labels(&[]);
        let li = LabelInfo::new(&li_labels, "exec", ExecutorKind::K8s, &cfg, "obj");
        let mut r = ScheduleInfo {
            is_platform: true,
            ..Default::default()
        };
        let mut r2 = ScheduleInfo2 {
            is_platform: true,
            ..Default::default()
        };
        platform_filter(&mut r, &mut r2, &li);
        assert!(!r.is_platform && !r2.is_platform);
    }

    #[test]
    fn always_unlocked() {
        let (r, r2) = run(ExecutorKind::Edas, &[]);
        assert!(r.is_unlocked && r2.is_unlocked);
    }

    #[test]
    fn project_requires_compat_key() {
        let cfg = basic(&[("77", "")]);
        let (r, r2) = apply(
            identity_filter,
            ExecutorKind::Marathon,
            &cfg,
            &labels(&[("DICE_PROJECT", "77")]),
            BTreeMap::new(),
        );
        assert_eq!(r.exclusive_likes, vec!["project-77"]);
        assert!(r.un_like_prefixs.is_empty());
        assert!(r2.has_project);
        assert_eq!(r2.project, "77");

        let (r, r2) = run(ExecutorKind::Marathon, &[("DICE_PROJECT", "77")]);
        assert_eq!(r.un_like_prefixs, vec!["project-"]);
        assert!(!r2.has_project);
    }

    #[test]
    fn project_like_suppresses_any_fallback() {
        let cfg = basic(&[]);
        let li_labels = labels(&[]);
        let li = LabelInfo::new(&li_labels, "exec", ExecutorKind::K8s, &cfg, "obj");
        let mut r = ScheduleInfo {
            likes: vec!["project-9".into()],
            ..Default::default()
        };
        let mut r2 = ScheduleInfo2::default();
        any_filter(&mut r, &mut r2, &li);
        assert!(!r.flag);
        assert!(!r2.prefer_stateless);
    }
}
