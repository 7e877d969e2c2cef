use labelsched_model::constants::LABEL_SPECIFIC_HOSTS;

use crate::{
    info::LabelInfo,
    schedule::{ScheduleInfo, ScheduleInfo2},
};

pub fn specific_host_label_filter(r: &mut ScheduleInfo, r2: &mut ScheduleInfo2, li: &LabelInfo<'_>) {
    let Some(raw) = li.label.get(LABEL_SPECIFIC_HOSTS) else {
        return;
    };

    let hosts: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();

    r.specific_host = hosts.clone();
    r2.specific_host = hosts;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use labelsched_model::ExecutorKind;

    use super::*;
    use crate::filter::testing::{apply, basic, labels};

    fn run(raw: &str) -> (ScheduleInfo, ScheduleInfo2) {
        apply(
            specific_host_label_filter,
            ExecutorKind::Marathon,
            &basic(&[]),
            &labels(&[("SPECIFIC_HOSTS", raw)]),
            BTreeMap::new(),
        )
    }

    #[test]
    fn splits_and_trims() {
        let (r, r2) = run(" 10.0.0.1, node-b ,,node-c");
        assert_eq!(r.specific_host, vec!["10.0.0.1", "node-b", "node-c"]);
        assert_eq!(r2.specific_host, r.specific_host);
    }

    #[test]
    fn blank_entries_give_empty_list() {
        let (r, r2) = run(" , ,");
        assert!(r.specific_host.is_empty());
        assert!(r2.specific_host.is_empty());
    }
}
