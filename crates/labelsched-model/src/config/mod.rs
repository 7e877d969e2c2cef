mod executor;
pub use executor::{BasicConfig, ExecutorWholeConfigs};

mod plus;
pub use plus::{OrgOptions, PlusConfigs, WorkspaceOptions};

mod refined;
pub use refined::RefinedConfig;

/// Split a comma separated config value, trimming entries and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(split_list(" test , prod,,"), vec!["test", "prod"]);
        assert!(split_list(" , ").is_empty());
        assert!(split_list("").is_empty());
    }
}
