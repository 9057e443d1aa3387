use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "ConfigHelper::default_scan_interval_hours")]
    pub scan_interval_hours: u64,

    #[serde(default = "ConfigHelper::default_parallel_repos")]
    pub parallel_repos: usize,

    #[serde(default = "ConfigHelper::default_max_issues_per_repo")]
    pub max_issues_per_repo: u32,

    #[serde(default = "ConfigHelper::default_top_n")]
    pub top_n: usize,

    /// Override for the history location; defaults to ~/.issueradar/history.
    #[serde(default)]
    pub state_dir: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            scan_interval_hours: ConfigHelper::default_scan_interval_hours(),
            parallel_repos: ConfigHelper::default_parallel_repos(),
            max_issues_per_repo: ConfigHelper::default_max_issues_per_repo(),
            top_n: ConfigHelper::default_top_n(),
            state_dir: None,
        }
    }
}
