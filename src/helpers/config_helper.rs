use std::collections::HashMap;
use crate::config::constants::{
    DEFAULT_BURST_PER_SECOND, DEFAULT_CATEGORY_MULTIPLIERS, DEFAULT_LABEL_WEIGHTS,
    DEFAULT_MAX_ISSUES_PER_REPO, DEFAULT_NOTIFICATION_TOP_N, DEFAULT_OUTPUT_DIR,
    DEFAULT_REQUESTS_PER_MINUTE, DEFAULT_SCAN_INTERVAL_HOURS, DEFAULT_SOURCE_TIMEOUT_SECS,
    DEFAULT_TABLE_LIMIT, DEFAULT_TOP_N, GITHUB_API_BASE_URL, GITHUB_TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_scan_interval_hours() -> u64 {
        DEFAULT_SCAN_INTERVAL_HOURS
    }

    pub fn default_parallel_repos() -> usize {
        1
    }

    pub fn default_max_issues_per_repo() -> u32 {
        DEFAULT_MAX_ISSUES_PER_REPO
    }

    pub fn default_top_n() -> usize {
        DEFAULT_TOP_N
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_label_weights() -> HashMap<String, i64> {
        DEFAULT_LABEL_WEIGHTS
            .iter()
            .map(|(label, weight)| (label.to_string(), *weight))
            .collect()
    }

    pub fn default_category_multipliers() -> HashMap<String, f64> {
        DEFAULT_CATEGORY_MULTIPLIERS
            .iter()
            .map(|(category, multiplier)| (category.to_string(), *multiplier))
            .collect()
    }

    pub fn default_no_comment_bonus() -> i64 {
        5
    }

    pub fn default_crowded_penalty() -> i64 {
        5
    }

    pub fn default_crowded_comment_threshold() -> u32 {
        20
    }

    pub fn default_api_base_url() -> String {
        GITHUB_API_BASE_URL.to_string()
    }

    pub fn default_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_SOURCE_TIMEOUT_SECS
    }

    pub fn default_requests_per_minute() -> u32 {
        DEFAULT_REQUESTS_PER_MINUTE
    }

    pub fn default_burst_per_second() -> u32 {
        DEFAULT_BURST_PER_SECOND
    }

    pub fn default_output_dir() -> String {
        DEFAULT_OUTPUT_DIR.to_string()
    }

    pub fn default_formats() -> Vec<String> {
        vec!["markdown".to_string(), "json".to_string()]
    }

    pub fn default_table_limit() -> usize {
        DEFAULT_TABLE_LIMIT
    }

    pub fn default_notification_top_n() -> usize {
        DEFAULT_NOTIFICATION_TOP_N
    }

    pub fn default_webhook_method() -> String {
        "POST".to_string()
    }
}
