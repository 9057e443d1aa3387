use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".issueradar";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HISTORY_DIR_NAME: &str = "history";

pub const DEFAULT_SCAN_INTERVAL_HOURS: u64 = 4;
pub const DEFAULT_MAX_ISSUES_PER_REPO: u32 = 50;
pub const DEFAULT_TOP_N: usize = 50;
pub const DEFAULT_TABLE_LIMIT: usize = 30;
pub const DEFAULT_NOTIFICATION_TOP_N: usize = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "./issueradar-reports";

pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 50;
pub const DEFAULT_BURST_PER_SECOND: u32 = 5;

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = "issueradar-cli";

pub const MAX_ISSUE_BODY_CHARS: usize = 500;
pub const MAX_TITLE_DISPLAY_CHARS: usize = 60;

// Tier bands over the final score
pub const TIER_CRITICAL_MIN: u32 = 40;
pub const TIER_HIGH_MIN: u32 = 30;
pub const TIER_MEDIUM_MIN: u32 = 25;

// Built-in label weights; overridable via [scoring.label_weights]
pub const DEFAULT_LABEL_WEIGHTS: &[(&str, i64)] = &[
    ("help wanted", 15),
    ("good first issue", 15),
    ("beginner-friendly", 15),
    ("easy", 15),
    ("bug", 10),
    ("security", 10),
    ("vulnerability", 10),
    ("documentation", 5),
    ("enhancement", 5),
    ("feature", 5),
];

pub const DEFAULT_CATEGORY_MULTIPLIERS: &[(&str, f64)] = &[
    ("ai_ml", 1.0),
    ("security", 1.2),
    ("compliance", 1.0),
    ("other", 1.0),
];

pub fn interval_duration(hours: u64) -> Duration {
    Duration::from_secs(hours * 3600)
}

pub fn duration_cap(minutes: u64) -> Duration {
    Duration::from_secs(minutes * 60)
}
