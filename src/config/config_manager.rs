use std::fs;
use std::path::PathBuf;
use once_cell::sync::Lazy;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{RadarError, RadarResult};
use crate::structs::config::config::Config;

static CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
});

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> &'static PathBuf {
        &CONFIG_PATH
    }

    pub fn load() -> RadarResult<Config> {
        let config_path = Self::config_path();

        if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(config_path).map_err(|e| {
                RadarError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                RadarError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: e.message().to_string(),
                }
            })?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> RadarResult<()> {
        let sample_config = r#"# IssueRadar Configuration

[global]
# Hours between passes in continuous mode
scan_interval_hours = 4

# Repositories fetched concurrently within one pass
parallel_repos = 2

# Per-repository page cap handed to the issue source
max_issues_per_repo = 50

# Opportunities kept for display and notification
top_n = 50

# Target catalog. Categories: ai_ml, security, compliance, other.
# To re-surface a repository from scratch, delete its file under
# ~/.issueradar/history/.

[[targets]]
identifier = "langchain-ai/langchain"
category = "ai_ml"
tags = ["llm", "framework"]

[[targets]]
identifier = "huggingface/transformers"
category = "ai_ml"

[[targets]]
identifier = "tiangolo/fastapi"
category = "ai_ml"
tags = ["api"]

[[targets]]
identifier = "pytorch/pytorch"
category = "ai_ml"

[[targets]]
identifier = "OWASP/CheatSheetSeries"
category = "security"

[[targets]]
identifier = "OWASP/wstg"
category = "security"

[[targets]]
identifier = "aquasecurity/trivy"
category = "security"
tags = ["scanner"]

[[targets]]
identifier = "gitleaks/gitleaks"
category = "security"
tags = ["secrets"]

[[targets]]
identifier = "open-policy-agent/opa"
category = "compliance"
tags = ["policy-as-code"]

[[targets]]
identifier = "bridgecrewio/checkov"
category = "compliance"

# Scoring knobs. Weights are tunable; ordering and tie-breaks are what
# the engine guarantees.
[scoring]
no_comment_bonus = 5
crowded_penalty = 5
crowded_comment_threshold = 20
min_score = 20

[scoring.label_weights]
"help wanted" = 15
"good first issue" = 15
"beginner-friendly" = 15
"easy" = 15
"bug" = 10
"security" = 10
"vulnerability" = 10
"documentation" = 5
"enhancement" = 5
"feature" = 5

[scoring.category_multipliers]
ai_ml = 1.0
security = 1.2
compliance = 1.0
other = 1.0

[source]
api_base_url = "https://api.github.com"
token_env = "GITHUB_TOKEN"
timeout_secs = 30
requests_per_minute = 50
burst_per_second = 5

[output]
output_dir = "./issueradar-reports"
formats = ["markdown", "json"]
table_limit = 30

[notifications]
enabled = false
top_n = 10

# [notifications.webhook]
# url = "https://discord.com/api/webhooks/..."
# method = "POST"
"#;

        let config_path = Self::config_path();
        let config_dir = config_path.parent().ok_or_else(|| {
            RadarError::system_error("config init", "could not resolve config directory")
        })?;

        fs::create_dir_all(config_dir)?;
        fs::write(config_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> RadarResult<()> {
        let mut errors: Vec<RadarError> = Vec::new();

        for target in &config.targets {
            if !target.has_valid_identifier() {
                errors.push(RadarError::validation_error(
                    "targets.identifier",
                    &target.identifier,
                    "must be of the form owner/name",
                    Some("e.g. \"OWASP/wstg\""),
                ));
            }
        }

        let mut identifiers = std::collections::HashSet::new();
        for target in &config.targets {
            if !identifiers.insert(&target.identifier) {
                errors.push(RadarError::validation_error(
                    "targets.identifier",
                    &target.identifier,
                    "must be unique within the catalog",
                    None,
                ));
            }
        }

        if config.global.scan_interval_hours == 0 {
            errors.push(RadarError::validation_error(
                "global.scan_interval_hours",
                "0",
                "must be at least 1",
                None,
            ));
        }

        if config.global.max_issues_per_repo == 0 || config.global.max_issues_per_repo > 100 {
            errors.push(RadarError::validation_error(
                "global.max_issues_per_repo",
                &config.global.max_issues_per_repo.to_string(),
                "must be between 1 and 100",
                Some("the issue source serves at most 100 items per page"),
            ));
        }

        for format in &config.output.formats {
            if format != "markdown" && format != "json" {
                errors.push(RadarError::validation_error(
                    "output.formats",
                    format,
                    "must be \"markdown\" or \"json\"",
                    None,
                ));
            }
        }

        if config.notifications.enabled && config.notifications.webhook.is_none() {
            errors.push(RadarError::validation_error(
                "notifications.webhook",
                "<missing>",
                "required when notifications.enabled is true",
                None,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RadarError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            })
        }
    }
}
