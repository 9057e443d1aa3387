use serde::{Deserialize, Serialize};
use crate::structs::config::global_config::GlobalConfig;
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::scoring_config::ScoringConfig;
use crate::structs::config::source_config::SourceConfig;
use crate::structs::config::target_config::RepositoryTarget;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub targets: Vec<RepositoryTarget>,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            targets: vec![],
            scoring: ScoringConfig::default(),
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}
