use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "ConfigHelper::default_api_base_url")]
    pub api_base_url: String,

    /// Environment variable holding the API token; unset means
    /// unauthenticated requests.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_requests_per_minute")]
    pub requests_per_minute: u32,

    #[serde(default = "ConfigHelper::default_burst_per_second")]
    pub burst_per_second: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base_url: ConfigHelper::default_api_base_url(),
            token_env: ConfigHelper::default_token_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            requests_per_minute: ConfigHelper::default_requests_per_minute(),
            burst_per_second: ConfigHelper::default_burst_per_second(),
        }
    }
}
