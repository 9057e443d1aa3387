use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookConfig {
    pub url: String,

    #[serde(default = "ConfigHelper::default_webhook_method")]
    pub method: String,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}
