use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::webhook_config::WebhookConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NotificationConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_notification_top_n")]
    pub top_n: usize,

    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}
