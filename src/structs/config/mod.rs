pub mod config;
pub mod global_config;
pub mod target_config;
pub mod scoring_config;
pub mod source_config;
pub mod output_config;
pub mod notification_config;
pub mod webhook_config;
