use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_dir")]
    pub output_dir: String,

    /// Report formats to generate: "markdown", "json".
    #[serde(default = "ConfigHelper::default_formats")]
    pub formats: Vec<String>,

    #[serde(default = "ConfigHelper::default_table_limit")]
    pub table_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: ConfigHelper::default_output_dir(),
            formats: ConfigHelper::default_formats(),
            table_limit: ConfigHelper::default_table_limit(),
        }
    }
}
