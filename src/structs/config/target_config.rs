use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::helpers::config_helper::ConfigHelper;

/// One catalog entry: a repository the radar is allowed to scan.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepositoryTarget {
    pub identifier: String,
    pub category: Category,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl RepositoryTarget {
    pub fn new(identifier: &str, category: Category) -> Self {
        Self {
            identifier: identifier.to_string(),
            category,
            enabled: true,
            tags: vec![],
        }
    }

    pub fn has_valid_identifier(&self) -> bool {
        let mut parts = self.identifier.split('/');
        matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        )
    }
}
