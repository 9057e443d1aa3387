use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::helpers::config_helper::ConfigHelper;

/// Data-driven scoring knobs. The numeric weights are tunable; only the
/// ordering and tie-break rules are load-bearing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScoringConfig {
    #[serde(default = "ConfigHelper::default_label_weights")]
    pub label_weights: HashMap<String, i64>,

    /// Keyed by category name: ai_ml, security, compliance, other.
    #[serde(default = "ConfigHelper::default_category_multipliers")]
    pub category_multipliers: HashMap<String, f64>,

    #[serde(default = "ConfigHelper::default_no_comment_bonus")]
    pub no_comment_bonus: i64,

    #[serde(default = "ConfigHelper::default_crowded_penalty")]
    pub crowded_penalty: i64,

    #[serde(default = "ConfigHelper::default_crowded_comment_threshold")]
    pub crowded_comment_threshold: u32,

    /// Opportunities below this score are scanned and remembered but never
    /// surfaced.
    #[serde(default)]
    pub min_score: u32,
}

impl ScoringConfig {
    pub fn multiplier_for(&self, category: Category) -> f64 {
        self.category_multipliers
            .get(category.key())
            .copied()
            .unwrap_or(1.0)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            label_weights: ConfigHelper::default_label_weights(),
            category_multipliers: ConfigHelper::default_category_multipliers(),
            no_comment_bonus: ConfigHelper::default_no_comment_bonus(),
            crowded_penalty: ConfigHelper::default_crowded_penalty(),
            crowded_comment_threshold: ConfigHelper::default_crowded_comment_threshold(),
            min_score: 0,
        }
    }
}
