use serde::{Deserialize, Serialize};
use crate::config::constants::{TIER_CRITICAL_MIN, TIER_HIGH_MIN, TIER_MEDIUM_MIN};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_score(score: u32) -> Self {
        if score >= TIER_CRITICAL_MIN {
            Tier::Critical
        } else if score >= TIER_HIGH_MIN {
            Tier::High
        } else if score >= TIER_MEDIUM_MIN {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Critical => "🔴",
            Tier::High => "🟠",
            Tier::Medium => "🟡",
            Tier::Low => "🟢",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}
