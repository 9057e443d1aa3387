use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::enums::tier::Tier;
use crate::structs::raw_issue::RawIssue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredIssue {
    #[serde(flatten)]
    pub issue: RawIssue,
    pub score: u32,
    pub tier: Tier,
    pub category: Category,
}

impl ScoredIssue {
    pub fn dedup_key(&self) -> String {
        self.issue.dedup_key()
    }
}
