use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open issue as handed back by the issue source. Identity is
/// repository plus number; title and labels may drift between scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    pub repository: String,
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    pub comment_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub body: String,
}

impl RawIssue {
    pub fn dedup_key(&self) -> String {
        format!("{}#{}", self.repository, self.number)
    }
}
