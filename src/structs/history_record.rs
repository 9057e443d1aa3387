use std::collections::HashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable per-repository scan memory. `seen_issue_keys` only ever grows
/// and `last_scanned_at` only advances forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub repository: String,
    pub seen_issue_keys: HashSet<String>,
    pub last_scanned_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn empty(repository: &str) -> Self {
        Self {
            repository: repository.to_string(),
            seen_issue_keys: HashSet::new(),
            last_scanned_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn is_new(&self, issue_key: &str) -> bool {
        !self.seen_issue_keys.contains(issue_key)
    }

    pub fn has_been_scanned(&self) -> bool {
        self.last_scanned_at > DateTime::<Utc>::UNIX_EPOCH
    }
}
