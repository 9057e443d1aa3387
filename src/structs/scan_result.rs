use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::failed_repository::FailedRepository;
use crate::structs::scored_issue::ScoredIssue;

/// One pass over the target catalog. Ordering of `new_opportunities` is
/// descending score, ties broken by earliest created_at. Never persisted;
/// the report emitter renders it and it is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub repositories_scanned: usize,
    pub new_opportunities: Vec<ScoredIssue>,
    pub failed_repositories: Vec<FailedRepository>,
}

impl ScanResult {
    pub fn top(&self, limit: usize) -> &[ScoredIssue] {
        let end = self.new_opportunities.len().min(limit);
        &self.new_opportunities[..end]
    }

    pub fn duration_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
