use async_trait::async_trait;
use crate::enums::source_error::SourceError;
use crate::structs::raw_issue::RawIssue;

/// Anything that can hand back the open issues of a repository. The
/// orchestrator consumes whatever the source returns; paging and caps are
/// the source's concern.
#[async_trait]
pub trait IssueSource: Send + Sync {

    async fn fetch_issues(&self, repository: &str, max_items: u32) -> Result<Vec<RawIssue>, SourceError>;
}
