use chrono::{DateTime, Utc};
use serde::Deserialize;
use crate::config::constants::MAX_ISSUE_BODY_CHARS;
use crate::structs::github::github_label::GithubLabel;
use crate::structs::github::github_user::GithubUser;
use crate::structs::raw_issue::RawIssue;

/// Wire shape of `GET /repos/{owner}/{repo}/issues` items. Pull requests
/// also appear on this endpoint and carry a `pull_request` key.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,

    #[serde(default)]
    pub labels: Vec<GithubLabel>,

    #[serde(default)]
    pub comments: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub user: Option<GithubUser>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl GithubIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn into_raw_issue(self, repository: &str) -> RawIssue {
        let body = self
            .body
            .unwrap_or_default()
            .chars()
            .take(MAX_ISSUE_BODY_CHARS)
            .collect();

        RawIssue {
            repository: repository.to_string(),
            number: self.number,
            title: self.title,
            labels: self.labels.into_iter().map(|label| label.name).collect(),
            comment_count: self.comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
            url: self.html_url,
            author: self
                .user
                .map(|user| user.login)
                .unwrap_or_else(|| "unknown".to_string()),
            body,
        }
    }
}
