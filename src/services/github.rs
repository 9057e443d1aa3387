use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{GITHUB_API_VERSION, USER_AGENT};
use crate::enums::source_error::SourceError;
use crate::errors::RadarResult;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::source_config::SourceConfig;
use crate::structs::github::github_issue::GithubIssue;
use crate::structs::raw_issue::RawIssue;
use crate::traits::issue_source::IssueSource;

pub struct GithubIssueSource {
    client: Client,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl GithubIssueSource {

    pub fn new(config: &SourceConfig) -> RadarResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.is_empty());

        if token.is_none() {
            log::warn!(
                "⚠️ {} is not set - scanning unauthenticated with a much lower rate budget",
                config.token_env
            );
        }

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
            rate_limiter: Arc::new(ApiRateLimiter::new(
                config.requests_per_minute,
                config.burst_per_second,
            )),
        })
    }

    fn classify_send_error(repository: &str, error: &reqwest::Error) -> SourceError {
        if error.is_timeout() {
            SourceError::TransientNetwork(format!("timeout fetching {}", repository))
        } else {
            SourceError::TransientNetwork(format!("{}: {}", repository, error))
        }
    }
}

#[async_trait]
impl IssueSource for GithubIssueSource {

    async fn fetch_issues(&self, repository: &str, max_items: u32) -> Result<Vec<RawIssue>, SourceError> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/repos/{}/issues", self.base_url, repository);
        let per_page = max_items.clamp(1, 100).to_string();

        let mut request = self.client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .query(&[
                ("state", "open"),
                ("sort", "updated"),
                ("direction", "desc"),
                ("per_page", per_page.as_str()),
            ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::classify_send_error(repository, &e))?;

        if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
            log::debug!(
                "  📉 Rate limit remaining after {}: {}",
                repository,
                remaining.to_str().unwrap_or("?")
            );
        }

        let status = response.status().as_u16();
        match status {
            200 => {}
            403 | 429 => {
                return Err(SourceError::RateLimited(format!(
                    "HTTP {} for {}",
                    status, repository
                )))
            }
            404 => return Err(SourceError::NotFound(repository.to_string())),
            _ => {
                return Err(SourceError::TransientNetwork(format!(
                    "HTTP {} for {}",
                    status, repository
                )))
            }
        }

        let items: Vec<GithubIssue> = response
            .json()
            .await
            .map_err(|e| SourceError::TransientNetwork(format!("decoding {}: {}", repository, e)))?;

        // Pull requests ride along on the issues endpoint; drop them.
        Ok(items
            .into_iter()
            .filter(|item| !item.is_pull_request())
            .map(|item| item.into_raw_issue(repository))
            .collect())
    }
}
