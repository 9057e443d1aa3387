use std::collections::HashSet;
use std::sync::Arc;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use crate::enums::category::Category;
use crate::errors::RadarResult;
use crate::services::history_store::HistoryStore;
use crate::services::scorer::IssueScorer;
use crate::structs::config::config::Config;
use crate::structs::config::target_config::RepositoryTarget;
use crate::structs::failed_repository::FailedRepository;
use crate::structs::scan_result::ScanResult;
use crate::structs::scored_issue::ScoredIssue;
use crate::traits::issue_source::IssueSource;

/// Drives one pass over the target catalog: fetch, score, dedup against
/// history, commit, accumulate. One repository's failure never aborts the
/// pass; a history commit failure does.
pub struct ScanOrchestrator {
    config: Arc<Config>,
    source: Arc<dyn IssueSource>,
    history: Arc<HistoryStore>,
    scorer: IssueScorer,
}

impl ScanOrchestrator {

    pub fn new(config: Arc<Config>, source: Arc<dyn IssueSource>, history: Arc<HistoryStore>) -> Self {
        let scorer = IssueScorer::new(config.scoring.clone());
        Self {
            config,
            source,
            history,
            scorer,
        }
    }

    fn selected_targets(&self, categories: Option<&[Category]>) -> Vec<RepositoryTarget> {
        self.config
            .targets
            .iter()
            .filter(|target| target.enabled)
            .filter(|target| {
                categories.map_or(true, |wanted| wanted.contains(&target.category))
            })
            .cloned()
            .collect()
    }

    pub async fn run_pass(&self, categories: Option<&[Category]>) -> RadarResult<ScanResult> {
        let started_at = Utc::now();
        let targets = self.selected_targets(categories);

        log::info!("🚀 Scanning {} repositories", targets.len());

        let max_items = self.config.global.max_issues_per_repo;
        let parallel = self.config.global.parallel_repos.max(1);
        let source = Arc::clone(&self.source);

        // Fetches may overlap (bounded, catalog order preserved); scoring
        // and the history commit for a repository happen here in the
        // consuming loop, after its fetch completes, so no network wait
        // ever holds the store's write path.
        let mut fetches = stream::iter(targets.into_iter().map(move |target| {
            let source = Arc::clone(&source);
            async move {
                let fetched = source.fetch_issues(&target.identifier, max_items).await;
                (target, fetched)
            }
        }))
        .buffered(parallel);

        let mut new_opportunities: Vec<ScoredIssue> = Vec::new();
        let mut failed_repositories: Vec<FailedRepository> = Vec::new();
        let mut repositories_scanned = 0usize;

        while let Some((target, fetched)) = fetches.next().await {
            let raw_issues = match fetched {
                Ok(raw_issues) => raw_issues,
                Err(error) => {
                    log::warn!("  ⚠️ {} failed: {}", target.identifier, error);
                    failed_repositories.push(FailedRepository {
                        identifier: target.identifier.clone(),
                        error_kind: error.kind(),
                    });
                    continue;
                }
            };

            repositories_scanned += 1;
            let scanned_at = Utc::now();
            let record = self.history.load(&target.identifier);

            let mut pass_keys: HashSet<String> = HashSet::with_capacity(raw_issues.len());
            let mut fresh_count = 0usize;

            for raw_issue in &raw_issues {
                let key = raw_issue.dedup_key();
                if record.is_new(&key) && !pass_keys.contains(&key) {
                    let scored = self.scorer.score(raw_issue, target.category);
                    if scored.score >= self.config.scoring.min_score {
                        new_opportunities.push(scored);
                        fresh_count += 1;
                    }
                }
                pass_keys.insert(key);
            }

            // Previously seen keys are re-committed; the union is a no-op
            // for them.
            self.history
                .commit(&target.identifier, &pass_keys, scanned_at)?;

            log::info!(
                "  📦 {}: {} open issues, {} new opportunities",
                target.identifier,
                raw_issues.len(),
                fresh_count
            );
        }

        IssueScorer::rank(&mut new_opportunities);

        Ok(ScanResult {
            started_at,
            finished_at: Utc::now(),
            repositories_scanned,
            new_opportunities,
            failed_repositories,
        })
    }
}
