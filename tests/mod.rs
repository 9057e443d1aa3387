use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;
use tokio::sync::watch;

use issueradar_cli::config::config_manager::ConfigManager;
use issueradar_cli::enums::category::Category;
use issueradar_cli::enums::scheduler_state::SchedulerState;
use issueradar_cli::enums::source_error::SourceError;
use issueradar_cli::enums::source_error_kind::SourceErrorKind;
use issueradar_cli::enums::tier::Tier;
use issueradar_cli::errors::RadarError;
use issueradar_cli::services::history_store::HistoryStore;
use issueradar_cli::services::notifier::WebhookNotifier;
use issueradar_cli::services::report_emitter::ReportEmitter;
use issueradar_cli::services::scan_orchestrator::ScanOrchestrator;
use issueradar_cli::services::scheduler::Scheduler;
use issueradar_cli::services::scorer::IssueScorer;
use issueradar_cli::structs::config::config::Config;
use issueradar_cli::structs::config::notification_config::NotificationConfig;
use issueradar_cli::structs::config::scoring_config::ScoringConfig;
use issueradar_cli::structs::config::target_config::RepositoryTarget;
use issueradar_cli::structs::config::webhook_config::WebhookConfig;
use issueradar_cli::structs::raw_issue::RawIssue;
use issueradar_cli::structs::scan_result::ScanResult;
use issueradar_cli::structs::scan_statistics::ScanStatistics;
use issueradar_cli::traits::issue_source::IssueSource;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn timestamp(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(offset_secs)
}

fn issue(repository: &str, number: u64, labels: &[&str], comment_count: u32) -> RawIssue {
    RawIssue {
        repository: repository.to_string(),
        number,
        title: format!("Issue {}", number),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        comment_count,
        created_at: timestamp(number as i64),
        updated_at: timestamp(number as i64),
        url: format!("https://github.com/{}/issues/{}", repository, number),
        author: "octocat".to_string(),
        body: String::new(),
    }
}

struct FakeIssueSource {
    responses: HashMap<String, Result<Vec<RawIssue>, SourceError>>,
    calls: Arc<AtomicUsize>,
}

impl FakeIssueSource {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with(mut self, repository: &str, result: Result<Vec<RawIssue>, SourceError>) -> Self {
        self.responses.insert(repository.to_string(), result);
        self
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl IssueSource for FakeIssueSource {
    async fn fetch_issues(&self, repository: &str, _max_items: u32) -> Result<Vec<RawIssue>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(repository)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

fn test_config(targets: Vec<RepositoryTarget>) -> Config {
    let mut config = Config::default();
    config.targets = targets;
    config.global.parallel_repos = 2;
    config
}

fn orchestrator_for(
    config: Config,
    source: FakeIssueSource,
    state_dir: &TempDir,
) -> ScanOrchestrator {
    let history = HistoryStore::new(state_dir.path().to_path_buf()).expect("state dir");
    ScanOrchestrator::new(Arc::new(config), Arc::new(source), Arc::new(history))
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

mod scorer_tests {
    use super::*;

    #[test]
    fn score_is_deterministic() {
        let scorer = IssueScorer::new(ScoringConfig::default());
        let raw = issue("owasp/wstg", 1, &["help wanted", "bug"], 3);

        let first = scorer.score(&raw, Category::Security);
        let second = scorer.score(&raw, Category::Security);

        assert_eq!(first.score, second.score);
        assert_eq!(first.tier, second.tier);
    }

    #[test]
    fn security_scenario_scores_forty_seven() {
        // (15 + 15 + 5) * 1.2 = 42, +5 for zero comments = 47 -> critical
        let scorer = IssueScorer::new(ScoringConfig::default());
        let raw = issue(
            "owasp/wstg",
            42,
            &["help wanted", "good first issue", "documentation"],
            0,
        );

        let scored = scorer.score(&raw, Category::Security);

        assert_eq!(scored.score, 47);
        assert_eq!(scored.tier, Tier::Critical);
    }

    #[test]
    fn label_matching_is_case_insensitive() {
        let scorer = IssueScorer::new(ScoringConfig::default());
        let raw = issue("pytorch/pytorch", 7, &["Good First Issue", "BUG"], 1);

        let scored = scorer.score(&raw, Category::AiMl);

        assert_eq!(scored.score, 25);
    }

    #[test]
    fn crowded_issues_are_penalized() {
        let scorer = IssueScorer::new(ScoringConfig::default());
        let raw = issue("pytorch/pytorch", 9, &["help wanted", "good first issue"], 25);

        let scored = scorer.score(&raw, Category::AiMl);

        assert_eq!(scored.score, 25);
        assert_eq!(scored.tier, Tier::Medium);
    }

    #[test]
    fn score_clamps_at_zero() {
        let scorer = IssueScorer::new(ScoringConfig::default());
        let raw = issue("pytorch/pytorch", 11, &["unlabeled-noise"], 30);

        let scored = scorer.score(&raw, Category::AiMl);

        assert_eq!(scored.score, 0);
        assert_eq!(scored.tier, Tier::Low);
    }

    #[test]
    fn tier_bands_are_stable() {
        assert_eq!(Tier::from_score(47), Tier::Critical);
        assert_eq!(Tier::from_score(40), Tier::Critical);
        assert_eq!(Tier::from_score(39), Tier::High);
        assert_eq!(Tier::from_score(30), Tier::High);
        assert_eq!(Tier::from_score(29), Tier::Medium);
        assert_eq!(Tier::from_score(25), Tier::Medium);
        assert_eq!(Tier::from_score(24), Tier::Low);
        assert_eq!(Tier::from_score(0), Tier::Low);
    }

    #[test]
    fn rank_orders_by_score_then_created_at() {
        let scorer = IssueScorer::new(ScoringConfig::default());

        // 40: good first issue + help wanted + bug, ai_ml, some comments
        let forty = scorer.score(
            &issue("a/a", 5, &["good first issue", "help wanted", "bug"], 3),
            Category::AiMl,
        );
        assert_eq!(forty.score, 40);

        // 30: good first issue + help wanted, ai_ml, some comments
        let older_thirty = scorer.score(&issue("a/a", 1, &["good first issue", "help wanted"], 3), Category::AiMl);
        let newer_thirty = scorer.score(&issue("a/a", 8, &["good first issue", "help wanted"], 3), Category::AiMl);
        assert_eq!(older_thirty.score, 30);

        let mut opportunities = vec![newer_thirty.clone(), forty.clone(), older_thirty.clone()];
        IssueScorer::rank(&mut opportunities);

        assert_eq!(opportunities[0].issue.number, forty.issue.number);
        assert_eq!(opportunities[1].issue.number, older_thirty.issue.number);
        assert_eq!(opportunities[2].issue.number, newer_thirty.issue.number);
    }

    proptest! {
        #[test]
        fn scoring_never_panics_and_is_stable(
            labels in proptest::collection::vec("[a-zA-Z ]{0,16}", 0..6),
            comment_count in 0u32..200,
        ) {
            let scorer = IssueScorer::new(ScoringConfig::default());
            let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let raw = issue("prop/prop", 1, &label_refs, comment_count);

            let first = scorer.score(&raw, Category::Security);
            let second = scorer.score(&raw, Category::Security);

            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(first.tier, Tier::from_score(first.score));
        }
    }
}

// ---------------------------------------------------------------------------
// History store
// ---------------------------------------------------------------------------

mod history_store_tests {
    use super::*;

    #[test]
    fn missing_record_means_never_scanned() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        let record = store.load("owner/repo");

        assert_eq!(record.repository, "owner/repo");
        assert!(record.seen_issue_keys.is_empty());
        assert!(!record.has_been_scanned());
        assert!(record.is_new("owner/repo#1"));
    }

    #[test]
    fn commit_then_load_round_trips() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        let keys: HashSet<String> = ["owner/repo#1", "owner/repo#2"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        store.commit("owner/repo", &keys, timestamp(100)).expect("commit");

        let record = store.load("owner/repo");
        assert_eq!(record.seen_issue_keys.len(), 2);
        assert!(!record.is_new("owner/repo#1"));
        assert!(record.is_new("owner/repo#3"));
        assert_eq!(record.last_scanned_at, timestamp(100));
    }

    #[test]
    fn seen_keys_never_regress() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        let first: HashSet<String> = ["a/b#1", "a/b#2"].iter().map(|k| k.to_string()).collect();
        let second: HashSet<String> = ["a/b#2"].iter().map(|k| k.to_string()).collect();

        store.commit("a/b", &first, timestamp(10)).expect("commit");
        store.commit("a/b", &second, timestamp(20)).expect("commit");

        let record = store.load("a/b");
        assert_eq!(record.seen_issue_keys.len(), 2);
        assert!(!record.is_new("a/b#1"));
    }

    #[test]
    fn last_scanned_at_only_advances() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        let keys: HashSet<String> = ["a/b#1"].iter().map(|k| k.to_string()).collect();
        store.commit("a/b", &keys, timestamp(200)).expect("commit");
        store.commit("a/b", &keys, timestamp(50)).expect("commit");

        assert_eq!(store.load("a/b").last_scanned_at, timestamp(200));
    }

    #[test]
    fn corrupt_record_is_treated_as_never_scanned() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        std::fs::write(dir.path().join("a__b.json"), "{not json").expect("write garbage");

        let record = store.load("a/b");
        assert!(record.seen_issue_keys.is_empty());
        assert!(!record.has_been_scanned());

        // And a commit heals it
        let keys: HashSet<String> = ["a/b#1"].iter().map(|k| k.to_string()).collect();
        store.commit("a/b", &keys, timestamp(5)).expect("commit");
        assert!(!store.load("a/b").is_new("a/b#1"));
    }

    #[test]
    fn commit_survives_stale_tmp_garbage() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        std::fs::write(dir.path().join("a__b.json.tmp"), "leftover from a crash")
            .expect("write garbage");

        let keys: HashSet<String> = ["a/b#1"].iter().map(|k| k.to_string()).collect();
        store.commit("a/b", &keys, timestamp(5)).expect("commit");

        assert!(!store.load("a/b").is_new("a/b#1"));
    }

    #[test]
    fn state_dir_collision_is_a_fatal_store_error() {
        let dir = TempDir::new().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file in the way").expect("write blocker");

        let error = HistoryStore::new(blocker).expect_err("must fail");

        assert!(!error.is_recoverable());
        assert!(matches!(error, RadarError::HistoryStoreError { .. }));
    }

    #[test]
    fn all_records_lists_committed_repositories() {
        let dir = TempDir::new().expect("tempdir");
        let store = HistoryStore::new(dir.path().to_path_buf()).expect("store");

        let keys: HashSet<String> = ["x/y#1"].iter().map(|k| k.to_string()).collect();
        store.commit("x/y", &keys, timestamp(1)).expect("commit");
        store.commit("a/b", &keys, timestamp(2)).expect("commit");

        let records = store.all_records().expect("list");
        let names: Vec<&str> = records.iter().map(|r| r.repository.as_str()).collect();
        assert_eq!(names, vec!["a/b", "x/y"]);
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

mod orchestrator_tests {
    use super::*;

    #[tokio::test]
    async fn second_identical_pass_surfaces_nothing() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new().with(
            "owasp/wstg",
            Ok(vec![issue(
                "owasp/wstg",
                1,
                &["help wanted", "good first issue", "documentation"],
                0,
            )]),
        );
        let config = test_config(vec![RepositoryTarget::new("owasp/wstg", Category::Security)]);
        let orchestrator = orchestrator_for(config, source, &state);

        let first = orchestrator.run_pass(None).await.expect("first pass");
        assert_eq!(first.new_opportunities.len(), 1);
        assert_eq!(first.new_opportunities[0].score, 47);
        assert_eq!(first.new_opportunities[0].tier, Tier::Critical);

        let second = orchestrator.run_pass(None).await.expect("second pass");
        assert!(second.new_opportunities.is_empty());
        assert!(second.failed_repositories.is_empty());
    }

    #[tokio::test]
    async fn failed_repository_is_isolated() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new()
            .with("a/fails", Err(SourceError::RateLimited("HTTP 403".to_string())))
            .with("b/works", Ok(vec![issue("b/works", 3, &["bug"], 0)]));
        let config = test_config(vec![
            RepositoryTarget::new("a/fails", Category::AiMl),
            RepositoryTarget::new("b/works", Category::AiMl),
        ]);

        let history = HistoryStore::new(state.path().to_path_buf()).expect("store");
        let history = Arc::new(history);
        let orchestrator =
            ScanOrchestrator::new(Arc::new(config), Arc::new(source), Arc::clone(&history));

        let result = orchestrator.run_pass(None).await.expect("pass");

        assert_eq!(result.failed_repositories.len(), 1);
        assert_eq!(result.failed_repositories[0].identifier, "a/fails");
        assert_eq!(result.failed_repositories[0].error_kind, SourceErrorKind::RateLimited);

        assert_eq!(result.new_opportunities.len(), 1);
        assert_eq!(result.new_opportunities[0].issue.repository, "b/works");
        assert_eq!(result.repositories_scanned, 1);

        // The failing repository's record is untouched
        let record = history.load("a/fails");
        assert!(record.seen_issue_keys.is_empty());
        assert!(!record.has_been_scanned());
    }

    #[tokio::test]
    async fn opportunities_are_ranked_across_repositories() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new()
            .with(
                "a/a",
                Ok(vec![issue("a/a", 1, &["good first issue", "help wanted"], 3)]),
            )
            .with(
                "b/b",
                Ok(vec![
                    issue("b/b", 9, &["good first issue", "help wanted", "bug"], 3),
                    issue("b/b", 5, &["good first issue", "help wanted"], 3),
                ]),
            );
        let config = test_config(vec![
            RepositoryTarget::new("a/a", Category::AiMl),
            RepositoryTarget::new("b/b", Category::AiMl),
        ]);
        let orchestrator = orchestrator_for(config, source, &state);

        let result = orchestrator.run_pass(None).await.expect("pass");
        let ranked: Vec<(u32, u64)> = result
            .new_opportunities
            .iter()
            .map(|o| (o.score, o.issue.number))
            .collect();

        // 40 first; the two 30s ordered by earliest created_at (number 1 before 5)
        assert_eq!(ranked, vec![(40, 9), (30, 1), (30, 5)]);
    }

    #[tokio::test]
    async fn duplicate_issue_numbers_within_one_fetch_are_collapsed() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new().with(
            "a/a",
            Ok(vec![
                issue("a/a", 1, &["bug"], 0),
                issue("a/a", 1, &["bug"], 0),
            ]),
        );
        let config = test_config(vec![RepositoryTarget::new("a/a", Category::Other)]);
        let orchestrator = orchestrator_for(config, source, &state);

        let result = orchestrator.run_pass(None).await.expect("pass");
        assert_eq!(result.new_opportunities.len(), 1);
    }

    #[tokio::test]
    async fn low_scoring_issues_are_remembered_but_not_surfaced() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new().with(
            "a/a",
            Ok(vec![issue("a/a", 4, &["documentation"], 5)]), // score 5
        );
        let mut config = test_config(vec![RepositoryTarget::new("a/a", Category::Other)]);
        config.scoring.min_score = 20;

        let history = Arc::new(HistoryStore::new(state.path().to_path_buf()).expect("store"));
        let orchestrator =
            ScanOrchestrator::new(Arc::new(config), Arc::new(source), Arc::clone(&history));

        let result = orchestrator.run_pass(None).await.expect("pass");
        assert!(result.new_opportunities.is_empty());

        // Committed all the same: precision over recall
        assert!(!history.load("a/a").is_new("a/a#4"));
    }

    #[tokio::test]
    async fn disabled_and_filtered_targets_are_skipped() {
        let state = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new()
            .with("on/security", Ok(vec![issue("on/security", 1, &["bug"], 0)]))
            .with("on/aiml", Ok(vec![issue("on/aiml", 2, &["bug"], 0)]))
            .with("off/repo", Ok(vec![issue("off/repo", 3, &["bug"], 0)]));
        let calls = source.call_counter();

        let mut disabled = RepositoryTarget::new("off/repo", Category::Security);
        disabled.enabled = false;

        let config = test_config(vec![
            RepositoryTarget::new("on/security", Category::Security),
            RepositoryTarget::new("on/aiml", Category::AiMl),
            disabled,
        ]);
        let orchestrator = orchestrator_for(config, source, &state);

        let result = orchestrator
            .run_pass(Some(&[Category::Security]))
            .await
            .expect("pass");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.new_opportunities.len(), 1);
        assert_eq!(result.new_opportunities[0].issue.repository, "on/security");
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

mod scheduler_tests {
    use super::*;

    fn scheduler_for(
        source: FakeIssueSource,
        state: &TempDir,
        output: &TempDir,
        interval: Duration,
        max_passes: Option<u64>,
        max_duration: Option<Duration>,
    ) -> Scheduler {
        let mut config = test_config(vec![RepositoryTarget::new("a/a", Category::Other)]);
        config.output.output_dir = output.path().display().to_string();
        config.output.formats = vec!["markdown".to_string()];

        let config = Arc::new(config);
        let history = Arc::new(HistoryStore::new(state.path().to_path_buf()).expect("store"));
        let orchestrator = ScanOrchestrator::new(Arc::clone(&config), Arc::new(source), history);
        let emitter = ReportEmitter::new(config.output.clone());

        Scheduler::new(orchestrator, emitter, None, interval, max_passes, max_duration, 30)
    }

    #[tokio::test]
    async fn single_pass_emits_and_stops() {
        let state = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");
        let source =
            FakeIssueSource::new().with("a/a", Ok(vec![issue("a/a", 1, &["bug"], 0)]));
        let calls = source.call_counter();

        let mut scheduler = scheduler_for(source, &state, &output, Duration::from_secs(3600), None, None);
        assert_eq!(scheduler.state(), SchedulerState::Idle);

        let result = scheduler.run_once(None).await.expect("pass");

        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.new_opportunities.len(), 1);

        let reports = std::fs::read_dir(output.path()).expect("read dir").count();
        assert_eq!(reports, 1);
    }

    #[tokio::test]
    async fn continuous_mode_honors_pass_count() {
        let state = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");
        let source =
            FakeIssueSource::new().with("a/a", Ok(vec![issue("a/a", 1, &["bug"], 0)]));
        let calls = source.call_counter();

        let mut scheduler =
            scheduler_for(source, &state, &output, Duration::from_millis(20), Some(3), None);
        let (_cancel_tx, cancel_rx) = watch::channel(false);

        tokio::time::timeout(Duration::from_secs(10), scheduler.run_continuous(None, cancel_rx))
            .await
            .expect("no hang")
            .expect("run");

        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn cancellation_lands_at_the_interval_boundary() {
        let state = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");
        let source =
            FakeIssueSource::new().with("a/a", Ok(vec![issue("a/a", 1, &["bug"], 0)]));
        let calls = source.call_counter();

        // An hour-long interval: without cancellation this would hang.
        let mut scheduler =
            scheduler_for(source, &state, &output, Duration::from_secs(3600), None, None);
        let (cancel_tx, cancel_rx) = watch::channel(false);
        cancel_tx.send(true).expect("send cancel");

        tokio::time::timeout(Duration::from_secs(10), scheduler.run_continuous(None, cancel_rx))
            .await
            .expect("no hang")
            .expect("run");

        // The in-flight pass finished, no second pass started.
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duration_cap_stops_the_loop() {
        let state = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");
        let source = FakeIssueSource::new();
        let calls = source.call_counter();

        let mut scheduler = scheduler_for(
            source,
            &state,
            &output,
            Duration::from_millis(10),
            None,
            Some(Duration::from_millis(0)),
        );
        let (_cancel_tx, cancel_rx) = watch::channel(false);

        tokio::time::timeout(Duration::from_secs(10), scheduler.run_continuous(None, cancel_rx))
            .await
            .expect("no hang")
            .expect("run");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

// ---------------------------------------------------------------------------
// Report emitter
// ---------------------------------------------------------------------------

mod report_emitter_tests {
    use super::*;
    use issueradar_cli::structs::config::output_config::OutputConfig;
    use issueradar_cli::structs::failed_repository::FailedRepository;

    fn sample_result() -> ScanResult {
        let scorer = IssueScorer::new(ScoringConfig::default());
        let scored = scorer.score(
            &issue("owasp/wstg", 12, &["help wanted", "documentation"], 0),
            Category::Security,
        );

        ScanResult {
            started_at: timestamp(0),
            finished_at: timestamp(30),
            repositories_scanned: 1,
            new_opportunities: vec![scored],
            failed_repositories: vec![FailedRepository {
                identifier: "gone/repo".to_string(),
                error_kind: SourceErrorKind::NotFound,
            }],
        }
    }

    #[test]
    fn emits_markdown_and_json_artifacts() {
        let output = TempDir::new().expect("tempdir");
        let emitter = ReportEmitter::new(OutputConfig {
            output_dir: output.path().display().to_string(),
            formats: vec!["markdown".to_string(), "json".to_string()],
            table_limit: 30,
        });

        let written = emitter.emit(&sample_result()).expect("emit");
        assert_eq!(written.len(), 2);

        let markdown_path = written.iter().find(|p| p.extension().unwrap() == "md").expect("md");
        let markdown = std::fs::read_to_string(markdown_path).expect("read md");
        assert!(markdown.contains("owasp/wstg"));
        assert!(markdown.contains("NotFound"));

        let json_path = written.iter().find(|p| p.extension().unwrap() == "json").expect("json");
        let json = std::fs::read_to_string(json_path).expect("read json");
        let parsed: ScanResult = serde_json::from_str(&json).expect("parse back");
        assert_eq!(parsed.new_opportunities.len(), 1);
        assert_eq!(parsed.failed_repositories.len(), 1);
    }

    #[test]
    fn re_emitting_the_same_result_is_idempotent() {
        let output = TempDir::new().expect("tempdir");
        let emitter = ReportEmitter::new(OutputConfig {
            output_dir: output.path().display().to_string(),
            formats: vec!["markdown".to_string()],
            table_limit: 30,
        });

        let result = sample_result();
        let first = emitter.emit(&result).expect("emit");
        let second = emitter.emit(&result).expect("emit again");

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(output.path()).expect("read dir").count(), 1);
    }

    #[test]
    fn statistics_count_tiers_and_categories() {
        let stats = ScanStatistics::from_result(&sample_result());

        // (15 + 5) * 1.2 = 24, +5 for zero comments = 29 -> medium
        assert_eq!(stats.total_opportunities, 1);
        assert_eq!(stats.critical_count, 0);
        assert_eq!(stats.high_count, 0);
        assert_eq!(stats.medium_count, 1);
        assert_eq!(stats.security_count, 1);
        assert_eq!(stats.failed_count, 1);
        assert_eq!(stats.repositories_scanned, 1);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

mod config_tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let config = test_config(vec![
            RepositoryTarget::new("a/a", Category::Other),
            RepositoryTarget::new("a/a", Category::Security),
        ]);

        let error = ConfigManager::validate_config(&config).expect_err("must fail");
        assert!(matches!(error, RadarError::MultipleErrors { .. }));
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        for bad in ["no-slash", "/leading", "trailing/", "a/b/c"] {
            let config = test_config(vec![RepositoryTarget::new(bad, Category::Other)]);
            assert!(
                ConfigManager::validate_config(&config).is_err(),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn zero_interval_and_bad_formats_are_rejected() {
        let mut config = test_config(vec![RepositoryTarget::new("a/a", Category::Other)]);
        config.global.scan_interval_hours = 0;
        config.output.formats = vec!["xml".to_string()];

        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn enabled_notifications_require_a_webhook() {
        let mut config = test_config(vec![RepositoryTarget::new("a/a", Category::Other)]);
        config.notifications.enabled = true;
        config.notifications.webhook = None;

        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn catalog_parses_from_toml() {
        let raw = r#"
[global]
scan_interval_hours = 2

[[targets]]
identifier = "OWASP/wstg"
category = "security"

[[targets]]
identifier = "pytorch/pytorch"
category = "ai_ml"
enabled = false

[scoring.label_weights]
"help wanted" = 15

[scoring.category_multipliers]
security = 1.2
"#;

        let config: Config = toml::from_str(raw).expect("parse");

        assert_eq!(config.global.scan_interval_hours, 2);
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].category, Category::Security);
        assert!(config.targets[0].enabled);
        assert!(!config.targets[1].enabled);
        assert_eq!(config.scoring.multiplier_for(Category::Security), 1.2);
        // Unlisted categories fall back to a neutral multiplier
        assert_eq!(config.scoring.multiplier_for(Category::Compliance), 1.0);
    }

    #[test]
    fn notifier_is_built_only_when_fully_configured() {
        let disabled = NotificationConfig::default();
        assert!(WebhookNotifier::from_config(&disabled).expect("build").is_none());

        let mut enabled_without_webhook = NotificationConfig::default();
        enabled_without_webhook.enabled = true;
        assert!(WebhookNotifier::from_config(&enabled_without_webhook)
            .expect("build")
            .is_none());

        let mut enabled = NotificationConfig::default();
        enabled.enabled = true;
        enabled.top_n = 5;
        enabled.webhook = Some(WebhookConfig {
            url: "https://example.com/hook".to_string(),
            method: "POST".to_string(),
            headers: HashMap::new(),
        });
        assert!(WebhookNotifier::from_config(&enabled).expect("build").is_some());
    }
}

// ---------------------------------------------------------------------------
// GitHub wire conversion
// ---------------------------------------------------------------------------

mod github_tests {
    use super::*;
    use issueradar_cli::structs::github::github_issue::GithubIssue;

    fn wire_issue(number: u64, pull_request: bool) -> GithubIssue {
        let mut value = serde_json::json!({
            "number": number,
            "title": "Fix the widget",
            "html_url": format!("https://github.com/a/b/issues/{}", number),
            "labels": [{"name": "bug"}, {"name": "help wanted"}],
            "comments": 2,
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-02T00:00:00Z",
            "user": {"login": "octocat"},
            "body": "b".repeat(600),
        });
        if pull_request {
            value["pull_request"] = serde_json::json!({"url": "https://example.com"});
        }
        serde_json::from_value(value).expect("wire shape")
    }

    #[test]
    fn pull_requests_are_detected() {
        assert!(wire_issue(1, true).is_pull_request());
        assert!(!wire_issue(2, false).is_pull_request());
    }

    #[test]
    fn conversion_truncates_body_and_maps_fields() {
        let raw = wire_issue(7, false).into_raw_issue("a/b");

        assert_eq!(raw.repository, "a/b");
        assert_eq!(raw.number, 7);
        assert_eq!(raw.dedup_key(), "a/b#7");
        assert_eq!(raw.labels, vec!["bug".to_string(), "help wanted".to_string()]);
        assert_eq!(raw.comment_count, 2);
        assert_eq!(raw.author, "octocat");
        assert_eq!(raw.body.chars().count(), 500);
    }
}
