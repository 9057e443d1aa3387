use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{duration_cap, interval_duration};
use crate::enums::category::Category;
use crate::enums::commands::Commands;
use crate::errors::{RadarError, RadarResult};
use crate::logger::scan_logger::ScanLogger;
use crate::services::github::GithubIssueSource;
use crate::services::history_store::HistoryStore;
use crate::services::notifier::WebhookNotifier;
use crate::services::report_emitter::ReportEmitter;
use crate::services::scan_orchestrator::ScanOrchestrator;
use crate::services::scheduler::Scheduler;
use crate::structs::config::config::Config;
use crate::traits::issue_source::IssueSource;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> RadarResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Scan { category, continuous, interval_hours, max_passes, duration_mins } => {
                self.scan_command(category, continuous, interval_hours, max_passes, duration_mins).await
            }
            Commands::List => self.list_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::History { repository } => self.history_command(repository).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> RadarResult<()> {
        log::info!("🚀 Initializing issueradar configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to adjust the target catalog.");
                log::info!("🔧 Run 'issueradar validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn scan_command(
        &self,
        category: Option<String>,
        continuous: bool,
        interval_hours: Option<u64>,
        max_passes: Option<u64>,
        duration_mins: Option<u64>,
    ) -> RadarResult<()> {
        log::info!("🔍 Starting issue scan...");

        let config = match ConfigManager::load() {
            Ok(config) => Arc::new(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'issueradar init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;

        if config.targets.is_empty() {
            log::info!("⚠️ No targets configured.");
            log::info!("💡 Run 'issueradar init' and add repositories to the catalog.");
            return Ok(());
        }

        let categories = Self::parse_categories(category.as_deref())?;

        let mut scheduler = Self::build_scheduler(
            Arc::clone(&config),
            interval_hours,
            max_passes,
            duration_mins,
        )?;

        if continuous {
            log::info!("♾️  Continuous mode - press Ctrl+C to stop at the next interval boundary");

            let (cancel_tx, cancel_rx) = watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::info!("\n🛑 Cancellation requested - the in-flight pass will finish first");
                    let _ = cancel_tx.send(true);
                }
            });

            scheduler.run_continuous(categories.as_deref(), cancel_rx).await?;
        } else {
            scheduler.run_once(categories.as_deref()).await?;
        }

        Ok(())
    }

    fn build_scheduler(
        config: Arc<Config>,
        interval_hours: Option<u64>,
        max_passes: Option<u64>,
        duration_mins: Option<u64>,
    ) -> RadarResult<Scheduler> {
        let source: Arc<dyn IssueSource> = Arc::new(GithubIssueSource::new(&config.source)?);
        let history = Arc::new(HistoryStore::new(Self::state_dir(&config))?);
        let orchestrator = ScanOrchestrator::new(Arc::clone(&config), source, history);
        let emitter = ReportEmitter::new(config.output.clone());
        let notifier = WebhookNotifier::from_config(&config.notifications)?;

        let interval = interval_duration(interval_hours.unwrap_or(config.global.scan_interval_hours));

        Ok(Scheduler::new(
            orchestrator,
            emitter,
            notifier,
            interval,
            max_passes,
            duration_mins.map(duration_cap),
            config.output.table_limit,
        ))
    }

    fn state_dir(config: &Config) -> PathBuf {
        config
            .global
            .state_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(HistoryStore::default_state_dir)
    }

    fn parse_categories(raw: Option<&str>) -> RadarResult<Option<Vec<Category>>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let mut categories = Vec::new();
        for part in raw.split(',') {
            match Category::parse(part) {
                Some(category) => categories.push(category),
                None => {
                    return Err(RadarError::validation_error(
                        "category",
                        part.trim(),
                        "must be one of: ai_ml, security, compliance, other",
                        None,
                    ))
                }
            }
        }

        Ok(Some(categories))
    }

    async fn list_command(&self) -> RadarResult<()> {
        log::info!("📋 Loading target catalog...");

        let config = ConfigManager::load()?;

        log::info!("\n📋 Configured Targets:");
        log::info!("{}", "=".repeat(50));

        if config.targets.is_empty() {
            log::info!("⚠️ No targets configured.");
            log::info!("💡 Run 'issueradar init' to create a configuration file.");
            return Ok(());
        }

        for (i, target) in config.targets.iter().enumerate() {
            let status = if target.enabled { "✅" } else { "⏸️" };
            log::info!("{}. {} {}", i + 1, status, target.identifier);
            log::info!("   🗂️ Category: {}", target.category.label());
            if !target.tags.is_empty() {
                log::info!("   🏷️ Tags: {}", target.tags.join(", "));
            }
        }

        log::info!("\n📊 Total targets: {}", config.targets.len());
        Ok(())
    }

    async fn validate_command(&self) -> RadarResult<()> {
        log::info!("🔍 Validating issueradar configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'issueradar init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;
        log::info!("✅ Configuration is valid");
        log::info!("📊 Found {} configured targets", config.targets.len());

        self.perform_extended_validation(&config).await?;

        Ok(())
    }

    async fn perform_extended_validation(&self, config: &Config) -> RadarResult<()> {
        log::info!("\n🔍 Performing extended validation...");

        let mut warnings = Vec::new();

        if std::env::var(&config.source.token_env).ok().filter(|t| !t.is_empty()).is_none() {
            warnings.push(format!(
                "{} is not set - scans will run unauthenticated and hit rate limits sooner",
                config.source.token_env
            ));
        }

        let disabled = config.targets.iter().filter(|t| !t.enabled).count();
        if disabled > 0 {
            warnings.push(format!("{} targets are disabled and will be skipped", disabled));
        }

        if config.notifications.enabled && config.notifications.top_n == 0 {
            warnings.push("notifications.top_n is 0 - notifications will always be empty".to_string());
        }

        if warnings.is_empty() {
            log::info!("✅ Extended validation passed - no issues found");
        } else {
            log::info!("⚠️ Warnings:");
            for warning in &warnings {
                log::info!("   - {}", warning);
            }
        }

        Ok(())
    }

    async fn history_command(&self, repository: Option<String>) -> RadarResult<()> {
        log::info!("📜 Loading scan history...");

        let config = ConfigManager::load()?;
        let history = HistoryStore::new(Self::state_dir(&config))?;

        let mut records = history.all_records()?;

        if let Some(repository) = repository {
            records.retain(|record| record.repository == repository);
            if records.is_empty() {
                log::info!("📭 No history for {} - it has never been scanned.", repository);
                return Ok(());
            }
        }

        ScanLogger::print_history(&records);
        Ok(())
    }
}
