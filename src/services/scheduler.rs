use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};
use crate::enums::category::Category;
use crate::enums::scheduler_state::SchedulerState;
use crate::errors::RadarResult;
use crate::logger::scan_logger::ScanLogger;
use crate::logger::wait_logger::WaitLogger;
use crate::services::notifier::WebhookNotifier;
use crate::services::report_emitter::ReportEmitter;
use crate::services::scan_orchestrator::ScanOrchestrator;
use crate::structs::scan_result::ScanResult;
use crate::structs::scan_statistics::ScanStatistics;

/// Runs the orchestrator once or on a fixed cadence. The next pass starts
/// at `last_pass_start + interval`, so an overrunning pass does not push
/// the schedule, and passes never overlap. Cancellation lands at the next
/// interval boundary: an in-flight pass always finishes and commits.
pub struct Scheduler {
    orchestrator: ScanOrchestrator,
    emitter: ReportEmitter,
    notifier: Option<WebhookNotifier>,
    interval: Duration,
    max_passes: Option<u64>,
    max_duration: Option<Duration>,
    table_limit: usize,
    state: SchedulerState,
}

impl Scheduler {

    pub fn new(
        orchestrator: ScanOrchestrator,
        emitter: ReportEmitter,
        notifier: Option<WebhookNotifier>,
        interval: Duration,
        max_passes: Option<u64>,
        max_duration: Option<Duration>,
        table_limit: usize,
    ) -> Self {
        Self {
            orchestrator,
            emitter,
            notifier,
            interval,
            max_passes,
            max_duration,
            table_limit,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub async fn run_once(&mut self, categories: Option<&[Category]>) -> RadarResult<ScanResult> {
        self.state = SchedulerState::Running;

        match self.orchestrator.run_pass(categories).await {
            Ok(result) => {
                self.dispatch(&result).await;
                self.state = SchedulerState::Stopped;
                Ok(result)
            }
            Err(error) => {
                self.state = SchedulerState::Stopped;
                Err(error)
            }
        }
    }

    pub async fn run_continuous(
        &mut self,
        categories: Option<&[Category]>,
        mut cancel: watch::Receiver<bool>,
    ) -> RadarResult<()> {
        let run_started = Instant::now();
        let mut pass_count = 0u64;

        loop {
            let pass_started = Instant::now();
            self.state = SchedulerState::Running;
            pass_count += 1;

            log::info!("\n🔄 ===== Pass #{} =====", pass_count);

            match self.orchestrator.run_pass(categories).await {
                Ok(result) => self.dispatch(&result).await,
                Err(error) => {
                    // Systemic failure (history store, config) is fatal to
                    // continuous mode.
                    self.state = SchedulerState::Stopped;
                    return Err(error);
                }
            }

            if let Some(max_passes) = self.max_passes {
                if pass_count >= max_passes {
                    log::info!("🏁 Reached configured pass count ({})", max_passes);
                    break;
                }
            }

            if let Some(max_duration) = self.max_duration {
                if run_started.elapsed() >= max_duration {
                    log::info!("🏁 Reached configured duration cap");
                    break;
                }
            }

            if *cancel.borrow() {
                log::info!("🛑 Cancellation requested - stopping");
                break;
            }

            self.state = SchedulerState::Idle;
            let next_start = pass_started + self.interval;

            let mut wait_logger = WaitLogger::new(format!(
                "Waiting {}s until next pass",
                self.interval.as_secs().saturating_sub(pass_started.elapsed().as_secs())
            ));
            wait_logger.start();

            let cancelled = tokio::select! {
                _ = sleep_until(next_start) => false,
                changed = cancel.changed() => changed.is_err() || *cancel.borrow(),
            };

            if cancelled {
                wait_logger.stop("Cancellation requested - stopping before next pass").await;
                break;
            }

            wait_logger.stop("Starting next pass").await;
        }

        self.state = SchedulerState::Stopped;
        Ok(())
    }

    async fn dispatch(&self, result: &ScanResult) {
        ScanLogger::print_scan_result(result, self.table_limit);
        ScanStatistics::from_result(result).print_summary();

        // Report emission is best-effort: history is already committed and
        // re-emitting from the same result is safe.
        if let Err(error) = self.emitter.emit(result) {
            log::error!("❌ Failed to emit report: {}", error);
        }

        if let Some(notifier) = &self.notifier {
            if let Err(error) = notifier.notify(result).await {
                log::error!("❌ Failed to send notification: {}", error);
            }
        }
    }
}
