use std::fs;
use std::path::PathBuf;
use crate::config::constants::MAX_TITLE_DISPLAY_CHARS;
use crate::errors::{RadarError, RadarResult};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::scan_result::ScanResult;
use crate::structs::scan_statistics::ScanStatistics;

/// Renders a scan result into durable artifacts. Idempotent: file names
/// derive from the pass start time, so re-emitting the same result
/// rewrites the same files.
pub struct ReportEmitter {
    config: OutputConfig,
}

impl ReportEmitter {

    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn emit(&self, result: &ScanResult) -> RadarResult<Vec<PathBuf>> {
        let output_dir = PathBuf::from(&self.config.output_dir);
        fs::create_dir_all(&output_dir).map_err(|e| {
            RadarError::report_error(&output_dir.display().to_string(), &e.to_string())
        })?;

        let stamp = result.started_at.format("%Y%m%d_%H%M%S");
        let mut written = Vec::new();

        for format in &self.config.formats {
            match format.as_str() {
                "markdown" => {
                    let path = output_dir.join(format!("issue_radar_{}.md", stamp));
                    fs::write(&path, self.render_markdown(result)).map_err(|e| {
                        RadarError::report_error(&path.display().to_string(), &e.to_string())
                    })?;
                    written.push(path);
                }
                "json" => {
                    let path = output_dir.join(format!("issue_radar_{}.json", stamp));
                    let payload = serde_json::to_string_pretty(result).map_err(|e| {
                        RadarError::report_error(&path.display().to_string(), &e.to_string())
                    })?;
                    fs::write(&path, payload).map_err(|e| {
                        RadarError::report_error(&path.display().to_string(), &e.to_string())
                    })?;
                    written.push(path);
                }
                other => {
                    log::warn!("⚠️ Unknown report format '{}' - skipping", other);
                }
            }
        }

        for path in &written {
            log::info!("📄 Report saved to {}", path.display());
        }

        Ok(written)
    }

    fn render_markdown(&self, result: &ScanResult) -> String {
        let stats = ScanStatistics::from_result(result);

        let mut report = format!(
            "# Issue Radar Report\nGenerated: {}\n\n## Summary\n- New opportunities: {}\n- Critical: {} | High: {} | Medium: {} | Low: {}\n- AI/ML: {} | Security: {} | Compliance: {} | Other: {}\n- Repositories scanned: {} ({} failed)\n",
            result.finished_at.format("%Y-%m-%d %H:%M:%S"),
            stats.total_opportunities,
            stats.critical_count,
            stats.high_count,
            stats.medium_count,
            stats.low_count,
            stats.ai_ml_count,
            stats.security_count,
            stats.compliance_count,
            stats.other_count,
            stats.repositories_scanned,
            stats.failed_count,
        );

        report.push_str(&format!(
            "\n## Top {} Contribution Opportunities\n\n| Score | Tier | Category | Repository | Issue | Labels |\n|-------|------|----------|------------|-------|--------|\n",
            self.config.table_limit.min(result.new_opportunities.len())
        ));

        for opportunity in result.top(self.config.table_limit) {
            let issue = &opportunity.issue;
            let title: String = issue.title.chars().take(MAX_TITLE_DISPLAY_CHARS).collect();
            let labels = issue.labels
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");

            report.push_str(&format!(
                "| {} | {} | {} | {} | [#{}]({}): {} | {} |\n",
                opportunity.score,
                opportunity.tier.name(),
                opportunity.category.label(),
                issue.repository,
                issue.number,
                issue.url,
                title,
                labels,
            ));
        }

        if !result.failed_repositories.is_empty() {
            report.push_str("\n## Failed Repositories\n\n");
            for failed in &result.failed_repositories {
                report.push_str(&format!(
                    "- {} ({})\n",
                    failed.identifier,
                    failed.error_kind.name()
                ));
            }
        }

        report.push_str(
            "\n## Next Steps\n1. Check issue comments for existing work before starting\n2. Comment on the issue to claim it\n3. Submit PRs with tests and documentation\n",
        );

        report
    }
}
