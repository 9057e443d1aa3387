use crate::config::constants::MAX_TITLE_DISPLAY_CHARS;
use crate::structs::history_record::HistoryRecord;
use crate::structs::scan_result::ScanResult;

pub struct ScanLogger {}

impl ScanLogger {

    pub fn print_scan_result(result: &ScanResult, limit: usize) {
        println!("\n🎯 TOP CONTRIBUTION OPPORTUNITIES");
        println!("{}", "=".repeat(60));

        if result.new_opportunities.is_empty() {
            println!("📭 No new opportunities this pass.");
        }

        for (index, opportunity) in result.top(limit).iter().enumerate() {
            let issue = &opportunity.issue;
            let title: String = issue.title.chars().take(MAX_TITLE_DISPLAY_CHARS).collect();

            println!(
                "{:>3}. [{:>3}] {} {:<10} {}#{} — {}",
                index + 1,
                opportunity.score,
                opportunity.tier.emoji(),
                opportunity.category.label(),
                issue.repository,
                issue.number,
                title,
            );

            if !issue.labels.is_empty() {
                let mut labels = issue.labels.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
                if issue.labels.len() > 3 {
                    labels.push_str("...");
                }
                println!("       🏷️  {} | 💬 {}", labels, issue.comment_count);
            }
            println!("       🔗 {}", issue.url);
        }

        if !result.failed_repositories.is_empty() {
            println!("\n⚠️ Failed repositories:");
            for failed in &result.failed_repositories {
                println!("   - {} ({})", failed.identifier, failed.error_kind.name());
            }
        }

        println!("{}", "=".repeat(60));
    }

    pub fn print_history(records: &[HistoryRecord]) {
        println!("\n📜 SCAN HISTORY");
        println!("{}", "=".repeat(60));

        if records.is_empty() {
            println!("📭 Nothing scanned yet.");
        }

        for record in records {
            let last_scanned = if record.has_been_scanned() {
                record.last_scanned_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
            } else {
                "never".to_string()
            };

            println!(
                "   {} — {} issues surfaced, last scanned {}",
                record.repository,
                record.seen_issue_keys.len(),
                last_scanned,
            );
        }

        println!("{}", "=".repeat(60));
    }
}
