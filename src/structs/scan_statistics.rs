use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::enums::tier::Tier;
use crate::structs::scan_result::ScanResult;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanStatistics {
    pub total_opportunities: usize,

    // By tier
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,

    // By category
    pub ai_ml_count: usize,
    pub security_count: usize,
    pub compliance_count: usize,
    pub other_count: usize,

    pub repositories_scanned: usize,
    pub failed_count: usize,
}

impl ScanStatistics {
    pub fn from_result(result: &ScanResult) -> Self {
        let mut stats = Self {
            total_opportunities: result.new_opportunities.len(),
            repositories_scanned: result.repositories_scanned,
            failed_count: result.failed_repositories.len(),
            ..Self::default()
        };

        for opportunity in &result.new_opportunities {
            match opportunity.tier {
                Tier::Critical => stats.critical_count += 1,
                Tier::High => stats.high_count += 1,
                Tier::Medium => stats.medium_count += 1,
                Tier::Low => stats.low_count += 1,
            }
            match opportunity.category {
                Category::AiMl => stats.ai_ml_count += 1,
                Category::Security => stats.security_count += 1,
                Category::Compliance => stats.compliance_count += 1,
                Category::Other => stats.other_count += 1,
            }
        }

        stats
    }

    pub fn high_priority_count(&self) -> usize {
        self.critical_count + self.high_count
    }

    pub fn print_summary(&self) {
        log::info!("\n📊 Pass summary:");
        log::info!("   🎯 New opportunities: {}", self.total_opportunities);
        log::info!(
            "   🔴 {} critical | 🟠 {} high | 🟡 {} medium | 🟢 {} low",
            self.critical_count,
            self.high_count,
            self.medium_count,
            self.low_count
        );
        log::info!(
            "   🧠 {} AI/ML | 🛡️ {} security | 📋 {} compliance | 📦 {} other",
            self.ai_ml_count,
            self.security_count,
            self.compliance_count,
            self.other_count
        );
        log::info!(
            "   📡 {} repositories scanned, {} failed",
            self.repositories_scanned,
            self.failed_count
        );
    }
}
