use std::collections::HashMap;
use crate::enums::category::Category;
use crate::enums::tier::Tier;
use crate::structs::config::scoring_config::ScoringConfig;
use crate::structs::raw_issue::RawIssue;
use crate::structs::scored_issue::ScoredIssue;

/// Pure scoring: label weights, category multiplier, engagement
/// adjustment, clamped to a non-negative integer. No I/O, no hidden state.
pub struct IssueScorer {
    config: ScoringConfig,
    label_weights: HashMap<String, i64>,
}

impl IssueScorer {

    pub fn new(config: ScoringConfig) -> Self {
        // Label matching is case-insensitive; normalize the table once.
        let label_weights = config
            .label_weights
            .iter()
            .map(|(label, weight)| (label.to_lowercase(), *weight))
            .collect();

        Self {
            config,
            label_weights,
        }
    }

    pub fn score(&self, issue: &RawIssue, category: Category) -> ScoredIssue {
        let label_sum: i64 = issue
            .labels
            .iter()
            .map(|label| {
                self.label_weights
                    .get(&label.to_lowercase())
                    .copied()
                    .unwrap_or(0)
            })
            .sum();

        let mut total = (label_sum as f64 * self.config.multiplier_for(category)).round() as i64;

        if issue.comment_count == 0 {
            total += self.config.no_comment_bonus;
        } else if issue.comment_count > self.config.crowded_comment_threshold {
            total -= self.config.crowded_penalty;
        }

        let score = total.max(0) as u32;

        ScoredIssue {
            issue: issue.clone(),
            score,
            tier: Tier::from_score(score),
            category,
        }
    }

    /// Ordering rule for scan results: descending score, ties broken by
    /// earliest created_at. Never rely on arrival order from the source.
    pub fn rank(opportunities: &mut [ScoredIssue]) {
        opportunities.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.issue.created_at.cmp(&b.issue.created_at))
        });
    }
}
