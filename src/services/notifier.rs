use std::time::Duration;
use reqwest::Client;
use crate::errors::{RadarError, RadarResult};
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::scan_result::ScanResult;

/// Best-effort webhook delivery of the top opportunities. Failures are
/// logged by the scheduler; they never roll back a scan.
pub struct WebhookNotifier {
    client: Client,
    webhook: WebhookConfig,
    top_n: usize,
}

impl WebhookNotifier {

    pub fn from_config(config: &NotificationConfig) -> RadarResult<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }

        let Some(webhook) = config.webhook.clone() else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Some(Self {
            client,
            webhook,
            top_n: config.top_n,
        }))
    }

    pub async fn notify(&self, result: &ScanResult) -> RadarResult<()> {
        let top = result.top(self.top_n);
        if top.is_empty() {
            log::info!("📭 No new opportunities - skipping notification");
            return Ok(());
        }

        let mut digest = format!("🎯 {} new contribution opportunities\n", result.new_opportunities.len());
        for opportunity in top {
            digest.push_str(&format!(
                "{} [{}] {}#{} — {} ({})\n",
                opportunity.score,
                opportunity.tier.name(),
                opportunity.issue.repository,
                opportunity.issue.number,
                opportunity.issue.title,
                opportunity.issue.url,
            ));
        }

        let payload = serde_json::json!({
            "content": digest,
            "opportunities": top,
        });

        let mut request = match self.webhook.method.to_uppercase().as_str() {
            "PUT" => self.client.put(&self.webhook.url),
            _ => self.client.post(&self.webhook.url),
        };

        for (name, value) in &self.webhook.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .json(&payload)
            .send()
            .await
            .map_err(|e| RadarError::notification_error(&self.webhook.url, &e.to_string()))?;

        if !response.status().is_success() {
            return Err(RadarError::notification_error(
                &self.webhook.url,
                &format!("HTTP {}", response.status().as_u16()),
            ));
        }

        log::info!("📨 Notified {} opportunities", top.len());
        Ok(())
    }
}
