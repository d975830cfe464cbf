use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::WebhookConfig;
use crate::core::search::Notifier;
use crate::models::{WebhookOutcome, WebhookPayload};
use crate::utils::Error;

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
    /// Host part only; paths and query strings of webhook URLs often carry tokens.
    host: String,
    client: reqwest::Client,
}

fn loggable_host(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or("<no host>").to_string(),
        Err(_) if url.is_empty() => "<unset>".to_string(),
        Err(_) => "<invalid url>".to_string(),
    }
}

impl WebhookNotifier {
    pub fn new(cfg: &WebhookConfig, client: reqwest::Client) -> Self {
        Self {
            url: cfg.url.clone(),
            host: loggable_host(&cfg.url),
            client,
        }
    }

    async fn post(&self, payload: &WebhookPayload) -> Result<WebhookOutcome, Error> {
        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        debug!(target: "moviehook::webhook", status = %status, body = %body, "Webhook response");

        Ok(WebhookOutcome::from_status(status.as_u16()))
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, payload: &WebhookPayload) -> WebhookOutcome {
        info!(target: "moviehook::webhook", host = %self.host, title = %payload.title, "Sending search result to webhook");

        match self.post(payload).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(target: "moviehook::webhook", host = %self.host, "Webhook delivery failed: {e}");
                WebhookOutcome::failed(e.to_string())
            }
        }
    }
}
