use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;

use super::{system_prompt, LlmProvider, REQUEST_TIMEOUT};
use crate::models::{ToolCallPayload, ToolCallResponse};
use crate::services::schema::visit_record_schema;

/// OpenAI-compatible chat completions endpoint driven through a forced
/// `schedule_visit` tool call.
pub struct MercuryProvider {
    api_key: String,
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl MercuryProvider {
    pub fn new(api_key: String, endpoint: String, model: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            api_key,
            endpoint,
            model,
            client,
        })
    }

    pub fn payload(&self, transcript: &str, today: NaiveDate) -> ToolCallPayload {
        ToolCallPayload::new(
            &self.model,
            system_prompt(today),
            transcript,
            visit_record_schema(),
        )
    }
}

#[async_trait]
impl LlmProvider for MercuryProvider {
    fn name(&self) -> &'static str {
        "mercury"
    }

    async fn extract_arguments(&self, transcript: &str, today: NaiveDate) -> anyhow::Result<String> {
        let payload = self.payload(transcript, today);

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("failed to call Mercury API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Mercury API error ({}): {}", status, body);
        }

        let data: ToolCallResponse = resp
            .json()
            .await
            .context("failed to parse Mercury response")?;

        data.first_arguments()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing tool call in Mercury response"))
    }
}
