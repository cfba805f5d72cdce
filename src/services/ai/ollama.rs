use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use super::{LlmProvider, REQUEST_TIMEOUT};
use crate::models::VisitRecord;

/// Local model in JSON mode. Its message content stands in for the tool-call
/// arguments.
pub struct OllamaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { url, model, client })
    }
}

fn json_mode_prompt(today: NaiveDate) -> String {
    format!(
        "You are an expert CRM data extractor. Extract information strictly to YYYY-MM-DD and HH:MM format. \
         If any field is missing, set its value to 'N/A'. Current Date: {}. \
         Respond with a single JSON object with exactly these keys: {}. \
         visit_type must be OPERATION, BUSINESS or N/A.",
        today.format("%Y-%m-%d"),
        VisitRecord::FIELDS.join(", ")
    )
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn extract_arguments(&self, transcript: &str, today: NaiveDate) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": json_mode_prompt(today) },
                { "role": "user", "content": transcript },
            ],
            "format": "json",
            "stream": false,
            "options": { "temperature": 0 },
        });

        let resp = self
            .client
            .post(format!("{}/api/chat", self.url.trim_end_matches('/')))
            .json(&body)
            .send()
            .await
            .context("failed to call Ollama API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Ollama response")?;

        if !status.is_success() {
            anyhow::bail!("Ollama API error ({}): {}", status, data);
        }

        data["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing content in Ollama response"))
    }
}
