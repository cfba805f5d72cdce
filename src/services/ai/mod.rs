pub mod mercury;
pub mod ollama;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

/// Upper bound on a single fallback request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A language model that can turn a transcript into `schedule_visit`
/// arguments.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the raw, possibly malformed, JSON argument string. Transport
    /// failures, non-success statuses and missing tool calls are errors.
    async fn extract_arguments(&self, transcript: &str, today: NaiveDate) -> anyhow::Result<String>;
}

pub fn system_prompt(today: NaiveDate) -> String {
    format!(
        "You are an expert CRM data extractor. Your task is to extract information from the user's transcript \
         and call the 'schedule_visit' tool with the extracted data. Current Date: {}. \
         Strictly adhere to the provided JSON schema.",
        today.format("%Y-%m-%d")
    )
}
