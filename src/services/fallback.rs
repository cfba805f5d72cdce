use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde_json::Value;

use crate::models::VisitRecord;
use crate::services::ai::{LlmProvider, REQUEST_TIMEOUT};
use crate::services::schema::{self, ValidationError};

static COMMA_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("comma pattern must compile"));
static COLON_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*").expect("colon pattern must compile"));

#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("transport failure: {0:#}")]
    Transport(anyhow::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("malformed tool-call arguments: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("schema violation: {0}")]
    Schema(#[from] ValidationError),
}

/// Extraction through a language model. One attempt per call, no retries.
pub struct FallbackExtractor {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl FallbackExtractor {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Returns the validated record, or `None` on any failure, together with
    /// the elapsed seconds. Latency is measured on every outcome.
    pub async fn extract(&self, text: &str) -> (Option<VisitRecord>, f64) {
        let started = Instant::now();
        let result = self.try_extract(text, Local::now().date_naive()).await;
        let latency = started.elapsed().as_secs_f64();

        match result {
            Ok(record) => (Some(record), latency),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    latency_sec = latency,
                    error = %e,
                    "fallback extraction failed"
                );
                (None, latency)
            }
        }
    }

    async fn try_extract(&self, text: &str, today: NaiveDate) -> Result<VisitRecord, FallbackError> {
        let raw = tokio::time::timeout(self.timeout, self.provider.extract_arguments(text, today))
            .await
            .map_err(|_| FallbackError::Timeout(self.timeout))?
            .map_err(FallbackError::Transport)?;

        let candidate = parse_arguments(&raw)?;
        Ok(schema::validate(&candidate)?)
    }
}

/// Undoes the spacing artifacts seen in tool-call arguments: a stray `" "`
/// after a colon, whitespace after commas, and whitespace around colons.
///
/// This is a fixed set of rewrites, not a general JSON repair. It also touches
/// string contents (`"Smith, John"` becomes `"Smith,John"`).
pub fn repair_arguments(raw: &str) -> String {
    let repaired = raw.replace(":\" \"", ":\"");
    let repaired = COMMA_GAP.replace_all(&repaired, ",");
    COLON_GAP.replace_all(&repaired, ":").into_owned()
}

/// Repairs then decodes the argument string. Anything still unparseable is an
/// error; no further heuristics are tried.
pub fn parse_arguments(raw: &str) -> Result<Value, FallbackError> {
    Ok(serde_json::from_str(&repair_arguments(raw))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::models::VisitType;

    enum Reply {
        Args(&'static str),
        Fail,
        Hang,
    }

    struct MockLlm(Reply);

    #[async_trait]
    impl LlmProvider for MockLlm {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn extract_arguments(&self, _transcript: &str, _today: NaiveDate) -> anyhow::Result<String> {
            match self.0 {
                Reply::Args(s) => Ok(s.to_string()),
                Reply::Fail => anyhow::bail!("connection refused"),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok("{}".to_string())
                }
            }
        }
    }

    fn extractor(reply: Reply) -> FallbackExtractor {
        FallbackExtractor::new(Arc::new(MockLlm(reply)))
    }

    const MALFORMED_FULL: &str = r#"{"title":" "Contract signing" , "visit_type" :"BUSINESS",  "lead_name": "Tom Harris", "date":"2025-12-01", "start_time": "15:00", "end_time" : "N/A", "email":"N/A", "phone_number":"N/A"}"#;

    #[test]
    fn test_repair_spacing_around_separators() {
        let repaired = repair_arguments(r#"{"lead_name": "Tom" ,"date":"2025-12-01"}"#);
        assert_eq!(repaired, r#"{"lead_name":"Tom" ,"date":"2025-12-01"}"#);

        let value = parse_arguments(r#"{"lead_name": "Tom" ,"date":"2025-12-01"}"#).unwrap();
        assert_eq!(value["lead_name"], "Tom");
        assert_eq!(value["date"], "2025-12-01");
    }

    #[test]
    fn test_repair_quoted_space_artifact() {
        assert_eq!(
            repair_arguments(r#"{"title":" "Kickoff"}"#),
            r#"{"title":"Kickoff"}"#
        );
    }

    #[test]
    fn test_repair_is_deterministic() {
        assert_eq!(repair_arguments(MALFORMED_FULL), repair_arguments(MALFORMED_FULL));
    }

    #[test]
    fn test_unrepairable_arguments() {
        assert!(matches!(
            parse_arguments(r#"{"lead_name": "Tom""#),
            Err(FallbackError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_full_record_recovers() {
        let (record, latency) = extractor(Reply::Args(MALFORMED_FULL)).extract("x").await;
        let record = record.unwrap();
        assert_eq!(record.title, "Contract signing");
        assert_eq!(record.visit_type, VisitType::Business);
        assert_eq!(record.lead_name, "Tom Harris");
        assert_eq!(record.date, "2025-12-01");
        assert_eq!(record.start_time, "15:00");
        assert!(latency >= 0.0);
    }

    #[tokio::test]
    async fn test_schema_violation_yields_none() {
        let (record, _) = extractor(Reply::Args(r#"{"lead_name": "Tom" ,"date":"2025-12-01"}"#))
            .extract("x")
            .await;
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_garbage_yields_none() {
        let (record, _) = extractor(Reply::Args("I could not call the tool")).extract("x").await;
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_none() {
        let (record, latency) = extractor(Reply::Fail).extract("x").await;
        assert!(record.is_none());
        assert!(latency >= 0.0);
    }

    #[tokio::test]
    async fn test_timeout_yields_none_with_latency() {
        let (record, latency) = extractor(Reply::Hang)
            .with_timeout(Duration::from_millis(50))
            .extract("x")
            .await;
        assert!(record.is_none());
        assert!(latency >= 0.05);
        assert!(latency < 5.0);
    }
}
