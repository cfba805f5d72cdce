use std::time::Instant;

use crate::models::{ExtractionMethod, ExtractionMetrics};
use crate::services::complexity;
use crate::services::fallback::FallbackExtractor;
use crate::services::fast_path;

/// Routes a transcript through the fast path and, when that misses, the
/// fallback extractor.
///
/// `run` never fails: every outcome is reported through the `success` flag of
/// the returned metrics. Without a fallback extractor a fast-path miss is
/// reported as a failed fallback attempt.
pub struct Pipeline {
    fallback: Option<FallbackExtractor>,
}

impl Pipeline {
    pub fn new(fallback: Option<FallbackExtractor>) -> Self {
        Self { fallback }
    }

    pub fn fast_path_only() -> Self {
        Self { fallback: None }
    }

    pub fn fallback_provider(&self) -> Option<&'static str> {
        self.fallback.as_ref().map(|f| f.provider_name())
    }

    pub async fn run(&self, transcript: &str) -> ExtractionMetrics {
        let started = Instant::now();
        let fast = match complexity::detect(transcript) {
            Some(pattern) => {
                tracing::debug!(pattern = pattern.as_str(), "complex transcript, skipping fast path");
                None
            }
            None => {
                let record = fast_path::extract_fast(transcript);
                if record.is_none() {
                    tracing::debug!("fast path found no lead name or visit type");
                }
                record
            }
        };
        let fast_latency = started.elapsed().as_secs_f64();

        if let Some(record) = fast {
            tracing::info!(
                method = ExtractionMethod::FastPath.as_str(),
                latency_sec = fast_latency,
                lead_name = %record.lead_name,
                "extraction succeeded"
            );
            return ExtractionMetrics {
                method: ExtractionMethod::FastPath,
                success: true,
                latency_sec: fast_latency,
                data: Some(record),
                transcript: transcript.to_string(),
                provider: None,
            };
        }

        let (data, fallback_latency, provider) = match &self.fallback {
            Some(fallback) => {
                let (data, latency) = fallback.extract(transcript).await;
                (data, latency, Some(fallback.provider_name().to_string()))
            }
            None => {
                tracing::debug!("fast path missed and no fallback is configured");
                (None, 0.0, None)
            }
        };

        let metrics = ExtractionMetrics {
            method: ExtractionMethod::Fallback,
            success: data.is_some(),
            latency_sec: fast_latency + fallback_latency,
            data,
            transcript: transcript.to_string(),
            provider,
        };

        tracing::info!(
            method = metrics.method.as_str(),
            success = metrics.success,
            latency_sec = metrics.latency_sec,
            provider = metrics.provider.as_deref().unwrap_or("none"),
            "extraction finished"
        );
        metrics
    }
}
