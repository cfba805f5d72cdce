use serde::{Deserialize, Serialize};

use super::VisitRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionMethod {
    FastPath,
    Fallback,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::FastPath => "FAST_PATH",
            ExtractionMethod::Fallback => "FALLBACK",
        }
    }
}

/// Outcome of one pipeline invocation. Assembled once by the router.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionMetrics {
    pub method: ExtractionMethod,
    pub success: bool,
    pub latency_sec: f64,
    pub data: Option<VisitRecord>,
    pub transcript: String,
    /// Fallback backend that was consulted, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}
