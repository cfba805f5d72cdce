use std::env;

use crate::errors::AppError;

/// Value shipped in sample `.env` files; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_FOR_SECURITY_CHECK";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackBackend {
    Mercury,
    Ollama,
}

impl FallbackBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackBackend::Mercury => "mercury",
            FallbackBackend::Ollama => "ollama",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_token: String,
    pub llm_provider: FallbackBackend,
    pub mercury_api_key: String,
    pub mercury_api_endpoint: String,
    pub mercury_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_token: env::var("API_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            llm_provider: match env::var("LLM_PROVIDER").as_deref() {
                Ok("ollama") => FallbackBackend::Ollama,
                _ => FallbackBackend::Mercury,
            },
            mercury_api_key: env::var("MERCURY_API_KEY").unwrap_or_default(),
            mercury_api_endpoint: env::var("MERCURY_API_ENDPOINT").unwrap_or_else(|_| {
                "https://api.inceptionlabs.ai/v1/chat/completions".to_string()
            }),
            mercury_model: env::var("MERCURY_MODEL").unwrap_or_else(|_| "mercury".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
        }
    }

    /// Checks that the selected fallback backend can actually be called.
    /// The hosted backend needs a real bearer key; the local one needs a URL.
    pub fn fallback_credentials(&self) -> Result<(), AppError> {
        match self.llm_provider {
            FallbackBackend::Mercury => {
                let key = self.mercury_api_key.trim();
                if key.is_empty() || key == PLACEHOLDER_API_KEY {
                    return Err(AppError::Config(
                        "MERCURY_API_KEY is missing or a placeholder".to_string(),
                    ));
                }
                if self.mercury_api_endpoint.trim().is_empty() {
                    return Err(AppError::Config("MERCURY_API_ENDPOINT is empty".to_string()));
                }
            }
            FallbackBackend::Ollama => {
                if self.ollama_url.trim().is_empty() {
                    return Err(AppError::Config("OLLAMA_URL is empty".to_string()));
                }
            }
        }
        Ok(())
    }
}
