use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use visitbook::config::{AppConfig, FallbackBackend};
use visitbook::handlers;
use visitbook::services::ai::mercury::MercuryProvider;
use visitbook::services::ai::ollama::OllamaProvider;
use visitbook::services::ai::LlmProvider;
use visitbook::services::fallback::FallbackExtractor;
use visitbook::services::pipeline::Pipeline;
use visitbook::state::AppState;

fn build_fallback(config: &AppConfig) -> anyhow::Result<Option<FallbackExtractor>> {
    if let Err(e) = config.fallback_credentials() {
        tracing::warn!(
            provider = config.llm_provider.as_str(),
            error = %e,
            "fallback path unavailable, running fast path only"
        );
        return Ok(None);
    }

    let llm: Arc<dyn LlmProvider> = match config.llm_provider {
        FallbackBackend::Mercury => {
            tracing::info!("using Mercury fallback (model: {})", config.mercury_model);
            Arc::new(MercuryProvider::new(
                config.mercury_api_key.clone(),
                config.mercury_api_endpoint.clone(),
                config.mercury_model.clone(),
            )?)
        }
        FallbackBackend::Ollama => {
            tracing::info!("using Ollama fallback (url: {})", config.ollama_url);
            Arc::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )?)
        }
    };

    Ok(Some(FallbackExtractor::new(llm)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let pipeline = Pipeline::new(build_fallback(&config)?);

    let state = Arc::new(AppState {
        config: config.clone(),
        pipeline,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/status", get(handlers::status::get_status))
        .route("/api/extract", post(handlers::extract::extract))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
