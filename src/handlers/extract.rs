use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ExtractionMetrics;
use crate::services::confirmation::confirmation_message;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// POST /api/extract
#[derive(Deserialize)]
pub struct ExtractRequest {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub metrics: ExtractionMetrics,
    pub confirmation: Option<String>,
}

pub async fn extract(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    check_auth(&headers, &state.config.api_token)?;

    if payload.transcript.trim().is_empty() {
        return Err(AppError::BadRequest("transcript must not be empty".to_string()));
    }

    let metrics = state.pipeline.run(&payload.transcript).await;
    let confirmation = confirmation_message(&metrics);

    Ok(Json(ExtractResponse {
        metrics,
        confirmation,
    }))
}
