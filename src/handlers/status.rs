use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

// GET /api/status
#[derive(Serialize)]
pub struct StatusResponse {
    fast_path: bool,
    fallback_available: bool,
    fallback_provider: Option<&'static str>,
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let provider = state.pipeline.fallback_provider();
    Json(StatusResponse {
        fast_path: true,
        fallback_available: provider.is_some(),
        fallback_provider: provider,
    })
}
