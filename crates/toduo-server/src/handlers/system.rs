use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use toduo_store::Counts;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is running.
    pub status: &'static str,
    /// Seconds since the server started.
    pub uptime_secs: u64,
    pub counts: Counts,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Server is running" }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
        counts: state.store.counts(),
    })
}
