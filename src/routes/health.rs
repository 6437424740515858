//! Liveness endpoint.
//!
//! GET /api/health always answers 200 with `{ status: "healthy", timestamp }`.

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};

use crate::models::HealthResponse;

pub fn routes() -> Router {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
