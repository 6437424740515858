//! API route handlers - maps HTTP endpoints to upstream GitHub calls.
//!
//! Each submodule defines routes for a feature area:
//! - `commits`: Commit listing (GET /api/commits/{owner}/{name})
//! - `repository`: Repository metadata (GET /api/repo-info/{owner}/{name})
//! - `health`: Liveness (GET /api/health)
//!
//! Unmatched routes answer 404, a wrong method on a known path answers 405 and
//! panics inside a handler answer 500, all with a generic JSON error body.

pub mod commits;
pub mod health;
pub mod repository;

use std::any::Any;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::github::SharedClient;

pub fn create_router(client: SharedClient) -> Router {
    let router = Router::new()
        .merge(commits::routes(client.clone()))
        .merge(repository::routes(client))
        .merge(health::routes());

    with_fallbacks(router)
}

fn with_fallbacks(router: Router) -> Router {
    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn not_found(uri: Uri) -> Response {
    tracing::debug!(%uri, "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "endpoint not found" })),
    )
        .into_response()
}

async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, %uri, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "method not allowed" })),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}
