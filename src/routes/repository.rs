//! Repository metadata endpoint.
//!
//! GET /api/repo-info/{owner}/{name}
//!
//! Any non-200 upstream status is reported as 404, and so is an identifier
//! with empty, `.` or `..` segments. Transport failures are reported as 500
//! with the cause in the message.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::github::{identifier_segments, SharedClient};
use crate::models::RepositorySummary;
use crate::transform;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/api/repo-info/{*repo}", get(get_repository_info))
        .with_state(client)
}

async fn get_repository_info(
    State(client): State<SharedClient>,
    Path(repo): Path<String>,
) -> Result<Json<RepositorySummary>> {
    if identifier_segments(&repo).is_none() {
        return Err(AppError::RepositoryNotFound);
    }

    let response = client
        .get(&repo, None, &[])
        .await
        .map_err(|e| match e {
            AppError::Internal(_) => e,
            other => AppError::Internal(other.to_string()),
        })?;

    if !response.is_ok() {
        return Err(AppError::RepositoryNotFound);
    }

    let summary = transform::repository_from_json(response.body)?;
    Ok(Json(summary))
}
