//! Commit listing endpoint.
//!
//! GET /api/commits/{owner}/{name}?per_page=&page=
//!
//! Proxies `/repos/{owner}/{name}/commits` and returns an envelope with the
//! reshaped commits. `per_page` defaults to 30 and is capped at 100, `page`
//! defaults to 1. Upstream 404/403 map to not-found/rate-limited, any other
//! non-200 status is forwarded as-is.
//!
//! Used by: commit list view

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::github::{identifier_segments, SharedClient};
use crate::models::CommitListResponse;
use crate::transform;

const DEFAULT_PER_PAGE: i64 = 30;
const MAX_PER_PAGE: i64 = 100;
const DEFAULT_PAGE: i64 = 1;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/api/commits/{*repo}", get(get_commits))
        .with_state(client)
}

// Kept as strings so that non-numeric values fall back to defaults
#[derive(Debug, Deserialize)]
struct CommitsQuery {
    per_page: Option<String>,
    page: Option<String>,
}

async fn get_commits(
    State(client): State<SharedClient>,
    Path(repo): Path<String>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<CommitListResponse>> {
    validate_identifier(&repo)?;

    let per_page = clamp_per_page(parse_or(query.per_page.as_deref(), DEFAULT_PER_PAGE));
    let page = parse_or(query.page.as_deref(), DEFAULT_PAGE);

    let params = [
        ("per_page", per_page.to_string()),
        ("page", page.to_string()),
    ];
    let response = client.get(&repo, Some("commits"), &params).await?;

    match response.status {
        200 => {}
        404 => return Err(AppError::RepositoryNotFound),
        403 => return Err(AppError::RateLimited),
        status => return Err(AppError::Upstream { status }),
    }

    let commits = transform::commits_from_json(response.body)?;

    Ok(Json(CommitListResponse {
        success: true,
        repository: repo,
        total_commits: commits.len(),
        commits,
        page,
        per_page,
    }))
}

/// Accepts exactly `owner/name` with both segments non-empty and neither
/// being `.` or `..`.
pub fn validate_identifier(repo: &str) -> Result<()> {
    match identifier_segments(repo) {
        Some(segments) if segments.len() == 2 => Ok(()),
        _ => Err(AppError::InvalidRepositoryFormat),
    }
}

fn clamp_per_page(per_page: i64) -> i64 {
    per_page.min(MAX_PER_PAGE)
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
