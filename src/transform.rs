//! Reshapes GitHub payloads into the frontend DTOs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::github::{GitHubCommit, GitHubRepository};
use crate::models::{CommitAuthor, CommitSummary, RepositorySummary};

const SHORT_ID_LEN: usize = 7;
const DISPLAY_FORMAT: &str = "%d/%m/%Y à %H:%M";

pub fn commit_to_summary(commit: GitHubCommit) -> CommitSummary {
    let signature = commit.commit.author;
    let display_date = format_date(&signature.date);

    CommitSummary {
        short_id: short_id(&commit.sha),
        full_id: commit.sha,
        message: commit.commit.message,
        author: CommitAuthor {
            name: signature.name,
            email: signature.email,
            avatar_url: commit.author.and_then(|account| account.avatar_url),
        },
        timestamp: signature.date,
        display_date,
        permalink: commit.html_url,
    }
}

pub fn repository_to_summary(repo: GitHubRepository) -> RepositorySummary {
    RepositorySummary {
        name: repo.name,
        full_name: repo.full_name,
        description: repo.description,
        primary_language: repo.language,
        star_count: repo.stargazers_count,
        fork_count: repo.forks_count,
        created_at: repo.created_at,
        updated_at: repo.updated_at,
        permalink: repo.html_url,
    }
}

/// Transform a `/commits` body (a JSON array) into summaries.
pub fn commits_from_json(body: Value) -> Result<Vec<CommitSummary>> {
    let commits: Vec<GitHubCommit> = serde_json::from_value(body)
        .map_err(|e| AppError::Internal(format!("Unexpected commit payload: {}", e)))?;
    Ok(commits.into_iter().map(commit_to_summary).collect())
}

pub fn repository_from_json(body: Value) -> Result<RepositorySummary> {
    let repo: GitHubRepository = serde_json::from_value(body)
        .map_err(|e| AppError::Internal(format!("Unexpected repository payload: {}", e)))?;
    Ok(repository_to_summary(repo))
}

/// First seven characters of a hash; shorter hashes are returned whole.
pub fn short_id(sha: &str) -> String {
    sha.chars().take(SHORT_ID_LEN).collect()
}

/// Render an ISO-8601 timestamp as `dd/mm/YYYY à HH:MM` in its own offset.
///
/// Returns the input unchanged when it cannot be parsed.
pub fn format_date(iso_date: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso_date) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso_date, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    iso_date.to_string()
}
