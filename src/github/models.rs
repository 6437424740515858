//! Subset of the GitHub REST payloads the proxy reads.
//!
//! Unknown fields are ignored; missing required fields fail deserialization.

use serde::Deserialize;

/// Element of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommit {
    pub sha: String,
    pub commit: GitCommitData,
    /// Linked account; `null` when the commit email maps to no GitHub user
    pub author: Option<GitHubAccount>,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitCommitData {
    pub message: String,
    pub author: GitSignature,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitSignature {
    pub name: String,
    pub email: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAccount {
    pub avatar_url: Option<String>,
}

/// `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
}
