use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    #[serde(rename = "sha")]
    pub short_id: String,
    #[serde(rename = "full_sha")]
    pub full_id: String,
    pub message: String,
    pub author: CommitAuthor,
    #[serde(rename = "date")]
    pub timestamp: String,
    #[serde(rename = "formatted_date")]
    pub display_date: String,
    #[serde(rename = "url")]
    pub permalink: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Envelope returned by the commit listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitListResponse {
    pub success: bool,
    pub repository: String,
    pub commits: Vec<CommitSummary>,
    pub total_commits: usize,
    pub page: i64,
    pub per_page: i64,
}
