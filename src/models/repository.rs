use serde::{Deserialize, Serialize};

/// Flat repository metadata, no envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    #[serde(rename = "language")]
    pub primary_language: Option<String>,
    #[serde(rename = "stars")]
    pub star_count: u64,
    #[serde(rename = "forks")]
    pub fork_count: u64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "url")]
    pub permalink: String,
}
