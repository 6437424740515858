pub mod client;
pub mod models;

pub use client::{identifier_segments, SharedClient, UpstreamClient, UpstreamConfig};
pub use models::{GitHubCommit, GitHubRepository};
