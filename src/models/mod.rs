//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption. Rust field
//! names describe the data; serde renames keep the wire names the frontend
//! already reads.
//! - `commit`: CommitSummary, CommitAuthor, CommitListResponse
//! - `repository`: RepositorySummary
//! - `health`: HealthResponse

pub mod commit;
pub mod health;
pub mod repository;

pub use commit::*;
pub use health::*;
pub use repository::*;
