//! Errors raised while fetching content from the GraphQL backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content backend returned HTTP {0}")]
    Status(u16),

    #[error("content backend reported errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("content response had no data")]
    MissingData,

    #[error("content response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
