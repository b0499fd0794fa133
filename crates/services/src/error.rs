//! Shared error types for the services crate.

use thiserror::Error;

use rankquiz_core::catalog::CatalogError;
use storage::repository::StorageError;

/// Errors emitted by the session engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("session already completed")]
    Completed,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("only {distinct} distinct labels available for options")]
    InsufficientOptions { distinct: usize },
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stats serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors emitted by `LeaderboardGateway`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error("no leaderboard endpoint is configured")]
    Disabled,

    #[error("leaderboard request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
