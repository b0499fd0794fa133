#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryStatsRepository, StatsRepository, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
