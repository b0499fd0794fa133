use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use rankquiz_core::model::Branch;

use super::SqliteRepository;
use crate::repository::{StatsRepository, StorageError};

#[async_trait]
impl StatsRepository for SqliteRepository {
    async fn load(&self, branch: Branch) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT payload FROM quiz_stats WHERE branch = ?1")
            .bind(branch.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row
            .try_get("payload")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(payload))
    }

    async fn store(&self, branch: Branch, payload: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO quiz_stats (branch, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(branch) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            ",
        )
        .bind(branch.as_str())
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn delete(&self, branch: Branch) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM quiz_stats WHERE branch = ?1")
            .bind(branch.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
