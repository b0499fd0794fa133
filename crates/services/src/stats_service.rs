use std::sync::Arc;

use rankquiz_core::Clock;
use rankquiz_core::model::{Branch, CompletedRun, QuizStats};
use storage::repository::StatsRepository;

use crate::error::StatsError;

/// Local stats store: get/update/reset of per-branch `QuizStats`.
///
/// Records are serialized whole and overwritten whole; a branch with no
/// record (or an unreadable one) behaves as the zero value.
#[derive(Clone)]
pub struct StatsService {
    clock: Clock,
    repo: Arc<dyn StatsRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn StatsRepository>) -> Self {
        Self { clock, repo }
    }

    /// Stats for a branch, falling back to the zero value when the branch
    /// has no record or its payload cannot be parsed. A corrupt payload is
    /// logged and discarded rather than propagated.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` only when the backend itself fails.
    pub async fn get(&self, branch: Branch) -> Result<QuizStats, StatsError> {
        let Some(payload) = self.repo.load(branch).await? else {
            return Ok(QuizStats::default());
        };
        match serde_json::from_str(&payload) {
            Ok(stats) => Ok(stats),
            Err(err) => {
                log::warn!("discarding corrupt stats payload for {branch}: {err}");
                Ok(QuizStats::default())
            }
        }
    }

    /// Fold a completed run into the branch stats and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the updated record cannot be serialized or
    /// stored.
    pub async fn update(
        &self,
        run: &CompletedRun,
        user_name: &str,
    ) -> Result<QuizStats, StatsError> {
        let mut stats = self.get(run.branch).await?;
        stats.apply_run(run, user_name, self.clock.now());
        self.persist(run.branch, &stats).await?;
        Ok(stats)
    }

    /// Reset a branch back to the zero value.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the zero record cannot be stored.
    pub async fn reset(&self, branch: Branch) -> Result<QuizStats, StatsError> {
        let zero = QuizStats::default();
        self.persist(branch, &zero).await?;
        Ok(zero)
    }

    async fn persist(&self, branch: Branch, stats: &QuizStats) -> Result<(), StatsError> {
        let payload = serde_json::to_string(stats)?;
        self.repo.store(branch, &payload).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankquiz_core::model::RunId;
    use rankquiz_core::time::fixed_clock;
    use storage::repository::InMemoryStatsRepository;

    fn service() -> (StatsService, InMemoryStatsRepository) {
        let repo = InMemoryStatsRepository::new();
        let service = StatsService::new(fixed_clock(), Arc::new(repo.clone()));
        (service, repo)
    }

    fn run(score: u32, elapsed_ms: u64) -> CompletedRun {
        CompletedRun::new(RunId::new(1), Branch::Navy, score, 19, elapsed_ms)
    }

    #[tokio::test]
    async fn get_of_absent_branch_is_zero_value() {
        let (service, _) = service();
        let stats = service.get(Branch::Navy).await.unwrap();
        assert_eq!(stats, QuizStats::default());
    }

    #[tokio::test]
    async fn update_persists_and_returns_new_stats() {
        let (service, _) = service();
        let stats = service.update(&run(19, 45_000), "ada").await.unwrap();
        assert_eq!(stats.high_score, 19);
        assert_eq!(stats.best_run.as_ref().unwrap().time_ms, 45_000);
        assert_eq!(stats.high_scores.len(), 1);

        let reloaded = service.get(Branch::Navy).await.unwrap();
        assert_eq!(reloaded, stats);
    }

    #[tokio::test]
    async fn reset_returns_and_persists_zero_value() {
        let (service, _) = service();
        service.update(&run(19, 45_000), "ada").await.unwrap();
        let zero = service.reset(Branch::Navy).await.unwrap();
        assert_eq!(zero, QuizStats::default());
        assert_eq!(service.get(Branch::Navy).await.unwrap(), QuizStats::default());
    }

    #[tokio::test]
    async fn corrupt_payload_falls_back_to_zero_value() {
        let (service, repo) = service();
        repo.store(Branch::Navy, "{not json").await.unwrap();

        let stats = service.get(Branch::Navy).await.unwrap();
        assert_eq!(stats, QuizStats::default());

        // An update on top of the corrupt record starts from zero.
        let updated = service.update(&run(5, 60_000), "sam").await.unwrap();
        assert_eq!(updated.high_score, 5);
    }

    #[tokio::test]
    async fn branches_do_not_share_stats() {
        let (service, _) = service();
        service.update(&run(12, 50_000), "ada").await.unwrap();
        assert_eq!(service.get(Branch::Army).await.unwrap(), QuizStats::default());
    }

    #[tokio::test]
    async fn backend_failure_propagates_as_storage_error() {
        use async_trait::async_trait;
        use storage::repository::StorageError;

        struct FailingRepo;

        #[async_trait]
        impl StatsRepository for FailingRepo {
            async fn load(&self, _branch: Branch) -> Result<Option<String>, StorageError> {
                Err(StorageError::Connection("down".into()))
            }
            async fn store(&self, _branch: Branch, _payload: &str) -> Result<(), StorageError> {
                Err(StorageError::Connection("down".into()))
            }
            async fn delete(&self, _branch: Branch) -> Result<(), StorageError> {
                Err(StorageError::Connection("down".into()))
            }
        }

        let service = StatsService::new(fixed_clock(), Arc::new(FailingRepo));
        assert!(matches!(
            service.get(Branch::Navy).await,
            Err(StatsError::Storage(_))
        ));
    }
}
