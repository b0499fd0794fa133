use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rankquiz_core::Clock;
use rankquiz_core::catalog::Catalog;
use rankquiz_core::model::{Branch, CompletedRun, QuizStats, RunId};

use crate::error::{LeaderboardError, SessionError, StatsError};
use crate::leaderboard::{GlobalScoreEntry, LeaderboardGateway};
use crate::sessions::QuizSession;
use crate::stats_service::StatsService;

/// What happened when a completed run was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishOutcome {
    /// Branch stats with the run folded in, whatever the remote did.
    pub stats: QuizStats,
    /// Whether the run reached the remote leaderboard.
    pub submitted: bool,
    /// Remote failure, if any. Non-fatal: the caller may surface it and
    /// offer a retry via [`QuizService::finish`] with the same run.
    pub remote_error: Option<String>,
}

/// Orchestrates quiz runs: session start, completion bookkeeping, remote
/// submission.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    catalog: Arc<Catalog>,
    stats: StatsService,
    leaderboard: LeaderboardGateway,
    recorded_runs: Arc<Mutex<HashSet<RunId>>>,
    submitted_runs: Arc<Mutex<HashSet<RunId>>>,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Catalog,
        stats: StatsService,
        leaderboard: LeaderboardGateway,
    ) -> Self {
        Self {
            clock,
            catalog: Arc::new(catalog),
            stats,
            leaderboard,
            recorded_runs: Arc::new(Mutex::new(HashSet::new())),
            submitted_runs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a new session over the branch catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` when the branch cannot back a quiz.
    pub fn start(&self, branch: Branch) -> Result<QuizSession, SessionError> {
        QuizSession::start(
            branch,
            self.catalog.entries(branch),
            &mut rand::rng(),
            self.clock.now(),
        )
    }

    /// Record a completed run.
    ///
    /// Both sides are single-flight per run id, so a retry after a remote
    /// failure is safe: the local update folds the run into branch stats
    /// exactly once (later calls just read them back), and only the first
    /// `finish` for a given run attempts the remote submit, with a failed
    /// attempt re-arming its guard so the caller can call again. Remote
    /// failures are folded into the outcome, never propagated.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` only when the local update fails.
    pub async fn finish(
        &self,
        run: &CompletedRun,
        user_name: &str,
    ) -> Result<FinishOutcome, StatsError> {
        let first_record = self
            .recorded_runs
            .lock()
            .map(|mut guard| guard.insert(run.run_id))
            .unwrap_or(false);
        let stats = if first_record {
            match self.stats.update(run, user_name).await {
                Ok(stats) => stats,
                Err(err) => {
                    // Nothing was persisted; let a retry record the run.
                    if let Ok(mut guard) = self.recorded_runs.lock() {
                        guard.remove(&run.run_id);
                    }
                    return Err(err);
                }
            }
        } else {
            log::debug!("run {:?} already recorded locally", run.run_id);
            self.stats.get(run.branch).await?
        };

        let first_attempt = self
            .submitted_runs
            .lock()
            .map(|mut guard| guard.insert(run.run_id))
            .unwrap_or(false);
        if !first_attempt {
            log::debug!("suppressing duplicate remote submit for {:?}", run.run_id);
            return Ok(FinishOutcome {
                stats,
                submitted: false,
                remote_error: None,
            });
        }

        let entry = GlobalScoreEntry::from_run(run, user_name, self.clock.now());
        let (submitted, remote_error) = match self.leaderboard.submit(&entry).await {
            Ok(accepted) => (accepted, None),
            Err(LeaderboardError::Disabled) => (false, None),
            Err(err) => {
                log::warn!("remote leaderboard submit failed for {}: {err}", run.branch);
                // Re-arm so a retry with the same run can reach the remote.
                if let Ok(mut guard) = self.submitted_runs.lock() {
                    guard.remove(&run.run_id);
                }
                (false, Some(err.to_string()))
            }
        };

        Ok(FinishOutcome {
            stats,
            submitted,
            remote_error,
        })
    }

    /// Local stats for a branch (zero value when absent).
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` when the backend fails.
    pub async fn stats(&self, branch: Branch) -> Result<QuizStats, StatsError> {
        self.stats.get(branch).await
    }

    /// Reset a branch's local stats to the zero value.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` when the zero record cannot be stored.
    pub async fn reset(&self, branch: Branch) -> Result<QuizStats, StatsError> {
        self.stats.reset(branch).await
    }

    /// Top remote entries for a branch.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` when the gateway is disabled or the call
    /// fails; callers surface this as a retryable, non-fatal condition.
    pub async fn global_top(
        &self,
        branch: Branch,
    ) -> Result<Vec<GlobalScoreEntry>, LeaderboardError> {
        self.leaderboard.fetch_top(branch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankquiz_core::time::fixed_clock;
    use storage::repository::InMemoryStatsRepository;

    fn service() -> QuizService {
        let repo = Arc::new(InMemoryStatsRepository::new());
        QuizService::new(
            fixed_clock(),
            Catalog::builtin(),
            StatsService::new(fixed_clock(), repo),
            LeaderboardGateway::new(None).unwrap(),
        )
    }

    #[test]
    fn start_builds_session_for_every_branch() {
        let service = service();
        for branch in Branch::ALL {
            let session = service.start(branch).unwrap();
            assert_eq!(
                session.questions().len(),
                service.catalog().entries(branch).len()
            );
        }
    }

    #[tokio::test]
    async fn finish_updates_local_stats_with_disabled_remote() {
        let service = service();
        let run = CompletedRun::new(RunId::new(7), Branch::Navy, 19, 19, 45_000);

        let outcome = service.finish(&run, "ada").await.unwrap();
        assert_eq!(outcome.stats.high_score, 19);
        assert!(!outcome.submitted);
        assert!(outcome.remote_error.is_none());

        let stats = service.stats(Branch::Navy).await.unwrap();
        assert_eq!(stats.high_score, 19);
        assert_eq!(stats.best_run.as_ref().unwrap().time_ms, 45_000);
    }

    #[tokio::test]
    async fn duplicate_finish_skips_remote_submit() {
        let service = service();
        let run = CompletedRun::new(RunId::new(7), Branch::Navy, 10, 19, 60_000);

        service.finish(&run, "ada").await.unwrap();
        let second = service.finish(&run, "ada").await.unwrap();
        assert!(!second.submitted);
        assert!(second.remote_error.is_none());
    }

    #[tokio::test]
    async fn duplicate_finish_counts_the_run_once_locally() {
        let service = service();
        let run = CompletedRun::new(RunId::new(11), Branch::Navy, 14, 19, 52_000);

        let first = service.finish(&run, "ada").await.unwrap();
        let second = service.finish(&run, "ada").await.unwrap();

        // One playthrough must never occupy two leaderboard slots.
        assert_eq!(second.stats.high_scores.len(), 1);
        assert_eq!(second.stats, first.stats);

        let stats = service.stats(Branch::Navy).await.unwrap();
        assert_eq!(stats.high_scores.len(), 1);

        // A distinct run is still recorded alongside it.
        let other = CompletedRun::new(RunId::new(12), Branch::Navy, 9, 19, 70_000);
        let outcome = service.finish(&other, "sam").await.unwrap();
        assert_eq!(outcome.stats.high_scores.len(), 2);
    }

    #[tokio::test]
    async fn reset_then_get_returns_zero_value() {
        let service = service();
        let run = CompletedRun::new(RunId::new(3), Branch::Air, 12, 19, 80_000);
        service.finish(&run, "sam").await.unwrap();

        let zero = service.reset(Branch::Air).await.unwrap();
        assert_eq!(zero, QuizStats::default());
        assert_eq!(service.stats(Branch::Air).await.unwrap(), QuizStats::default());
    }
}
