use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::CompletedRun;

/// Maximum number of locally retained high score entries per branch.
pub const LOCAL_HIGH_SCORE_CAP: usize = 5;

/// The single best playthrough seen for a branch since the last reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRun {
    pub user_name: Option<String>,
    pub time_ms: u64,
    pub score: u32,
    pub accuracy_pct: u8,
}

/// One row of a branch leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub user_name: String,
    pub score: u32,
    pub accuracy_pct: u8,
    pub time_ms: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Leaderboard ordering: higher score first, faster time breaks ties.
///
/// The same comparator orders the local top-5 and the remote top-100.
#[must_use]
pub fn leaderboard_order(a: &HighScoreEntry, b: &HighScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.time_ms.cmp(&b.time_ms))
}

/// Persisted per-branch quiz statistics.
///
/// `Default` is the zero value a branch starts from and resets back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStats {
    pub high_score: u32,
    pub best_run: Option<BestRun>,
    pub high_scores: Vec<HighScoreEntry>,
}

impl QuizStats {
    /// Fold a completed run into the stats.
    ///
    /// - `high_score` becomes the max of old and new.
    /// - `best_run` is replaced only on strict improvement: when absent, or
    ///   when the run scores at least as much in strictly less time.
    /// - A new `HighScoreEntry` is inserted, the list re-sorted by
    ///   (score desc, time asc) and truncated to [`LOCAL_HIGH_SCORE_CAP`].
    pub fn apply_run(&mut self, run: &CompletedRun, user_name: &str, now: DateTime<Utc>) {
        self.high_score = self.high_score.max(run.score);

        let improves = match &self.best_run {
            None => true,
            Some(best) => run.score >= best.score && run.elapsed_ms < best.time_ms,
        };
        if improves {
            self.best_run = Some(BestRun {
                user_name: Some(user_name.to_string()),
                time_ms: run.elapsed_ms,
                score: run.score,
                accuracy_pct: run.accuracy_pct,
            });
        }

        self.high_scores.push(HighScoreEntry {
            user_name: user_name.to_string(),
            score: run.score,
            accuracy_pct: run.accuracy_pct,
            time_ms: run.elapsed_ms,
            recorded_at: now,
        });
        self.high_scores.sort_by(leaderboard_order);
        self.high_scores.truncate(LOCAL_HIGH_SCORE_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Branch, RunId};
    use crate::time::fixed_now;

    fn run(id: u64, score: u32, elapsed_ms: u64) -> CompletedRun {
        CompletedRun::new(RunId::new(id), Branch::Navy, score, 19, elapsed_ms)
    }

    #[test]
    fn high_score_is_monotonic() {
        let mut stats = QuizStats::default();
        stats.apply_run(&run(1, 12, 60_000), "a", fixed_now());
        stats.apply_run(&run(2, 7, 30_000), "b", fixed_now());
        assert_eq!(stats.high_score, 12);
    }

    #[test]
    fn best_run_set_when_absent() {
        let mut stats = QuizStats::default();
        stats.apply_run(&run(1, 19, 45_000), "ada", fixed_now());
        let best = stats.best_run.as_ref().unwrap();
        assert_eq!(best.score, 19);
        assert_eq!(best.time_ms, 45_000);
        assert_eq!(best.accuracy_pct, 100);
        assert_eq!(best.user_name.as_deref(), Some("ada"));
    }

    #[test]
    fn best_run_requires_equal_score_and_strictly_faster_time() {
        let mut stats = QuizStats::default();
        stats.apply_run(&run(1, 15, 50_000), "a", fixed_now());

        // Same score, same time: no replacement.
        stats.apply_run(&run(2, 15, 50_000), "b", fixed_now());
        assert_eq!(stats.best_run.as_ref().unwrap().user_name.as_deref(), Some("a"));

        // Higher score but slower: no replacement either.
        stats.apply_run(&run(3, 16, 90_000), "c", fixed_now());
        assert_eq!(stats.best_run.as_ref().unwrap().score, 15);

        // Same score, strictly faster: replaced.
        stats.apply_run(&run(4, 15, 40_000), "d", fixed_now());
        let best = stats.best_run.as_ref().unwrap();
        assert_eq!(best.time_ms, 40_000);
        assert_eq!(best.user_name.as_deref(), Some("d"));
    }

    #[test]
    fn high_scores_sorted_by_score_then_time() {
        let mut stats = QuizStats::default();
        stats.apply_run(&run(1, 10, 5_000), "a", fixed_now());
        stats.apply_run(&run(2, 15, 8_000), "b", fixed_now());
        stats.apply_run(&run(3, 15, 6_000), "c", fixed_now());

        let scores: Vec<(u32, u64)> = stats
            .high_scores
            .iter()
            .map(|e| (e.score, e.time_ms))
            .collect();
        assert_eq!(scores, vec![(15, 6_000), (15, 8_000), (10, 5_000)]);
    }

    #[test]
    fn high_scores_truncated_to_cap() {
        let mut stats = QuizStats::default();
        for i in 0..10_u64 {
            stats.apply_run(&run(i, i as u32, 1_000 * (i + 1)), "x", fixed_now());
        }
        assert_eq!(stats.high_scores.len(), LOCAL_HIGH_SCORE_CAP);
        // The cap keeps the best scores, not the earliest insertions.
        assert_eq!(stats.high_scores[0].score, 9);
        assert_eq!(stats.high_scores[4].score, 5);
    }

    #[test]
    fn zero_value_round_trips_through_json() {
        let zero = QuizStats::default();
        let json = serde_json::to_string(&zero).unwrap();
        let back: QuizStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zero);
        assert_eq!(back.high_score, 0);
        assert!(back.best_run.is_none());
        assert!(back.high_scores.is_empty());
    }
}
