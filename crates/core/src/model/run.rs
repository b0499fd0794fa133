use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Branch;

/// Opaque token identifying one completed run.
///
/// Remote submission is single-flight per run; the token is what lets the
/// caller detect a duplicate submit for the same playthrough.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(u64);

impl RunId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunId({})", self.0)
    }
}

/// Percentage of correct answers, rounded to the nearest integer.
///
/// Defined as 0 when nothing was answered.
#[must_use]
pub fn accuracy_pct(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (f64::from(correct) * 100.0 / f64::from(total)).round();
    // correct <= total, so pct is within 0..=100.
    pct as u8
}

/// Final figures of one finished quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRun {
    pub run_id: RunId,
    pub branch: Branch,
    pub score: u32,
    pub total_answered: u32,
    pub elapsed_ms: u64,
    pub accuracy_pct: u8,
}

impl CompletedRun {
    #[must_use]
    pub fn new(
        run_id: RunId,
        branch: Branch,
        score: u32,
        total_answered: u32,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            run_id,
            branch,
            score,
            total_answered,
            elapsed_ms,
            accuracy_pct: accuracy_pct(score, total_answered),
        }
    }
}
