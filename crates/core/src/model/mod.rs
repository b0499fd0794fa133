mod branch;
mod rank;
mod run;
mod stats;

pub use branch::{Branch, ParseBranchError};
pub use rank::{RankEntry, RankId};
pub use run::{CompletedRun, RunId, accuracy_pct};
pub use stats::{BestRun, HighScoreEntry, QuizStats, LOCAL_HIGH_SCORE_CAP};
