#![forbid(unsafe_code)]

pub mod error;
pub mod leaderboard;
pub mod quiz_service;
pub mod sessions;
pub mod stats_service;

pub use rankquiz_core::Clock;

pub use error::{LeaderboardError, SessionError, StatsError};
pub use leaderboard::{GlobalScoreEntry, LeaderboardConfig, LeaderboardGateway, REMOTE_TOP_CAP};
pub use quiz_service::{FinishOutcome, QuizService};
pub use sessions::{Advance, AnswerOutcome, OPTION_COUNT, QuizSession, SessionProgress};
pub use stats_service::StatsService;
