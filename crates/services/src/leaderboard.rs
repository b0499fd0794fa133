use std::env;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use rankquiz_core::model::{Branch, CompletedRun};

use crate::error::LeaderboardError;

/// Maximum number of remotely retained entries returned per branch.
pub const REMOTE_TOP_CAP: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One row of the remote `global_scores` table.
///
/// Wire field names match the remote schema; `date` is an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalScoreEntry {
    pub user_name: String,
    pub score: u32,
    #[serde(rename = "accuracy")]
    pub accuracy_pct: u8,
    #[serde(rename = "time")]
    pub time_ms: u64,
    pub service: Branch,
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl GlobalScoreEntry {
    #[must_use]
    pub fn from_run(run: &CompletedRun, user_name: &str, recorded_at: DateTime<Utc>) -> Self {
        Self {
            user_name: user_name.to_string(),
            score: run.score,
            accuracy_pct: run.accuracy_pct,
            time_ms: run.elapsed_ms,
            service: run.branch,
            recorded_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LeaderboardConfig {
    pub base_url: String,
    pub api_key: String,
}

impl LeaderboardConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("RANKQUIZ_LEADERBOARD_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let api_key = env::var("RANKQUIZ_LEADERBOARD_KEY").unwrap_or_default();
        Some(Self { base_url, api_key })
    }
}

/// HTTP client for the remote leaderboard store.
///
/// Speaks the PostgREST dialect against a `global_scores` table: one insert
/// per submit, one ordered query for the top entries. No retries; one attempt
/// per call, bounded by [`REQUEST_TIMEOUT`], and every failure comes back as
/// an error for the caller to surface.
#[derive(Clone)]
pub struct LeaderboardGateway {
    client: Client,
    config: Option<LeaderboardConfig>,
}

impl LeaderboardGateway {
    /// Build a gateway from the process environment; an unset endpoint
    /// yields a disabled gateway whose calls return
    /// [`LeaderboardError::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Http` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, LeaderboardError> {
        Self::new(LeaderboardConfig::from_env())
    }

    /// Build a gateway with an explicit configuration, `None` for disabled.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Http` if the HTTP client cannot be built.
    pub fn new(config: Option<LeaderboardConfig>) -> Result<Self, LeaderboardError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    fn scores_url(config: &LeaderboardConfig) -> String {
        format!(
            "{}/rest/v1/global_scores",
            config.base_url.trim_end_matches('/')
        )
    }

    /// Insert one entry. Returns `true` on acceptance; a single attempt, no
    /// retry.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Disabled` without configuration, `Http` on
    /// network failure and `HttpStatus` on a rejecting server.
    pub async fn submit(&self, entry: &GlobalScoreEntry) -> Result<bool, LeaderboardError> {
        let config = self.config.as_ref().ok_or(LeaderboardError::Disabled)?;

        let response = self
            .client
            .post(Self::scores_url(config))
            .header("apikey", &config.api_key)
            .bearer_auth(&config.api_key)
            .json(&[entry])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LeaderboardError::HttpStatus(response.status()));
        }
        Ok(true)
    }

    /// Fetch the top entries for a branch, ordered by (score desc, time asc)
    /// and capped at [`REMOTE_TOP_CAP`].
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Disabled` without configuration, `Http` on
    /// network failure and `HttpStatus` on a rejecting server.
    pub async fn fetch_top(&self, branch: Branch) -> Result<Vec<GlobalScoreEntry>, LeaderboardError> {
        let config = self.config.as_ref().ok_or(LeaderboardError::Disabled)?;

        let response = self
            .client
            .get(Self::scores_url(config))
            .header("apikey", &config.api_key)
            .bearer_auth(&config.api_key)
            .query(&[
                ("select", "*".to_string()),
                ("service", format!("eq.{branch}")),
                ("order", "score.desc,time.asc".to_string()),
                ("limit", REMOTE_TOP_CAP.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LeaderboardError::HttpStatus(response.status()));
        }

        let mut entries: Vec<GlobalScoreEntry> = response.json().await?;
        // Re-apply the ordering and cap locally; the invariant must hold even
        // against a server that ignores the query parameters.
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.time_ms.cmp(&b.time_ms))
        });
        entries.truncate(REMOTE_TOP_CAP);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankquiz_core::model::RunId;
    use rankquiz_core::time::fixed_now;

    #[test]
    fn disabled_gateway_reports_disabled() {
        let gateway = LeaderboardGateway::new(None).unwrap();
        assert!(!gateway.enabled());
    }

    #[tokio::test]
    async fn disabled_gateway_rejects_calls() {
        let gateway = LeaderboardGateway::new(None).unwrap();
        let run = CompletedRun::new(RunId::new(1), Branch::Navy, 10, 19, 60_000);
        let entry = GlobalScoreEntry::from_run(&run, "ada", fixed_now());

        assert!(matches!(
            gateway.submit(&entry).await,
            Err(LeaderboardError::Disabled)
        ));
        assert!(matches!(
            gateway.fetch_top(Branch::Navy).await,
            Err(LeaderboardError::Disabled)
        ));
    }

    #[test]
    fn entry_serializes_with_wire_names() {
        let run = CompletedRun::new(RunId::new(1), Branch::Air, 15, 19, 72_500);
        let entry = GlobalScoreEntry::from_run(&run, "sam", fixed_now());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["user_name"], "sam");
        assert_eq!(json["score"], 15);
        assert_eq!(json["accuracy"], 79);
        assert_eq!(json["time"], 72_500);
        assert_eq!(json["service"], "air");
        assert!(json["date"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn entry_wire_round_trip() {
        let run = CompletedRun::new(RunId::new(9), Branch::Combined, 40, 57, 180_000);
        let entry = GlobalScoreEntry::from_run(&run, "jo", fixed_now());
        let json = serde_json::to_string(&entry).unwrap();
        let back: GlobalScoreEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
