use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, error};

use super::LeaderboardSource;
use super::processing::process_leaderboard_json;
use crate::error::PoolError;
use crate::model::TournamentResult;

pub const DEFAULT_BASE_URL: &str = "https://api.sportsdata.io/golf/v2/json";

/// Bytes of an upstream error body kept in the error message.
const ERROR_PREVIEW_LEN: usize = 200;

pub struct SportsDataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SportsDataClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn leaderboard_url(&self, tournament_id: i64) -> String {
        format!(
            "{}/LeaderboardBasic/{tournament_id}",
            self.base_url.trim_end_matches('/')
        )
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(ERROR_PREVIEW_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl LeaderboardSource for SportsDataClient {
    async fn fetch_leaderboard(&self, tournament_id: i64) -> Result<TournamentResult, PoolError> {
        if self.api_key.is_empty() {
            return Err(PoolError::Other("SportsData API key not configured".into()));
        }

        let url = self.leaderboard_url(tournament_id);
        debug!(url = %url, "requesting leaderboard");

        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(tournament_id, %status, "leaderboard request failed");
            return Err(PoolError::Network(format!(
                "leaderboard request for {tournament_id} failed with {status}: {}",
                preview(&body)
            )));
        }

        if !content_type.contains("application/json") {
            let body = resp.text().await.unwrap_or_default();
            return Err(PoolError::Network(format!(
                "unexpected response format ({content_type}) for {tournament_id}: {}",
                preview(&body)
            )));
        }

        let json: Value = resp.json().await?;
        process_leaderboard_json(tournament_id, &json)
    }
}
