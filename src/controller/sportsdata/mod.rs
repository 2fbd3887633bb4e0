mod client;
pub mod processing;

pub use client::{DEFAULT_BASE_URL, SportsDataClient};
pub use processing::process_leaderboard_json;

use async_trait::async_trait;

use crate::error::PoolError;
use crate::model::TournamentResult;

/// Anything that can hand back a tournament's leaderboard.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_leaderboard(&self, tournament_id: i64) -> Result<TournamentResult, PoolError>;
}
