#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use golf_pool::controller::sportsdata::LeaderboardSource;
use golf_pool::error::PoolError;
use golf_pool::model::{LeaderboardEntry, TournamentResult};
use golf_pool::state::AppState;
use golf_pool::storage::SqlitePicksStore;

/// Serves canned leaderboards keyed by SportsData tournament id.
/// Ids with no entry fail like an unreachable upstream.
#[derive(Default)]
pub struct FakeLeaderboardSource {
    pub results: HashMap<i64, TournamentResult>,
}

impl FakeLeaderboardSource {
    pub fn with(mut self, result: TournamentResult) -> Self {
        self.results.insert(result.tournament_id, result);
        self
    }
}

#[async_trait]
impl LeaderboardSource for FakeLeaderboardSource {
    async fn fetch_leaderboard(&self, tournament_id: i64) -> Result<TournamentResult, PoolError> {
        self.results
            .get(&tournament_id)
            .cloned()
            .ok_or_else(|| PoolError::Network(format!("no leaderboard for {tournament_id}")))
    }
}

pub const PLAYERS_ID: i64 = 654;
pub const MASTERS_ID: i64 = 628;

pub fn players_leaderboard() -> TournamentResult {
    TournamentResult::new(
        PLAYERS_ID,
        vec![
            LeaderboardEntry::ranked("Scottie Scheffler", 1),
            LeaderboardEntry::ranked("Rory McIlroy", 2),
            LeaderboardEntry::ranked("Xander Schauffele", 3),
            LeaderboardEntry::ranked("Collin Morikawa", 11),
            LeaderboardEntry::ranked("Ludvig Aberg", 45),
            LeaderboardEntry::unranked("Jon Rahm", "Cut"),
            LeaderboardEntry::unranked("Tony Finau", "Cut"),
        ],
    )
}

pub fn masters_leaderboard() -> TournamentResult {
    TournamentResult::new(
        MASTERS_ID,
        vec![
            LeaderboardEntry::ranked("Justin Thomas", 1),
            LeaderboardEntry::unranked("Jon Rahm", "Cut"),
            LeaderboardEntry::unranked("Tony Finau", "Cut"),
            LeaderboardEntry::unranked("Jordan Spieth", "Withdrawn"),
        ],
    )
}

/// In-memory store with the schema plus `fixture_sql` applied.
pub async fn setup_store(fixture_sql: &str) -> Result<SqlitePicksStore, PoolError> {
    let store = SqlitePicksStore::open_in_memory()?;
    store.execute_batch(fixture_sql).await?;
    Ok(store)
}

pub fn app_state(store: SqlitePicksStore, source: FakeLeaderboardSource) -> AppState {
    AppState::new(Arc::new(store), Arc::new(source), 2025, true)
}

/// Same as [`app_state`] with the clock pinned to `now`.
pub fn app_state_at(
    store: SqlitePicksStore,
    source: FakeLeaderboardSource,
    now: DateTime<Utc>,
) -> AppState {
    app_state(store, source).with_fixed_now(now)
}

/// Before any 2025 tournament locked.
pub fn preseason() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid preseason date")
}

/// After every 2025 tournament locked.
pub fn season_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0)
        .single()
        .expect("valid season end date")
}
