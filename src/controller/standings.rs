use ahash::RandomState;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

use crate::controller::sportsdata::LeaderboardSource;
use crate::error::PoolError;
use crate::model::{
    Pick, Tournament, TournamentResult, UserScore, UserTournamentPoints, season_schedule,
};
use crate::score::{
    SeasonPicks, UserPicks, compute_season_standings, compute_tournament_breakdown,
};
use crate::storage::{PicksBySlug, PicksStore};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SeasonStandings {
    pub season: i32,
    pub standings: Vec<UserScore>,
    /// Tournament names, in schedule order, that anybody picked for.
    pub tournaments: Vec<String>,
    /// Tournaments whose leaderboard could not be fetched; they count as zero.
    pub unavailable: Vec<String>,
    pub display_names: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentBreakdown {
    pub tournament: Tournament,
    pub rows: Vec<UserTournamentPoints>,
    pub results_available: bool,
    /// False until the tournament locks; `rows` then carry totals but no per-pick detail.
    pub picks_visible: bool,
    pub display_names: BTreeMap<String, String>,
}

pub type ResultsByName = HashMap<String, TournamentResult, RandomState>;

/// Fetch every tournament's leaderboard at once, one request each.
///
/// Failures do not abort the batch: the tournament is left out of the
/// returned results and its name is listed as unavailable.
pub async fn fetch_results(
    source: &dyn LeaderboardSource,
    tournaments: &[&Tournament],
) -> (ResultsByName, Vec<String>) {
    let fetches = tournaments.iter().map(|t| async move {
        let res = source.fetch_leaderboard(t.sportsdata_id).await;
        (*t, res)
    });

    let mut results = ResultsByName::default();
    let mut unavailable = Vec::new();
    for (tournament, res) in join_all(fetches).await {
        match res {
            Ok(result) => {
                info!(
                    tournament = %tournament.name,
                    players = result.entries.len(),
                    "leaderboard loaded"
                );
                results.insert(tournament.name.clone(), result);
            }
            Err(e) => {
                warn!(
                    tournament = %tournament.name,
                    error = %e,
                    "leaderboard unavailable, scoring as no data"
                );
                unavailable.push(tournament.name.clone());
            }
        }
    }
    (results, unavailable)
}

/// Regroup the store's slug-keyed picks under tournament names, keeping only
/// the tournaments on `schedule`. Users with nothing on the schedule stay in
/// with an empty map so they show up with zero points.
#[must_use]
pub fn season_picks_from_store(
    all_picks: BTreeMap<String, PicksBySlug>,
    schedule: &[Tournament],
) -> SeasonPicks {
    all_picks
        .into_iter()
        .map(|(user_id, by_slug)| {
            let by_name: UserPicks = by_slug
                .into_iter()
                .filter_map(|(slug, picks)| {
                    schedule
                        .iter()
                        .find(|t| t.slug == slug)
                        .map(|t| (t.name.clone(), picks))
                })
                .collect();
            (user_id, by_name)
        })
        .collect()
}

/// # Errors
///
/// Will return `Err` if the picks store fails. Leaderboard failures are not errors.
pub async fn load_season_standings(
    store: &dyn PicksStore,
    source: &dyn LeaderboardSource,
    season: i32,
) -> Result<SeasonStandings, PoolError> {
    let schedule = season_schedule(season);
    let season_picks = season_picks_from_store(store.get_all_picks().await?, &schedule);
    let display_names = store.get_display_names().await?;

    let picked: Vec<&Tournament> = schedule
        .iter()
        .filter(|t| season_picks.values().any(|by_name| by_name.contains_key(&t.name)))
        .collect();

    let (results, unavailable) = fetch_results(source, &picked).await;
    let standings = compute_season_standings(&season_picks, &results);

    Ok(SeasonStandings {
        season,
        standings,
        tournaments: picked.iter().map(|t| t.name.clone()).collect(),
        unavailable,
        display_names,
    })
}

/// Per-user points for one tournament. Before the lock time the individual
/// picks are stripped so nobody can copy a rival's selections.
///
/// # Errors
///
/// Will return `Err` if the picks store fails
pub async fn load_tournament_breakdown(
    store: &dyn PicksStore,
    source: &dyn LeaderboardSource,
    tournament: &Tournament,
    now: DateTime<Utc>,
) -> Result<TournamentBreakdown, PoolError> {
    let picks_by_user: BTreeMap<String, Vec<Pick>> = store
        .get_all_picks()
        .await?
        .into_iter()
        .filter_map(|(user_id, mut by_slug)| {
            by_slug.remove(&tournament.slug).map(|picks| (user_id, picks))
        })
        .collect();
    let display_names = store.get_display_names().await?;

    let (mut results, unavailable) = fetch_results(source, &[tournament]).await;
    let result = results
        .remove(&tournament.name)
        .unwrap_or_else(|| TournamentResult::empty(tournament.sportsdata_id));

    let picks_visible = tournament.is_locked(now);
    let mut rows = compute_tournament_breakdown(&picks_by_user, &result);
    if !picks_visible {
        for row in &mut rows {
            row.points.per_pick.clear();
        }
    }

    Ok(TournamentBreakdown {
        tournament: tournament.clone(),
        rows,
        results_available: unavailable.is_empty(),
        picks_visible,
        display_names,
    })
}
