use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::info;

use crate::error::{PickError, PoolError};
use crate::model::{PICKS_PER_TOURNAMENT, Pick, Tournament, find_tournament, season_schedule};
use crate::storage::{PicksBySlug, PicksStore};

/// Check a user's picks for `tournament` against the pool rules.
///
/// `season_history` holds the user's existing picks keyed by tournament slug.
/// Picks already saved for `tournament` itself are ignored, so resubmitting
/// before the lock replaces them rather than counting as reuse. History for
/// tournaments outside `tournament`'s season is ignored too.
///
/// # Errors
///
/// Will return `Err` with the first rule the submission breaks
pub fn validate_pick_submission(
    tournament: &Tournament,
    picks: &[Pick],
    season_history: &PicksBySlug,
    now: DateTime<Utc>,
) -> Result<(), PickError> {
    if tournament.is_locked(now) {
        return Err(PickError::Locked(tournament.name.clone()));
    }

    if picks.len() != PICKS_PER_TOURNAMENT {
        return Err(PickError::WrongCount(picks.len()));
    }

    let mut seen = HashSet::new();
    for pick in picks {
        if !seen.insert(pick.player_name.as_str()) {
            return Err(PickError::DuplicateInTournament(pick.player_name.clone()));
        }
    }

    let schedule = season_schedule(tournament.season);
    for other in schedule.iter().filter(|t| t.slug != tournament.slug) {
        let Some(previous) = season_history.get(&other.slug) else {
            continue;
        };
        if let Some(reused) = picks
            .iter()
            .find(|p| previous.iter().any(|prev| prev.player_name == p.player_name))
        {
            return Err(PickError::AlreadyUsedThisSeason {
                player: reused.player_name.clone(),
                tournament: other.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validate and persist a user's picks for one tournament.
///
/// # Errors
///
/// Will return `Err` if the tournament is unknown, the picks break a rule, or the store fails
pub async fn submit_picks(
    store: &dyn PicksStore,
    user_id: &str,
    tournament_slug: &str,
    picks: &[Pick],
    now: DateTime<Utc>,
) -> Result<(), PoolError> {
    let tournament = find_tournament(tournament_slug)
        .ok_or_else(|| PickError::UnknownTournament(tournament_slug.to_string()))?;

    let history = store.get_user_picks(user_id).await?;
    validate_pick_submission(&tournament, picks, &history, now)?;
    store.save_picks(user_id, &tournament.slug, picks).await?;

    info!(user_id, tournament = %tournament.name, "picks submitted");
    Ok(())
}
