use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::model::{Pick, TournamentResult, UserScore, UserTournamentPoints};
use crate::score::points::compute_tournament_points;

/// Tournament name -> that user's picks.
pub type UserPicks = BTreeMap<String, Vec<Pick>>;
/// User id -> picks for every tournament they entered.
pub type SeasonPicks = BTreeMap<String, UserPicks>;

fn sort_standings(scores: &mut [UserScore]) {
    scores.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}

/// Season totals for every user, best first. Ties go to the lower user id.
///
/// A tournament with no entry in `all_tournament_results` is scored against an
/// empty leaderboard, so every pick in it is worth zero.
#[must_use]
pub fn compute_season_standings<S: BuildHasher>(
    all_users_picks: &SeasonPicks,
    all_tournament_results: &HashMap<String, TournamentResult, S>,
) -> Vec<UserScore> {
    let no_results = TournamentResult::default();

    let mut scores: Vec<UserScore> = all_users_picks
        .iter()
        .map(|(user_id, by_tournament)| {
            let per_tournament_points: BTreeMap<String, i32> = by_tournament
                .iter()
                .map(|(tournament, picks)| {
                    let results = all_tournament_results
                        .get(tournament)
                        .unwrap_or(&no_results);
                    (
                        tournament.clone(),
                        compute_tournament_points(picks, results).total,
                    )
                })
                .collect();

            UserScore {
                user_id: user_id.clone(),
                total_points: per_tournament_points.values().sum(),
                per_tournament_points,
            }
        })
        .collect();

    sort_standings(&mut scores);
    scores
}

/// Per-pick detail for a single tournament, ordered like the standings.
#[must_use]
pub fn compute_tournament_breakdown(
    picks_by_user: &BTreeMap<String, Vec<Pick>>,
    results: &TournamentResult,
) -> Vec<UserTournamentPoints> {
    let mut rows: Vec<UserTournamentPoints> = picks_by_user
        .iter()
        .map(|(user_id, picks)| UserTournamentPoints {
            user_id: user_id.clone(),
            points: compute_tournament_points(picks, results),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .total
            .cmp(&a.points.total)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    rows
}
