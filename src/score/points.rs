use crate::model::{Pick, PickOutcome, PickResult, TournamentPoints, TournamentResult};

pub const MISSED_CUT_POINTS: i32 = -2;
pub const WITHDRAWN_POINTS: i32 = 0;
pub const NOT_FOUND_POINTS: i32 = 0;

/// Points for a finishing position. Anything outside the top 30 scores nothing.
#[must_use]
pub fn points_for_rank(rank: i32) -> i32 {
    match rank {
        1 => 10,
        2 => 7,
        3 => 6,
        4 => 5,
        5 => 4,
        6..=10 => 3,
        11..=20 => 2,
        21..=30 => 1,
        _ => 0,
    }
}

impl PickOutcome {
    #[must_use]
    pub fn points(self) -> i32 {
        match self {
            Self::NotFound => NOT_FOUND_POINTS,
            Self::Withdrawn { .. } => WITHDRAWN_POINTS,
            Self::MissedCut => MISSED_CUT_POINTS,
            Self::Finished { rank } => points_for_rank(rank),
        }
    }
}

/// Pre-cut and post-cut withdrawals land in the same bucket.
#[must_use]
pub fn classify_pick(pick: &Pick, results: &TournamentResult) -> PickOutcome {
    let Some(entry) = results.find_player(&pick.player_name) else {
        return PickOutcome::NotFound;
    };

    match (entry.rank, entry.withdrawn()) {
        (rank, true) => PickOutcome::Withdrawn { rank },
        (None, false) => PickOutcome::MissedCut,
        (Some(rank), false) => PickOutcome::Finished { rank },
    }
}

/// Score a user's picks for one tournament.
///
/// Never fails: a short pick list, an empty leaderboard or unknown names all
/// degrade to zero-point outcomes. The total has no floor.
#[must_use]
pub fn compute_tournament_points(picks: &[Pick], results: &TournamentResult) -> TournamentPoints {
    let per_pick: Vec<PickResult> = picks
        .iter()
        .map(|pick| {
            let outcome = classify_pick(pick, results);
            PickResult {
                pick: pick.clone(),
                outcome,
                points: outcome.points(),
            }
        })
        .collect();

    TournamentPoints {
        total: per_pick.iter().map(|p| p.points).sum(),
        per_pick,
    }
}
