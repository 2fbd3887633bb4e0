use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::pick::Pick;
use crate::model::utils::ordinal;

/// How a single pick fared against a tournament's leaderboard.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickOutcome {
    /// The picked name has no leaderboard entry.
    NotFound,
    /// Withdrew, before or after the cut.
    Withdrawn { rank: Option<i32> },
    MissedCut,
    Finished { rank: i32 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PickResult {
    pub pick: Pick,
    pub outcome: PickOutcome,
    pub points: i32,
}

impl PickResult {
    /// Informational label shown next to the pick.
    #[must_use]
    pub fn label(&self) -> String {
        match self.outcome {
            PickOutcome::NotFound => format!("Not found: {} pts", self.points),
            PickOutcome::Withdrawn { .. } => format!("Withdrawn: {} pts", self.points),
            PickOutcome::MissedCut => format!("Missed cut: {} pts", self.points),
            PickOutcome::Finished { rank } => {
                format!("{} place: {} pts", ordinal(rank), self.points)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentPoints {
    pub total: i32,
    /// Same order as the picks that were scored.
    pub per_pick: Vec<PickResult>,
}

impl TournamentPoints {
    #[must_use]
    pub fn not_found_count(&self) -> usize {
        self.per_pick
            .iter()
            .filter(|p| p.outcome == PickOutcome::NotFound)
            .count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserScore {
    pub user_id: String,
    /// Keyed by tournament name.
    pub per_tournament_points: BTreeMap<String, i32>,
    pub total_points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserTournamentPoints {
    pub user_id: String,
    pub points: TournamentPoints,
}
