use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_name: String,
    #[serde(default)]
    pub player_id: Option<i64>,
    /// `None` means the player has no finishing position: missed the cut, or withdrew.
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_withdrawn: bool,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn ranked(player_name: impl Into<String>, rank: i32) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: None,
            rank: Some(rank),
            status: "Active".to_string(),
            is_withdrawn: false,
        }
    }

    #[must_use]
    pub fn unranked(player_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: None,
            rank: None,
            status: status.into(),
            is_withdrawn: false,
        }
    }

    /// True when the feed flags the player as withdrawn, either through the
    /// explicit flag or a status mentioning "withdrawn" / "withdrawal".
    ///
    /// # Panics
    ///
    /// Will panic if the regex is invalid
    #[must_use]
    pub fn withdrawn(&self) -> bool {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"(?i)withdraw(n|al)")
                .expect("Invalid regex pattern - this is a programming error")
        });
        self.is_withdrawn || re.is_match(&self.status)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentResult {
    pub tournament_id: i64,
    pub entries: Vec<LeaderboardEntry>,
}

impl TournamentResult {
    #[must_use]
    pub fn new(tournament_id: i64, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            tournament_id,
            entries,
        }
    }

    #[must_use]
    pub fn empty(tournament_id: i64) -> Self {
        Self::new(tournament_id, Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive match on the player's name. First hit wins.
    #[must_use]
    pub fn find_player(&self, player_name: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.player_name == player_name)
    }
}
