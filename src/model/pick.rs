use serde::{Deserialize, Serialize};

/// Number of golfers a user selects per tournament.
pub const PICKS_PER_TOURNAMENT: usize = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pick {
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
}

impl Pick {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: None,
        }
    }

    #[must_use]
    pub fn with_id(player_name: impl Into<String>, player_id: i64) -> Self {
        Self {
            player_name: player_name.into(),
            player_id: Some(player_id),
        }
    }
}

impl From<&str> for Pick {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pick {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
