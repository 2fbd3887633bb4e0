use serde_json::Value;
use tracing::warn;

use crate::error::PoolError;
use crate::model::{LeaderboardEntry, TournamentResult};

/// Turn a `LeaderboardBasic` response into a [`TournamentResult`].
///
/// Accepts either the usual `{ "Tournament": {..}, "Players": [..] }` object or
/// a bare array of players. Players without a name are dropped.
///
/// # Errors
///
/// Will return `Err` if the payload has neither shape
pub fn process_leaderboard_json(
    tournament_id: i64,
    json: &Value,
) -> Result<TournamentResult, PoolError> {
    let players = match json {
        Value::Array(players) => players,
        Value::Object(_) => json
            .get("Players")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                PoolError::Parse(format!(
                    "leaderboard for tournament {tournament_id} has no Players array"
                ))
            })?,
        _ => {
            return Err(PoolError::Parse(format!(
                "leaderboard for tournament {tournament_id} is not an object or array"
            )));
        }
    };

    let entries = players.iter().filter_map(process_player).collect();
    Ok(TournamentResult::new(tournament_id, entries))
}

/// `Rank` may come as `3` or `3.0`; null or missing means no finishing position.
fn read_rank(player_name: &str, rank: Option<&Value>) -> Option<i32> {
    let value = rank.filter(|v| !v.is_null())?;
    let parsed = value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        })
        .and_then(|r| i32::try_from(r).ok());
    if parsed.is_none() {
        warn!(player = player_name, rank = %value, "ignoring unreadable leaderboard rank");
    }
    parsed
}

fn process_player(player: &Value) -> Option<LeaderboardEntry> {
    let player_name = player.get("Name").and_then(Value::as_str)?;
    if player_name.is_empty() {
        return None;
    }

    let rank = read_rank(player_name, player.get("Rank"));
    let status = ["Status", "TotalStatus"]
        .iter()
        .find_map(|key| player.get(*key).and_then(Value::as_str))
        .unwrap_or("")
        .to_string();

    Some(LeaderboardEntry {
        player_name: player_name.to_string(),
        player_id: player.get("PlayerID").and_then(Value::as_i64),
        rank,
        status,
        is_withdrawn: player
            .get("IsWithdrawn")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}
