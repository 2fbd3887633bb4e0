use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use tracing::info;

use crate::error::{PickError, PoolError};
use crate::model::{Pick, find_tournament};
use crate::storage::PicksStore;

#[derive(Deserialize, Debug)]
struct PrefillUser {
    user_id: String,
    display_name: String,
    #[serde(default)]
    picks: BTreeMap<String, Vec<String>>,
}

/// Load users and their historical picks into the store.
///
/// format we have is this:
/// [{ "user_id": "abc", "display_name": "Name", "picks": {
///     "players-2025": ["Golfer One", "Golfer Two", "Golfer Three", "Golfer Four"], ... } }]
///
/// This is an import of picks already made, so lock times are not enforced.
/// Tournament slugs must still be on a known schedule.
///
/// # Errors
///
/// Will return `Err` if the json does not match the format, a slug is unknown, a golfer repeats
/// within one tournament, or the store fails
pub async fn db_prefill(json: &Value, store: &dyn PicksStore) -> Result<usize, PoolError> {
    let users: Vec<PrefillUser> = serde_json::from_value(json.clone())?;

    let mut pick_sets = 0;
    for user in &users {
        store.upsert_user(&user.user_id, &user.display_name).await?;
        for (slug, names) in &user.picks {
            let tournament = find_tournament(slug)
                .ok_or_else(|| PickError::UnknownTournament(slug.clone()))?;
            let mut seen = HashSet::new();
            if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
                return Err(PoolError::Parse(format!(
                    "user {} picks {dup} more than once for {slug}",
                    user.user_id
                )));
            }
            let picks: Vec<Pick> = names.iter().map(|n| Pick::new(n.as_str())).collect();
            store.save_picks(&user.user_id, &tournament.slug, &picks).await?;
            pick_sets += 1;
        }
    }

    info!(users = users.len(), pick_sets, "prefilled picks store");
    Ok(pick_sets)
}
