mod common;

use serde_json::json;

use common::{FakeLeaderboardSource, players_leaderboard};
use golf_pool::args::validation::validate_json_format;
use golf_pool::controller::db_prefill::db_prefill;
use golf_pool::controller::standings::load_season_standings;
use golf_pool::error::{PickError, PoolError};
use golf_pool::storage::{PicksStore, SqlitePicksStore};

#[tokio::test]
async fn test_dbprefill() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqlitePicksStore::open_in_memory()?;

    // first verify that nothing is there
    assert!(store.get_all_picks().await?.is_empty());

    let json = serde_json::from_str(include_str!("test4_dbprefill.json"))?;
    validate_json_format(&json)?;
    let pick_sets = db_prefill(&json, &store).await?;
    assert_eq!(pick_sets, 3);

    let all = store.get_all_picks().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all["frank"].len(), 2);
    assert_eq!(all["gina"]["players-2025"][0].player_name, "Ludvig Aberg");
    assert!(all["hank"].is_empty());

    // prefilled picks score like any others; masters has no leaderboard here
    let source = FakeLeaderboardSource::default().with(players_leaderboard());
    let data = load_season_standings(&store, &source, 2025).await?;
    let totals: Vec<(&str, i32)> = data
        .standings
        .iter()
        .map(|s| (s.user_id.as_str(), s.total_points))
        .collect();
    // frank: 10 + 7 - 2 - 2, gina: 0 + 2 - 2 - 2
    assert_eq!(totals, vec![("frank", 13), ("hank", 0), ("gina", -2)]);
    Ok(())
}

#[tokio::test]
async fn prefill_rejects_unknown_tournament() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqlitePicksStore::open_in_memory()?;
    let json = json!([
        { "user_id": "ivy", "display_name": "Ivy", "picks": { "ryder-2025": ["A", "B", "C", "D"] } }
    ]);

    let res = db_prefill(&json, &store).await;
    assert!(matches!(
        res,
        Err(PoolError::Pick(PickError::UnknownTournament(ref slug))) if slug == "ryder-2025"
    ));
    Ok(())
}

#[tokio::test]
async fn prefill_reports_repeated_golfer() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqlitePicksStore::open_in_memory()?;
    let json = json!([
        { "user_id": "jack", "display_name": "Jack", "picks": { "masters-2025": ["A", "B", "A", "D"] } }
    ]);

    let res = db_prefill(&json, &store).await;
    let Err(PoolError::Parse(msg)) = &res else {
        panic!("expected a parse error, got {res:?}");
    };
    assert!(msg.contains("jack"));
    assert!(msg.contains("masters-2025"));
    assert!(msg.contains('A'));
    assert!(store.get_picks("jack", "masters-2025").await?.is_empty());
    Ok(())
}
