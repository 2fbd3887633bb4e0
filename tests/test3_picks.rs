mod common;

use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

use common::{preseason, setup_store};
use golf_pool::error::{PickError, PoolError};
use golf_pool::model::{Pick, find_tournament};
use golf_pool::picks::{submit_picks, validate_pick_submission};
use golf_pool::storage::{PicksStore, SqlitePicksStore};

fn picks(names: &[&str]) -> Vec<Pick> {
    names.iter().map(|n| Pick::new(*n)).collect()
}

#[test]
fn validation_rules() -> Result<(), Box<dyn std::error::Error>> {
    let masters = find_tournament("masters-2025").ok_or("masters-2025 missing")?;
    let four = picks(&["A", "B", "C", "D"]);
    let none = BTreeMap::new();

    assert_eq!(validate_pick_submission(&masters, &four, &none, preseason()), Ok(()));

    let after_lock = Utc
        .with_ymd_and_hms(2025, 4, 11, 12, 0, 0)
        .single()
        .ok_or("bad date")?;
    assert_eq!(
        validate_pick_submission(&masters, &four, &none, after_lock),
        Err(PickError::Locked("The Masters".to_string()))
    );

    assert_eq!(
        validate_pick_submission(&masters, &four[..3], &none, preseason()),
        Err(PickError::WrongCount(3))
    );
    assert_eq!(
        validate_pick_submission(&masters, &picks(&["A", "B", "A", "D"]), &none, preseason()),
        Err(PickError::DuplicateInTournament("A".to_string()))
    );

    let mut history = BTreeMap::new();
    history.insert("players-2025".to_string(), picks(&["Z", "Y", "B", "X"]));
    assert_eq!(
        validate_pick_submission(&masters, &four, &history, preseason()),
        Err(PickError::AlreadyUsedThisSeason {
            player: "B".to_string(),
            tournament: "The Players Championship".to_string(),
        })
    );

    // resubmitting the same tournament is not reuse
    let mut resubmit = BTreeMap::new();
    resubmit.insert("masters-2025".to_string(), four.clone());
    assert_eq!(validate_pick_submission(&masters, &four, &resubmit, preseason()), Ok(()));
    Ok(())
}

#[test]
fn lock_is_seven_am_eastern() -> Result<(), Box<dyn std::error::Error>> {
    let players = find_tournament("players-2025").ok_or("players-2025 missing")?;
    let just_before = Utc
        .with_ymd_and_hms(2025, 3, 14, 10, 59, 59)
        .single()
        .ok_or("bad date")?;
    let just_after = Utc
        .with_ymd_and_hms(2025, 3, 14, 11, 0, 1)
        .single()
        .ok_or("bad date")?;
    assert!(!players.is_locked(just_before));
    assert!(players.is_locked(just_after));
    Ok(())
}

#[tokio::test]
async fn store_round_trip_and_replace() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqlitePicksStore::open_in_memory()?;
    store.upsert_user("erin", "Erin").await?;
    store.upsert_user("erin", "Erin K").await?;

    store
        .save_picks("erin", "pga-2025", &[Pick::with_id("D", 4), Pick::new("C"), Pick::new("B"), Pick::new("A")])
        .await?;
    let saved = store.get_picks("erin", "pga-2025").await?;
    let names: Vec<&str> = saved.iter().map(|p| p.player_name.as_str()).collect();
    assert_eq!(names, vec!["D", "C", "B", "A"]);
    assert_eq!(saved[0].player_id, Some(4));

    store.save_picks("erin", "pga-2025", &picks(&["E", "F", "G", "H"])).await?;
    assert_eq!(store.get_picks("erin", "pga-2025").await?, picks(&["E", "F", "G", "H"]));

    let names = store.get_display_names().await?;
    assert_eq!(names.get("erin").map(String::as_str), Some("Erin K"));
    assert!(store.get_picks("erin", "masters-2025").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn submit_checks_season_history() -> Result<(), Box<dyn std::error::Error>> {
    let store = setup_store(include_str!("test1.sql")).await?;

    let reused = submit_picks(
        &store,
        "alice",
        "pga-2025",
        &picks(&["Scottie Scheffler", "B", "C", "D"]),
        preseason(),
    )
    .await;
    assert!(matches!(
        reused,
        Err(PoolError::Pick(PickError::AlreadyUsedThisSeason { .. }))
    ));

    submit_picks(&store, "alice", "pga-2025", &picks(&["A", "B", "C", "D"]), preseason()).await?;
    let history = store.get_user_picks("alice").await?;
    assert_eq!(history.len(), 3);
    assert_eq!(history["pga-2025"], picks(&["A", "B", "C", "D"]));

    let unknown = submit_picks(&store, "alice", "ryder-2025", &picks(&["A", "B", "C", "D"]), preseason()).await;
    assert!(matches!(
        unknown,
        Err(PoolError::Pick(PickError::UnknownTournament(_)))
    ));
    Ok(())
}
