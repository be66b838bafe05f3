use super::*;

/// Tests adding a player to a league.
///
/// Expected: Ok with the membership row created
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;

    let repo = PlayerLeagueRepository::new(db);
    let stored = repo.upsert(membership(&league, "11")).await?;

    assert_eq!(stored.league_id, league.id);
    assert_eq!(stored.player_id, "11");
    assert_eq!(stored.league_name, league.league_name);

    let count = entity::prelude::PlayerLeague::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting the same membership twice keeps a single row.
///
/// Verifies the second upsert refreshes the copied league name and password.
///
/// Expected: Ok with one row holding the latest values
#[tokio::test]
async fn refreshes_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;

    let repo = PlayerLeagueRepository::new(db);
    repo.upsert(membership(&league, "11")).await?;

    let mut renamed = membership(&league, "11");
    renamed.league_name = "Renamed League".to_string();
    renamed.password = "new-password".to_string();
    let stored = repo.upsert(renamed).await?;

    assert_eq!(stored.league_name, "Renamed League");
    assert_eq!(stored.password, "new-password");

    let count = entity::prelude::PlayerLeague::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests adding a player to a league that does not exist.
///
/// Expected: Err from the league foreign key
#[tokio::test]
async fn fails_for_nonexistent_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = PlayerLeagueRepository::new(db);
    let result = repo
        .upsert(PlayerLeague {
            league_id: "missing".to_string(),
            player_id: "11".to_string(),
            league_name: "Missing League".to_string(),
            password: "password".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
