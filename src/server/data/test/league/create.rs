use super::*;

/// Tests creating a league with all fields.
///
/// Verifies that the repository stores the provided ID and every field of the
/// parameters, including the payout settings.
///
/// Expected: Ok with league stored under the provided ID
#[tokio::test]
async fn creates_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;

    let mut param = league_param(&season.id, "Indian Cricket League");
    param.settings.money = true;
    param.settings.entry_fee = 20.0;
    param.settings.first_place_percent = 60;

    let repo = LeagueRepository::new(db);
    let league = repo.create("league-1".to_string(), param.clone()).await?;

    assert_eq!(league.id, "league-1");
    assert_eq!(league.league_name, "Indian Cricket League");
    assert_eq!(league.season_id, season.id);
    assert_eq!(league.settings, param.settings);

    let stored = entity::prelude::League::find_by_id("league-1".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().entry_fee, 20.0);

    Ok(())
}

/// Tests that the league name column is unique.
///
/// Expected: Err when inserting a second league with the same name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;

    let repo = LeagueRepository::new(db);
    repo.create("first".to_string(), league_param(&season.id, "Duplicate"))
        .await?;
    let result = repo
        .create("second".to_string(), league_param(&season.id, "Duplicate"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests creating a league in a season that does not exist.
///
/// Expected: Err from the season foreign key
#[tokio::test]
async fn fails_for_nonexistent_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = LeagueRepository::new(db);
    let result = repo
        .create("league-1".to_string(), league_param("missing", "Orphan"))
        .await;

    assert!(result.is_err());

    Ok(())
}
