use super::*;

/// Tests finding a league by its exact name.
///
/// Expected: Ok(Some) with the matching league
#[tokio::test]
async fn finds_league_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;
    let league = factory::league::LeagueFactory::new(db, &season.id)
        .name("Indian Cricket League")
        .build()
        .await?;
    factory::create_league(db, &season.id).await?;

    let repo = LeagueRepository::new(db);
    let found = repo.find_by_name("Indian Cricket League").await?;

    assert_eq!(found.map(|l| l.id), Some(league.id));

    Ok(())
}

/// Tests that the name lookup does not match partial names.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_partial_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;
    factory::league::LeagueFactory::new(db, &season.id)
        .name("Indian Cricket League")
        .build()
        .await?;

    let repo = LeagueRepository::new(db);
    let found = repo.find_by_name("Indian").await?;

    assert!(found.is_none());

    Ok(())
}
