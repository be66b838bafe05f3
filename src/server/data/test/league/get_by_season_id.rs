use super::*;

/// Tests listing the leagues of one season.
///
/// Verifies that leagues of other seasons are excluded and insertion order is kept.
///
/// Expected: Ok with only the season's leagues
#[tokio::test]
async fn returns_only_leagues_of_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;
    let other_season = factory::create_season(db).await?;
    let first = factory::create_league(db, &season.id).await?;
    factory::create_league(db, &other_season.id).await?;
    let second = factory::create_league(db, &season.id).await?;

    let repo = LeagueRepository::new(db);
    let leagues = repo.get_by_season_id(&season.id).await?;

    let ids: Vec<String> = leagues.into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing leagues for a season without leagues.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_season_without_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::helpers::create_league_with_dependencies(db).await?;
    let empty_season = factory::create_season(db).await?;

    let repo = LeagueRepository::new(db);
    let leagues = repo.get_by_season_id(&empty_season.id).await?;

    assert!(leagues.is_empty());

    Ok(())
}
