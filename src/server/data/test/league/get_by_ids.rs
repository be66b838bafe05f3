use super::*;

/// Tests fetching leagues by a list of IDs.
///
/// Verifies that only the requested leagues are returned and unknown IDs are skipped.
///
/// Expected: Ok with the two requested leagues
#[tokio::test]
async fn returns_requested_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;
    let first = factory::create_league(db, &season.id).await?;
    factory::create_league(db, &season.id).await?;
    let third = factory::create_league(db, &season.id).await?;

    let repo = LeagueRepository::new(db);
    let ids = vec![first.id.clone(), third.id.clone(), "gone".to_string()];
    let leagues = repo.get_by_ids(ids).await?;

    let mut ids: Vec<String> = leagues.into_iter().map(|l| l.id).collect();
    ids.sort();
    let mut expected = vec![first.id, third.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests fetching leagues with an empty ID list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::helpers::create_league_with_dependencies(db).await?;

    let repo = LeagueRepository::new(db);
    let leagues = repo.get_by_ids(Vec::new()).await?;

    assert!(leagues.is_empty());

    Ok(())
}
