use super::*;

/// Tests listing the leagues a player belongs to.
///
/// Expected: Ok with the IDs of both joined leagues
#[tokio::test]
async fn returns_leagues_of_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (season, first) = factory::helpers::create_league_with_dependencies(db).await?;
    let second = factory::create_league(db, &season.id).await?;
    let not_joined = factory::create_league(db, &season.id).await?;
    factory::create_membership(db, &first, "11").await?;
    factory::create_membership(db, &second, "11").await?;
    factory::create_membership(db, &not_joined, "12").await?;

    let repo = PlayerLeagueRepository::new(db);
    let mut ids = repo.get_league_ids_by_player("11").await?;
    ids.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing leagues for a player without memberships.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_player_without_leagues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;
    factory::create_membership(db, &league, "11").await?;

    let repo = PlayerLeagueRepository::new(db);
    let ids = repo.get_league_ids_by_player("99").await?;

    assert!(ids.is_empty());

    Ok(())
}
