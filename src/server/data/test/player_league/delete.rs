use super::*;

/// Tests removing a player from a league.
///
/// Verifies only the matching row is deleted; the player's other memberships and
/// other players in the league remain.
///
/// Expected: Ok(true) with exactly one row removed
#[tokio::test]
async fn deletes_only_matching_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (season, league) = factory::helpers::create_league_with_dependencies(db).await?;
    let other_league = factory::create_league(db, &season.id).await?;
    factory::create_membership(db, &league, "11").await?;
    factory::create_membership(db, &league, "12").await?;
    factory::create_membership(db, &other_league, "11").await?;

    let repo = PlayerLeagueRepository::new(db);
    let deleted = repo.delete(&league.id, "11").await?;

    assert!(deleted);
    assert!(repo.find(&league.id, "11").await?.is_none());
    assert!(repo.find(&league.id, "12").await?.is_some());
    assert!(repo.find(&other_league.id, "11").await?.is_some());

    Ok(())
}

/// Tests removing a player who is not a member.
///
/// Expected: Ok(false) with no rows removed
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;
    factory::create_membership(db, &league, "11").await?;

    let repo = PlayerLeagueRepository::new(db);
    let deleted = repo.delete(&league.id, "12").await?;

    assert!(!deleted);
    let count = entity::prelude::PlayerLeague::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
