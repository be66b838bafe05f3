use super::*;

/// Tests finding a membership by league and player.
///
/// Expected: Ok(Some) for the member, Ok(None) for a non-member
#[tokio::test]
async fn finds_membership_by_composite_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;
    factory::create_membership(db, &league, "11").await?;

    let repo = PlayerLeagueRepository::new(db);

    let found = repo.find(&league.id, "11").await?;
    assert_eq!(found, Some(membership(&league, "11")));

    assert!(repo.find(&league.id, "12").await?.is_none());
    assert!(repo.find("missing", "11").await?.is_none());

    Ok(())
}
