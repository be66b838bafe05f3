use super::*;

/// Tests removing every membership of a league.
///
/// Expected: Ok with the league's rows removed and other leagues untouched
#[tokio::test]
async fn deletes_all_memberships_of_league() -> Result<(), DbErr> {
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
    let removed = repo.delete_by_league(&league.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_player_ids_by_league(&league.id).await?.is_empty());
    assert_eq!(
        repo.get_player_ids_by_league(&other_league.id).await?,
        vec!["11".to_string()]
    );

    Ok(())
}
