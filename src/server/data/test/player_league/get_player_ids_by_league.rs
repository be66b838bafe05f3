use super::*;

/// Tests listing the players of a league.
///
/// Expected: Ok with the league's player IDs sorted ascending
#[tokio::test]
async fn returns_players_of_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (season, league) = factory::helpers::create_league_with_dependencies(db).await?;
    let other_league = factory::create_league(db, &season.id).await?;
    factory::create_membership(db, &league, "12").await?;
    factory::create_membership(db, &league, "11").await?;
    factory::create_membership(db, &other_league, "13").await?;

    let repo = PlayerLeagueRepository::new(db);
    let ids = repo.get_player_ids_by_league(&league.id).await?;

    assert_eq!(ids, vec!["11".to_string(), "12".to_string()]);

    Ok(())
}
