use super::*;

/// Tests listing seasons of one league type.
///
/// Expected: Ok with only the matching seasons, in insertion order
#[tokio::test]
async fn returns_only_matching_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let first = factory::create_season(db).await?;
    factory::season::SeasonFactory::new(db)
        .league_type("suicide")
        .build()
        .await?;
    let second = factory::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    let seasons = repo.get_by_league_type(LeagueType::Pickem).await?;

    let ids: Vec<String> = seasons.into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing a league type without seasons.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_type_without_seasons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    let seasons = repo.get_by_league_type(LeagueType::Suicide).await?;

    assert!(seasons.is_empty());

    Ok(())
}
