use super::*;

/// Tests finding an existing season.
///
/// Expected: Ok(Some) with the stored years and type
#[tokio::test]
async fn finds_existing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::season::SeasonFactory::new(db)
        .years(2020, 2021)
        .build()
        .await?;

    let repo = SeasonRepository::new(db);
    let found = repo.find_by_id(&season.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.start_year, 2020);
    assert_eq!(found.end_year, 2021);
    assert_eq!(found.league_type, LeagueType::Pickem);

    Ok(())
}

/// Tests finding a season that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = SeasonRepository::new(db);
    let found = repo.find_by_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests reading a season whose stored league type is unknown.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_for_unknown_league_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::season::SeasonFactory::new(db)
        .league_type("survivor")
        .build()
        .await?;

    let repo = SeasonRepository::new(db);
    let result = repo.find_by_id(&season.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
