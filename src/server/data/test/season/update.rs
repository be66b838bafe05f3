use super::*;

/// Tests updating the years and type of a season.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn updates_existing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let season = factory::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    let updated = repo
        .update(
            &season.id,
            SeasonParam {
                start_year: 2030,
                end_year: 2031,
                league_type: LeagueType::Suicide,
            },
        )
        .await?;

    assert_eq!(updated.id, season.id);
    assert_eq!(updated.start_year, 2030);
    assert_eq!(updated.end_year, 2031);
    assert_eq!(updated.league_type, LeagueType::Suicide);

    Ok(())
}

/// Tests updating a season that does not exist.
///
/// Expected: Err(AppError::DbErr(DbErr::RecordNotFound))
#[tokio::test]
async fn fails_for_nonexistent_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = SeasonRepository::new(db);
    let result = repo
        .update(
            "missing",
            SeasonParam {
                start_year: 2030,
                end_year: 2031,
                league_type: LeagueType::Pickem,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(DbErr::RecordNotFound(_)))));

    Ok(())
}
