use super::*;

/// Tests creating a season.
///
/// Verifies the league type is stored as its lowercase name.
///
/// Expected: Ok with season stored under the provided ID
#[tokio::test]
async fn creates_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = SeasonRepository::new(db);
    let season = repo
        .create(
            "season-1".to_string(),
            SeasonParam {
                start_year: 2016,
                end_year: 2017,
                league_type: LeagueType::Suicide,
            },
        )
        .await?;

    assert_eq!(season.id, "season-1");
    assert_eq!(season.start_year, 2016);
    assert_eq!(season.end_year, 2017);
    assert_eq!(season.league_type, LeagueType::Suicide);

    let stored = entity::prelude::Season::find_by_id("season-1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.league_type, "suicide");

    Ok(())
}
