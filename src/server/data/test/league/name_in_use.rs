use super::*;

/// Tests that a name held by another league is reported as in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;

    let repo = LeagueRepository::new(db);

    assert!(repo.name_in_use(&league.league_name, None).await?);
    assert!(repo.name_in_use(&league.league_name, Some("other")).await?);

    Ok(())
}

/// Tests that a league's own name is not in use when the league is excluded.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let (_, league) = factory::helpers::create_league_with_dependencies(db).await?;

    let repo = LeagueRepository::new(db);
    let in_use = repo
        .name_in_use(&league.league_name, Some(&league.id))
        .await?;

    assert!(!in_use);

    Ok(())
}

/// Tests that an unused name is free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_free_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::helpers::create_league_with_dependencies(db).await?;

    let repo = LeagueRepository::new(db);
    let in_use = repo.name_in_use("Unused Name", None).await?;

    assert!(!in_use);

    Ok(())
}
