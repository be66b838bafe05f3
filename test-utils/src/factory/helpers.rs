//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a season and a league belonging to it, both with default values.
///
/// # Returns
/// - `Ok((season, league))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::season::Model, entity::league::Model), DbErr> {
    let season = crate::factory::season::create_season(db).await?;
    let league = crate::factory::league::create_league(db, &season.id).await?;

    Ok((season, league))
}
