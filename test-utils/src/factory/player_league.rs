//! Membership factory for creating player-league rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a player to a league, copying the league's name and password onto the row the
/// way a successful join does.
///
/// # Arguments
/// - `db` - Database connection
/// - `league` - Existing league the player joins
/// - `player_id` - ID of the joining player
///
/// # Returns
/// - `Ok(entity::player_league::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_membership(
    db: &DatabaseConnection,
    league: &entity::league::Model,
    player_id: &str,
) -> Result<entity::player_league::Model, DbErr> {
    entity::player_league::ActiveModel {
        league_id: ActiveValue::Set(league.id.clone()),
        player_id: ActiveValue::Set(player_id.to_string()),
        league_name: ActiveValue::Set(league.league_name.clone()),
        password: ActiveValue::Set(league.password.clone()),
    }
    .insert(db)
    .await
}
