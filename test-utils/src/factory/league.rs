//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues with customizable fields.
///
/// Only the fields league rules depend on are customizable; fee and payout columns are
/// zeroed.
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    season_id: String,
    league_name: String,
    admin_id: String,
    password: String,
    active: bool,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory with default values.
    ///
    /// Defaults:
    /// - id: `"league_{id}"` where id is auto-incremented
    /// - league_name: `"League {id}"`
    /// - admin_id: `"admin_{id}"`
    /// - password: `"football"`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `season_id` - ID of an existing season the league belongs to
    pub fn new(db: &'a DatabaseConnection, season_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("league_{}", id),
            season_id: season_id.to_string(),
            league_name: format!("League {}", id),
            admin_id: format!("admin_{}", id),
            password: "football".to_string(),
            active: true,
        }
    }

    /// Sets the league ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the league name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.league_name = name.into();
        self
    }

    /// Sets the ID of the admin player.
    pub fn admin_id(mut self, admin_id: impl Into<String>) -> Self {
        self.admin_id = admin_id.into();
        self
    }

    /// Sets the join password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets whether the league is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the league entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::league::Model)` - Created league entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            id: ActiveValue::Set(self.id),
            league_name: ActiveValue::Set(self.league_name),
            admin_id: ActiveValue::Set(self.admin_id),
            season_id: ActiveValue::Set(self.season_id),
            password: ActiveValue::Set(self.password),
            active: ActiveValue::Set(self.active),
            paid_for: ActiveValue::Set(0),
            money: ActiveValue::Set(false),
            free: ActiveValue::Set(true),
            spreads: ActiveValue::Set(false),
            double_enabled: ActiveValue::Set(false),
            banker: ActiveValue::Set(false),
            double_type: ActiveValue::Set(0),
            entry_fee: ActiveValue::Set(0.0),
            weekly_fee: ActiveValue::Set(0.0),
            first_place_percent: ActiveValue::Set(0),
            second_place_percent: ActiveValue::Set(0),
            third_place_percent: ActiveValue::Set(0),
            fourth_place_percent: ActiveValue::Set(0),
            fifth_place_percent: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values in the provided season.
///
/// Shorthand for `LeagueFactory::new(db, season_id).build().await`.
pub async fn create_league(
    db: &DatabaseConnection,
    season_id: &str,
) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db, season_id).build().await
}
