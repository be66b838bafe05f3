//! League data repository for database operations.
//!
//! Provides the `LeagueRepository` for creating, querying, updating, and deleting leagues,
//! converting entity models into league domain models at the repository boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::league::{League, LeagueParam};

/// Repository providing database operations for league management.
pub struct LeagueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueRepository<'a> {
    /// Creates a new LeagueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LeagueRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new league with the provided ID.
    ///
    /// # Arguments
    /// - `id` - ID of the new league
    /// - `param` - League fields
    ///
    /// # Returns
    /// - `Ok(League)` - The created league
    /// - `Err(DbErr)` - Database error during insert, including a duplicate ID or name
    pub async fn create(&self, id: String, param: LeagueParam) -> Result<League, DbErr> {
        let mut active_model = to_active_model(param);
        active_model.id = ActiveValue::Set(id);

        let entity = active_model.insert(self.db).await?;

        Ok(League::from_entity(entity))
    }

    /// Finds a league by ID.
    ///
    /// # Returns
    /// - `Ok(Some(League))` - League found
    /// - `Ok(None)` - No league with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<League>, DbErr> {
        let entity = entity::prelude::League::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(League::from_entity))
    }

    /// Finds a league by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(League))` - League found
    /// - `Ok(None)` - No league with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, league_name: &str) -> Result<Option<League>, DbErr> {
        let entity = entity::prelude::League::find()
            .filter(entity::league::Column::LeagueName.eq(league_name))
            .one(self.db)
            .await?;

        Ok(entity.map(League::from_entity))
    }

    /// Checks whether a league other than `exclude_id` already uses the name.
    ///
    /// # Arguments
    /// - `league_name` - Name to check
    /// - `exclude_id` - League to ignore, used when a league keeps its own name on update
    ///
    /// # Returns
    /// - `Ok(true)` - Another league has this name
    /// - `Ok(false)` - The name is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn name_in_use(
        &self,
        league_name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::League::find()
            .filter(entity::league::Column::LeagueName.eq(league_name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::league::Column::Id.ne(id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets every league in repository order.
    pub async fn get_all(&self) -> Result<Vec<League>, DbErr> {
        let entities = entity::prelude::League::find().all(self.db).await?;

        Ok(entities.into_iter().map(League::from_entity).collect())
    }

    /// Gets the leagues of a season in repository order.
    pub async fn get_by_season_id(&self, season_id: &str) -> Result<Vec<League>, DbErr> {
        let entities = entity::prelude::League::find()
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(League::from_entity).collect())
    }

    /// Gets the leagues with the provided IDs. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<League>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::League::find()
            .filter(entity::league::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(League::from_entity).collect())
    }

    /// Overwrites every field of an existing league.
    ///
    /// # Returns
    /// - `Ok(League)` - The updated league
    /// - `Err(DbErr::RecordNotFound)` - No league with that ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: &str, param: LeagueParam) -> Result<League, DbErr> {
        let existing = entity::prelude::League::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("League with id {} not found", id)))?;

        let mut active_model = to_active_model(param);
        active_model.id = ActiveValue::Unchanged(existing.id);

        let entity = active_model.update(self.db).await?;

        Ok(League::from_entity(entity))
    }

    /// Deletes the league with the provided ID. Deleting a missing league is a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::League::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn to_active_model(param: LeagueParam) -> entity::league::ActiveModel {
    let settings = param.settings;

    entity::league::ActiveModel {
        id: ActiveValue::NotSet,
        league_name: ActiveValue::Set(param.league_name),
        admin_id: ActiveValue::Set(param.admin_id),
        season_id: ActiveValue::Set(param.season_id),
        password: ActiveValue::Set(param.password),
        active: ActiveValue::Set(param.active),
        paid_for: ActiveValue::Set(settings.paid_for),
        money: ActiveValue::Set(settings.money),
        free: ActiveValue::Set(settings.free),
        spreads: ActiveValue::Set(settings.spreads),
        double_enabled: ActiveValue::Set(settings.double_enabled),
        banker: ActiveValue::Set(settings.banker),
        double_type: ActiveValue::Set(settings.double_type),
        entry_fee: ActiveValue::Set(settings.entry_fee),
        weekly_fee: ActiveValue::Set(settings.weekly_fee),
        first_place_percent: ActiveValue::Set(settings.first_place_percent),
        second_place_percent: ActiveValue::Set(settings.second_place_percent),
        third_place_percent: ActiveValue::Set(settings.third_place_percent),
        fourth_place_percent: ActiveValue::Set(settings.fourth_place_percent),
        fifth_place_percent: ActiveValue::Set(settings.fifth_place_percent),
    }
}
