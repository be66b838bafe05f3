//! Season data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    model::season::LeagueType,
    server::{
        error::AppError,
        model::season::{Season, SeasonParam},
    },
};

/// Repository providing database operations for season management.
pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new season with the provided ID.
    ///
    /// # Returns
    /// - `Ok(Season)` - The created season
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, id: String, param: SeasonParam) -> Result<Season, AppError> {
        let entity = entity::season::ActiveModel {
            id: ActiveValue::Set(id),
            start_year: ActiveValue::Set(param.start_year),
            end_year: ActiveValue::Set(param.end_year),
            league_type: ActiveValue::Set(param.league_type.to_string()),
        }
        .insert(self.db)
        .await?;

        Season::from_entity(entity)
    }

    /// Finds a season by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Season))` - Season found
    /// - `Ok(None)` - No season with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalError)` - Stored league type is unknown
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Season>, AppError> {
        entity::prelude::Season::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Season::from_entity)
            .transpose()
    }

    /// Checks whether a season with the provided ID exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Season::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all seasons of a league type in repository order.
    pub async fn get_by_league_type(
        &self,
        league_type: LeagueType,
    ) -> Result<Vec<Season>, AppError> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::LeagueType.eq(league_type.as_str()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Season::from_entity)
            .collect()
    }

    /// Overwrites the years and league type of an existing season.
    ///
    /// # Returns
    /// - `Ok(Season)` - The updated season
    /// - `Err(AppError::DbErr(DbErr::RecordNotFound))` - No season with that ID
    pub async fn update(&self, id: &str, param: SeasonParam) -> Result<Season, AppError> {
        let season = entity::prelude::Season::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Season with id {} not found", id)))?;

        let mut active_model: entity::season::ActiveModel = season.into();
        active_model.start_year = ActiveValue::Set(param.start_year);
        active_model.end_year = ActiveValue::Set(param.end_year);
        active_model.league_type = ActiveValue::Set(param.league_type.to_string());

        let entity = active_model.update(self.db).await?;

        Season::from_entity(entity)
    }

    /// Deletes the season with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The season was deleted
    /// - `Ok(false)` - No season with that ID
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Season::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
