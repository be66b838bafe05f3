//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let season = SeasonFactory::new(&db)
///     .years(2016, 2017)
///     .league_type("suicide")
///     .build()
///     .await?;
/// ```
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    start_year: i32,
    end_year: i32,
    league_type: String,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - id: `"season_{id}"` where id is auto-incremented
    /// - start_year / end_year: `2024` / `2025`
    /// - league_type: `"pickem"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: format!("season_{}", next_id()),
            start_year: 2024,
            end_year: 2025,
            league_type: "pickem".to_string(),
        }
    }

    /// Sets the season ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the start and end year of the season.
    pub fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Sets the league type stored on the season.
    pub fn league_type(mut self, league_type: impl Into<String>) -> Self {
        self.league_type = league_type.into();
        self
    }

    /// Builds and inserts the season entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::season::Model)` - Created season entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::Set(self.id),
            start_year: ActiveValue::Set(self.start_year),
            end_year: ActiveValue::Set(self.end_year),
            league_type: ActiveValue::Set(self.league_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season with default values.
///
/// Shorthand for `SeasonFactory::new(db).build().await`.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
