//! Season management.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::season::LeagueType,
    server::{
        data::season::SeasonRepository,
        error::{league::LeagueValidationError, AppError},
        model::season::{Season, SeasonParam},
    },
};

#[cfg(test)]
mod test;

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new season under a freshly generated ID.
    ///
    /// # Returns
    /// - `Ok(Season)` - The created season
    /// - `Err(AppError::LeagueErr(InvalidSeasonYears))` - Season ends before it starts
    pub async fn create_season(&self, param: SeasonParam) -> Result<Season, AppError> {
        validate_years(&param)?;

        let id = Uuid::new_v4().to_string();
        let season = SeasonRepository::new(self.db).create(id, param).await?;

        tracing::info!(
            "Created {} season {} ({}-{})",
            season.league_type,
            season.id,
            season.start_year,
            season.end_year
        );

        Ok(season)
    }

    /// Overwrites the years and league type of an existing season.
    ///
    /// # Returns
    /// - `Ok(Season)` - The updated season
    /// - `Err(AppError::LeagueErr(SeasonNotFound))` - No season with that ID
    /// - `Err(AppError::LeagueErr(InvalidSeasonYears))` - Season ends before it starts
    pub async fn update_season(&self, id: &str, param: SeasonParam) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(LeagueValidationError::SeasonNotFound.into());
        }

        validate_years(&param)?;

        let season = repo.update(id, param).await?;

        tracing::info!("Updated season {}", season.id);

        Ok(season)
    }

    pub async fn get_seasons_by_league_type(
        &self,
        league_type: LeagueType,
    ) -> Result<Vec<Season>, AppError> {
        SeasonRepository::new(self.db)
            .get_by_league_type(league_type)
            .await
    }

    /// Gets the seasons of a league type that run during the given year.
    ///
    /// A season runs during every year from its start year to its end year inclusive.
    pub async fn get_current_seasons(
        &self,
        league_type: LeagueType,
        year: i32,
    ) -> Result<Vec<Season>, AppError> {
        let seasons = self.get_seasons_by_league_type(league_type).await?;

        Ok(seasons
            .into_iter()
            .filter(|season| season.covers_year(year))
            .collect())
    }

    /// Deletes a season and, through the foreign key, its leagues.
    ///
    /// # Returns
    /// - `Ok(true)` - The season was deleted
    /// - `Ok(false)` - No season with that ID
    pub async fn delete_season(&self, id: &str) -> Result<bool, AppError> {
        let deleted = SeasonRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted season {}", id);
        }

        Ok(deleted)
    }
}

fn validate_years(param: &SeasonParam) -> Result<(), LeagueValidationError> {
    if param.end_year < param.start_year {
        return Err(LeagueValidationError::InvalidSeasonYears);
    }

    Ok(())
}
