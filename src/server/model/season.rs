//! Season domain models and parameters.

use crate::{
    model::season::{LeagueType, SeasonDto, UpsertSeasonDto},
    server::error::AppError,
};

/// A time-boxed container of leagues of one league type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: String,
    pub start_year: i32,
    pub end_year: i32,
    pub league_type: LeagueType,
}

impl Season {
    /// Converts an entity model to the season domain model.
    ///
    /// # Returns
    /// - `Ok(Season)` - The converted season domain model
    /// - `Err(AppError::InternalError)` - Stored league type is not a known league type
    pub fn from_entity(entity: entity::season::Model) -> Result<Self, AppError> {
        let league_type = entity.league_type.parse::<LeagueType>().map_err(|value| {
            AppError::InternalError(format!(
                "Season {} has unknown league type '{}'",
                entity.id, value
            ))
        })?;

        Ok(Self {
            id: entity.id,
            start_year: entity.start_year,
            end_year: entity.end_year,
            league_type,
        })
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            start_year: self.start_year,
            end_year: self.end_year,
            league_type: self.league_type,
        }
    }

    /// Whether the season runs during the given year.
    pub fn covers_year(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// Parameters for creating or updating a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonParam {
    pub start_year: i32,
    pub end_year: i32,
    pub league_type: LeagueType,
}

impl From<UpsertSeasonDto> for SeasonParam {
    fn from(dto: UpsertSeasonDto) -> Self {
        Self {
            start_year: dto.start_year,
            end_year: dto.end_year,
            league_type: dto.league_type,
        }
    }
}
