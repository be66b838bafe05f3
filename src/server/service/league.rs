//! League lifecycle and validation.
//!
//! `LeagueService` enforces the league rules before anything is stored: a league needs
//! a name no other league uses, an existing season, and an admin the player service
//! knows. Joining and leaving leagues lives in [`membership`].

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::{
    model::season::LeagueType,
    server::{
        data::{
            league::LeagueRepository, player_league::PlayerLeagueRepository,
            season::SeasonRepository,
        },
        error::{league::LeagueValidationError, AppError},
        model::league::{League, LeagueParam},
        service::player::PlayerClient,
    },
};

pub mod membership;

#[cfg(test)]
mod test;

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
    players: &'a PlayerClient,
}

impl<'a> LeagueService<'a> {
    /// Creates a new LeagueService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `players` - Client used to check that league admins exist
    pub fn new(db: &'a DatabaseConnection, players: &'a PlayerClient) -> Self {
        Self { db, players }
    }

    /// Checks a league against the league rules, stopping at the first violation.
    ///
    /// Rules are checked in this order:
    /// 1. The name is not blank
    /// 2. No other league uses the name
    /// 3. The season ID is not blank and names an existing season
    /// 4. The admin ID names a player known to the player service
    ///
    /// # Arguments
    /// - `league_id` - ID of the league being updated, or `None` when creating
    /// - `param` - League fields to check
    ///
    /// # Returns
    /// - `Ok(())` - All rules pass
    /// - `Err(AppError::LeagueErr)` - The first violated rule
    /// - `Err(AppError)` - Database or player service failure
    pub async fn validate_league(
        &self,
        league_id: Option<&str>,
        param: &LeagueParam,
    ) -> Result<(), AppError> {
        if param.league_name.trim().is_empty() {
            return Err(LeagueValidationError::LeagueNameIsNull.into());
        }

        let league_repo = LeagueRepository::new(self.db);
        if league_repo
            .name_in_use(&param.league_name, league_id)
            .await?
        {
            return Err(LeagueValidationError::LeagueNameInUse.into());
        }

        let season_repo = SeasonRepository::new(self.db);
        if param.season_id.trim().is_empty() || !season_repo.exists(&param.season_id).await? {
            return Err(LeagueValidationError::SeasonIdIsNull.into());
        }

        if param.admin_id.trim().is_empty()
            || !self.players.player_exists(&param.admin_id).await?
        {
            return Err(LeagueValidationError::AdminNotFound.into());
        }

        Ok(())
    }

    /// Validates and stores a new league under a freshly generated ID.
    pub async fn create_league(&self, param: LeagueParam) -> Result<League, AppError> {
        self.validate_league(None, &param).await?;

        let id = Uuid::new_v4().to_string();
        let league = LeagueRepository::new(self.db)
            .create(id, param)
            .await
            .map_err(name_conflict)?;

        tracing::info!(
            "Created league {} ({}) in season {}",
            league.league_name,
            league.id,
            league.season_id
        );

        Ok(league)
    }

    /// Validates and overwrites an existing league.
    ///
    /// The league keeps its own name without tripping the name-in-use rule.
    ///
    /// # Returns
    /// - `Ok(League)` - The updated league
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that ID
    /// - `Err(AppError::LeagueErr)` - A league rule was violated
    pub async fn update_league(&self, id: &str, param: LeagueParam) -> Result<League, AppError> {
        let repo = LeagueRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(LeagueValidationError::LeagueNotFound.into());
        }

        self.validate_league(Some(id), &param).await?;

        let league = repo.update(id, param).await.map_err(name_conflict)?;

        tracing::info!("Updated league {} ({})", league.league_name, league.id);

        Ok(league)
    }

    /// Gets every league in the order they were created.
    pub async fn get_all_leagues(&self) -> Result<Vec<League>, AppError> {
        Ok(LeagueRepository::new(self.db).get_all().await?)
    }

    pub async fn get_league_by_id(&self, id: &str) -> Result<Option<League>, AppError> {
        Ok(LeagueRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_league_by_name(&self, league_name: &str) -> Result<Option<League>, AppError> {
        Ok(LeagueRepository::new(self.db)
            .find_by_name(league_name)
            .await?)
    }

    /// Gets the leagues of a season; empty when the season has none or does not exist.
    pub async fn get_leagues_by_season_id(&self, season_id: &str) -> Result<Vec<League>, AppError> {
        Ok(LeagueRepository::new(self.db)
            .get_by_season_id(season_id)
            .await?)
    }

    /// Deletes a league together with every membership in it.
    ///
    /// # Returns
    /// - `Ok(())` - League and memberships removed
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that ID
    pub async fn delete_league(&self, id: &str) -> Result<(), AppError> {
        let league_repo = LeagueRepository::new(self.db);

        let Some(league) = league_repo.find_by_id(id).await? else {
            return Err(LeagueValidationError::LeagueNotFound.into());
        };

        let removed = PlayerLeagueRepository::new(self.db)
            .delete_by_league(&league.id)
            .await?;
        league_repo.delete(&league.id).await?;

        tracing::info!(
            "Deleted league {} ({}) and {} memberships",
            league.league_name,
            league.id,
            removed
        );

        Ok(())
    }

    /// League types a season can host.
    pub fn league_types() -> Vec<LeagueType> {
        LeagueType::ALL.to_vec()
    }
}

/// Maps a unique constraint failure on a league write to `LeagueNameInUse`.
///
/// A concurrent request can claim the name between `validate_league` and the write.
fn name_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => LeagueValidationError::LeagueNameInUse.into(),
        _ => err.into(),
    }
}
