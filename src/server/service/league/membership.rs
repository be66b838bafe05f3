//! Joining and leaving leagues.

use std::collections::BTreeSet;

use crate::server::{
    data::{league::LeagueRepository, player_league::PlayerLeagueRepository},
    error::{league::LeagueValidationError, AppError},
    model::{
        league::{League, LeagueName},
        player_league::{JoinLeagueParam, PlayerLeague},
    },
    service::league::LeagueService,
};

impl<'a> LeagueService<'a> {
    /// Adds a player to a league after checking the league password.
    ///
    /// The league is resolved by ID when one is given, otherwise by name. Joining a
    /// league the player is already in succeeds and leaves a single membership.
    ///
    /// # Returns
    /// - `Ok(PlayerLeague)` - The stored membership
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league matched the ID or name
    /// - `Err(AppError::LeagueErr(InvalidLeaguePassword))` - Password does not match
    /// - `Err(AppError::LeagueErr(PlayerIdIsNull))` - Player ID is blank
    pub async fn join_league(&self, param: JoinLeagueParam) -> Result<PlayerLeague, AppError> {
        require_player_id(&param)?;
        let league = self.resolve_league(&param).await?;

        if param.password.as_deref() != Some(league.password.as_str()) {
            return Err(LeagueValidationError::InvalidLeaguePassword.into());
        }

        self.add_membership(league, param.player_id).await
    }

    /// Adds a player to a league on behalf of its admin, without a password.
    ///
    /// # Returns
    /// - `Ok(PlayerLeague)` - The stored membership
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league matched the ID or name
    /// - `Err(AppError::LeagueErr(PlayerIdIsNull))` - Player ID is blank
    pub async fn add_player_to_league_as_admin(
        &self,
        param: JoinLeagueParam,
    ) -> Result<PlayerLeague, AppError> {
        require_player_id(&param)?;
        let league = self.resolve_league(&param).await?;

        self.add_membership(league, param.player_id).await
    }

    /// Removes a player from a league. Removing a non-member is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - The player is no longer a member
    /// - `Err(AppError::LeagueErr(LeagueNotFound))` - No league with that ID
    pub async fn remove_player_from_league(
        &self,
        league_id: &str,
        player_id: &str,
    ) -> Result<(), AppError> {
        if LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .is_none()
        {
            return Err(LeagueValidationError::LeagueNotFound.into());
        }

        let memberships = PlayerLeagueRepository::new(self.db);

        if memberships.find(league_id, player_id).await?.is_none() {
            tracing::debug!(
                "Player {} is not a member of league {}",
                player_id,
                league_id
            );
            return Ok(());
        }

        memberships.delete(league_id, player_id).await?;

        tracing::info!("Player {} left league {}", player_id, league_id);

        Ok(())
    }

    /// Gets the ID, name, and season of every league the player belongs to.
    pub async fn get_leagues_for_player(
        &self,
        player_id: &str,
    ) -> Result<BTreeSet<LeagueName>, AppError> {
        let league_ids = PlayerLeagueRepository::new(self.db)
            .get_league_ids_by_player(player_id)
            .await?;

        let leagues = LeagueRepository::new(self.db).get_by_ids(league_ids).await?;

        Ok(leagues.iter().map(League::to_league_name).collect())
    }

    /// Gets the IDs of every player in the league; empty for unknown leagues.
    pub async fn get_players_in_league(
        &self,
        league_id: &str,
    ) -> Result<BTreeSet<String>, AppError> {
        let player_ids = PlayerLeagueRepository::new(self.db)
            .get_player_ids_by_league(league_id)
            .await?;

        Ok(player_ids.into_iter().collect())
    }

    /// Finds the league a join request refers to: by ID when given, otherwise by name.
    async fn resolve_league(&self, param: &JoinLeagueParam) -> Result<League, AppError> {
        let repo = LeagueRepository::new(self.db);

        let league = match (&param.league_id, &param.league_name) {
            (Some(id), _) => repo.find_by_id(id).await?,
            (None, Some(name)) => repo.find_by_name(name).await?,
            (None, None) => None,
        };

        league.ok_or_else(|| LeagueValidationError::LeagueNotFound.into())
    }

    async fn add_membership(
        &self,
        league: League,
        player_id: String,
    ) -> Result<PlayerLeague, AppError> {
        let membership = PlayerLeagueRepository::new(self.db)
            .upsert(PlayerLeague {
                league_id: league.id,
                player_id,
                league_name: league.league_name,
                password: league.password,
            })
            .await?;

        tracing::info!(
            "Player {} joined league {} ({})",
            membership.player_id,
            membership.league_name,
            membership.league_id
        );

        Ok(membership)
    }
}

fn require_player_id(param: &JoinLeagueParam) -> Result<(), LeagueValidationError> {
    if param.player_id.trim().is_empty() {
        return Err(LeagueValidationError::PlayerIdIsNull);
    }

    Ok(())
}
