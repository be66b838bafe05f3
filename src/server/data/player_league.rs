//! Player-league membership repository.
//!
//! Memberships form a join table keyed by (league ID, player ID). Besides the key lookups,
//! the repository answers which leagues a player belongs to and which players a league has.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::player_league::PlayerLeague;

pub struct PlayerLeagueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerLeagueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a membership or refreshes the league name and password of an existing one.
    ///
    /// # Returns
    /// - `Ok(PlayerLeague)` - The stored membership
    /// - `Err(DbErr)` - Database error, including a league ID that references no league
    pub async fn upsert(&self, membership: PlayerLeague) -> Result<PlayerLeague, DbErr> {
        let entity = entity::prelude::PlayerLeague::insert(entity::player_league::ActiveModel {
            league_id: ActiveValue::Set(membership.league_id),
            player_id: ActiveValue::Set(membership.player_id),
            league_name: ActiveValue::Set(membership.league_name),
            password: ActiveValue::Set(membership.password),
        })
        .on_conflict(
            OnConflict::columns([
                entity::player_league::Column::LeagueId,
                entity::player_league::Column::PlayerId,
            ])
            .update_columns([
                entity::player_league::Column::LeagueName,
                entity::player_league::Column::Password,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(PlayerLeague::from_entity(entity))
    }

    /// Finds the membership of a player in a league.
    pub async fn find(
        &self,
        league_id: &str,
        player_id: &str,
    ) -> Result<Option<PlayerLeague>, DbErr> {
        let key = (league_id.to_string(), player_id.to_string());
        let entity = entity::prelude::PlayerLeague::find_by_id(key)
            .one(self.db)
            .await?;

        Ok(entity.map(PlayerLeague::from_entity))
    }

    /// Deletes the membership of a player in a league.
    ///
    /// # Returns
    /// - `Ok(true)` - A membership row was deleted
    /// - `Ok(false)` - The player was not a member
    pub async fn delete(&self, league_id: &str, player_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::PlayerLeague::delete_by_id((
            league_id.to_string(),
            player_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the IDs of every league the player belongs to.
    pub async fn get_league_ids_by_player(&self, player_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::PlayerLeague::find()
            .select_only()
            .column(entity::player_league::Column::LeagueId)
            .filter(entity::player_league::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::player_league::Column::LeagueId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the IDs of every player in the league.
    pub async fn get_player_ids_by_league(&self, league_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::PlayerLeague::find()
            .select_only()
            .column(entity::player_league::Column::PlayerId)
            .filter(entity::player_league::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::player_league::Column::PlayerId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes every membership of a league.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships removed
    pub async fn delete_by_league(&self, league_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayerLeague::delete_many()
            .filter(entity::player_league::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
