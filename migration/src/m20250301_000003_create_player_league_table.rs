use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerLeague::Table)
                    .if_not_exists()
                    .col(string(PlayerLeague::LeagueId))
                    .col(string(PlayerLeague::PlayerId))
                    .col(string(PlayerLeague::LeagueName))
                    .col(string(PlayerLeague::Password))
                    .primary_key(
                        Index::create()
                            .col(PlayerLeague::LeagueId)
                            .col(PlayerLeague::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_league_league_id")
                            .from(PlayerLeague::Table, PlayerLeague::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_league_player_id")
                    .table(PlayerLeague::Table)
                    .col(PlayerLeague::PlayerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerLeague::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerLeague {
    Table,
    LeagueId,
    PlayerId,
    LeagueName,
    Password,
}
