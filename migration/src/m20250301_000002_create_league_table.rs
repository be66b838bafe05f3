use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(string(League::Id).primary_key())
                    .col(string_uniq(League::LeagueName))
                    .col(string(League::AdminId))
                    .col(string(League::SeasonId))
                    .col(string(League::Password))
                    .col(boolean(League::Active))
                    .col(integer(League::PaidFor))
                    .col(boolean(League::Money))
                    .col(boolean(League::Free))
                    .col(boolean(League::Spreads))
                    .col(boolean(League::DoubleEnabled))
                    .col(boolean(League::Banker))
                    .col(integer(League::DoubleType))
                    .col(double(League::EntryFee))
                    .col(double(League::WeeklyFee))
                    .col(integer(League::FirstPlacePercent))
                    .col(integer(League::SecondPlacePercent))
                    .col(integer(League::ThirdPlacePercent))
                    .col(integer(League::FourthPlacePercent))
                    .col(integer(League::FifthPlacePercent))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_season_id")
                            .from(League::Table, League::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_league_season_id")
                    .table(League::Table)
                    .col(League::SeasonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    LeagueName,
    AdminId,
    SeasonId,
    Password,
    Active,
    PaidFor,
    Money,
    Free,
    Spreads,
    DoubleEnabled,
    Banker,
    DoubleType,
    EntryFee,
    WeeklyFee,
    FirstPlacePercent,
    SecondPlacePercent,
    ThirdPlacePercent,
    FourthPlacePercent,
    FifthPlacePercent,
}
