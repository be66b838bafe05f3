use crate::server::{
    data::league::LeagueRepository,
    model::league::{LeagueParam, LeagueSettings},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod get_by_ids;
mod get_by_season_id;
mod name_in_use;

/// League parameters with the given name in the given season.
fn league_param(season_id: &str, league_name: &str) -> LeagueParam {
    LeagueParam {
        league_name: league_name.to_string(),
        admin_id: "11".to_string(),
        season_id: season_id.to_string(),
        password: "password".to_string(),
        active: true,
        settings: LeagueSettings {
            free: true,
            ..Default::default()
        },
    }
}
