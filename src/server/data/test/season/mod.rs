use crate::{
    model::season::LeagueType,
    server::{data::season::SeasonRepository, error::AppError, model::season::SeasonParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_by_league_type;
mod update;
