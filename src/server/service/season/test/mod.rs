use crate::{
    model::season::LeagueType,
    server::{
        error::{league::LeagueValidationError, AppError},
        model::season::SeasonParam,
        service::season::SeasonService,
    },
};
use test_utils::{builder::TestBuilder, factory};


fn season_param(start_year: i32, end_year: i32, league_type: LeagueType) -> SeasonParam {
    SeasonParam {
        start_year,
        end_year,
        league_type,
    }
}
