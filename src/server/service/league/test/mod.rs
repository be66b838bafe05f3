use crate::server::{
    error::{league::LeagueValidationError, AppError},
    model::{
        league::{LeagueParam, LeagueSettings},
        player_league::JoinLeagueParam,
    },
    service::{league::LeagueService, player::PlayerClient},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use url::Url;


/// Player client pointed at the test context's mock player service.
fn player_client(test: &TestContext) -> PlayerClient {
    PlayerClient::new(
        reqwest::Client::new(),
        Url::parse(&test.player_service_url()).unwrap(),
    )
}

/// League parameters administered by player "11".
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

/// Join request resolving the league by ID.
fn join_by_id(league_id: &str, player_id: &str, password: Option<&str>) -> JoinLeagueParam {
    JoinLeagueParam {
        league_id: Some(league_id.to_string()),
        league_name: None,
        player_id: player_id.to_string(),
        password: password.map(str::to_string),
    }
}

/// Asserts the result failed with the given league rule violation.
fn assert_violation<T: std::fmt::Debug>(
    result: Result<T, AppError>,
    expected: LeagueValidationError,
) {
    match result {
        Err(AppError::LeagueErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {}, got {:?}", expected, other),
    }
}
