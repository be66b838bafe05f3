use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        league::{LeagueNameDto, MembershipDto, PlayerLeagueDto},
    },
    server::{
        error::{league::LeagueValidationError, AppError},
        model::{league::LeagueName, player_league::JoinLeagueParam},
        service::league::LeagueService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

/// Join a league.
///
/// The league is resolved by `leagueId`, or by `leagueName` when no ID is given. The
/// password must match the league password. Joining twice is harmless.
///
/// # Returns
/// - `200 OK` - The membership
/// - `400 Bad Request` - `PLAYER_ID_IS_NULL` or `INVALID_LEAGUE_PASSWORD`
/// - `404 Not Found` - `LEAGUE_NOT_FOUND`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/leagues/player",
    tag = MEMBERSHIP_TAG,
    request_body = PlayerLeagueDto,
    responses(
        (status = 200, description = "Joined league", body = MembershipDto),
        (status = 400, description = "Blank player ID or wrong password", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_league(
    State(state): State<AppState>,
    Json(payload): Json<PlayerLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let membership = service.join_league(JoinLeagueParam::from(payload)).await?;

    Ok(Json(membership.into_dto()))
}

/// Leave a league.
///
/// Only `leagueId` and `playerId` of the body are used. Leaving a league the player is
/// not in succeeds without changes.
///
/// # Returns
/// - `200 OK` - The player is no longer a member
/// - `404 Not Found` - `LEAGUE_NOT_FOUND`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/leagues/player",
    tag = MEMBERSHIP_TAG,
    request_body = PlayerLeagueDto,
    responses(
        (status = 200, description = "Left league"),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_league(
    State(state): State<AppState>,
    Json(payload): Json<PlayerLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = JoinLeagueParam::from(payload);
    let league_id = param
        .league_id
        .ok_or(LeagueValidationError::LeagueNotFound)?;

    let service = LeagueService::new(&state.db, &state.player_client);

    service
        .remove_player_from_league(&league_id, &param.player_id)
        .await?;

    Ok(())
}

/// Add a player to a league as its admin.
///
/// Same as joining, without the password check.
///
/// # Returns
/// - `200 OK` - The membership
/// - `400 Bad Request` - `PLAYER_ID_IS_NULL`
/// - `404 Not Found` - `LEAGUE_NOT_FOUND`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/leagues/player/admin",
    tag = MEMBERSHIP_TAG,
    request_body = PlayerLeagueDto,
    responses(
        (status = 200, description = "Player added", body = MembershipDto),
        (status = 400, description = "Blank player ID", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_player_as_admin(
    State(state): State<AppState>,
    Json(payload): Json<PlayerLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let membership = service
        .add_player_to_league_as_admin(JoinLeagueParam::from(payload))
        .await?;

    Ok(Json(membership.into_dto()))
}

/// Get the leagues a player belongs to.
#[utoipa::path(
    get,
    path = "/leagues/player/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = String, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Leagues of the player", body = Vec<LeagueNameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leagues_for_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let leagues = service.get_leagues_for_player(&player_id).await?;

    let dtos: Vec<LeagueNameDto> = leagues.into_iter().map(LeagueName::into_dto).collect();

    Ok(Json(dtos))
}

/// Get the IDs of the players in a league.
#[utoipa::path(
    get,
    path = "/leagues/player/leagueid/{leagueId}",
    tag = MEMBERSHIP_TAG,
    params(
        ("leagueId" = String, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "Player IDs", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_in_league(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let players: Vec<String> = service
        .get_players_in_league(&league_id)
        .await?
        .into_iter()
        .collect();

    Ok(Json(players))
}
