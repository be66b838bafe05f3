use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        league::{LeagueDto, UpsertLeagueDto},
        season::LeagueType,
    },
    server::{
        error::{league::LeagueValidationError, AppError},
        model::league::{League, LeagueParam},
        service::league::LeagueService,
        state::AppState,
    },
};

/// Tag for grouping league endpoints in OpenAPI documentation
pub static LEAGUE_TAG: &str = "league";

/// Get all leagues.
///
/// # Returns
/// - `200 OK` - Every league, in the order they were created
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/leagues/",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "All leagues", body = Vec<LeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_leagues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let leagues = service.get_all_leagues().await?;

    Ok(Json(into_dtos(leagues)))
}

/// Create a new league.
///
/// Any `id` in the body is ignored; the league gets a generated ID. The league name must
/// be unused, the season must exist, and the admin must be a known player.
///
/// # Arguments
/// - `state` - Application state containing the database connection and player client
/// - `payload` - League fields
///
/// # Returns
/// - `200 OK` - The created league
/// - `400 Bad Request` - `LEAGUE_NAME_IS_NULL`, `LEAGUE_NAME_IN_USE`, `SEASON_ID_IS_NULL`,
///   or `ADMIN_NOT_FOUND`
/// - `500 Internal Server Error` - Database or player service error
#[utoipa::path(
    post,
    path = "/leagues/",
    tag = LEAGUE_TAG,
    request_body = UpsertLeagueDto,
    responses(
        (status = 200, description = "Created league", body = LeagueDto),
        (status = 400, description = "League rule violated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    Json(payload): Json<UpsertLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let league = service.create_league(LeagueParam::from_dto(payload)).await?;

    Ok(Json(league.into_dto()))
}

/// Update an existing league.
///
/// The league to update is identified by the `id` field of the body.
///
/// # Returns
/// - `200 OK` - The updated league
/// - `400 Bad Request` - League rule violated
/// - `404 Not Found` - `LEAGUE_NOT_FOUND` when the ID is missing or unknown
/// - `500 Internal Server Error` - Database or player service error
#[utoipa::path(
    put,
    path = "/leagues/",
    tag = LEAGUE_TAG,
    request_body = UpsertLeagueDto,
    responses(
        (status = 200, description = "Updated league", body = LeagueDto),
        (status = 400, description = "League rule violated", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_league(
    State(state): State<AppState>,
    Json(mut payload): Json<UpsertLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .filter(|id| !id.trim().is_empty())
        .ok_or(LeagueValidationError::LeagueNotFound)?;

    let service = LeagueService::new(&state.db, &state.player_client);

    let league = service
        .update_league(&id, LeagueParam::from_dto(payload))
        .await?;

    Ok(Json(league.into_dto()))
}

/// Get the league types a season can host.
#[utoipa::path(
    get,
    path = "/leagues/types",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "League types", body = Vec<LeagueType>)
    ),
)]
pub async fn get_league_types() -> impl IntoResponse {
    Json(LeagueService::league_types())
}

/// Get a league by ID.
///
/// # Returns
/// - `200 OK` - The league, or `null` when no league has that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/leagues/{id}",
    tag = LEAGUE_TAG,
    params(
        ("id" = String, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "League, or null when none matches", body = LeagueDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let league = service.get_league_by_id(&id).await?;

    Ok(Json(league.map(League::into_dto)))
}

/// Delete a league and every membership in it.
///
/// # Returns
/// - `200 OK` - `true`
/// - `404 Not Found` - `LEAGUE_NOT_FOUND`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/leagues/{id}",
    tag = LEAGUE_TAG,
    params(
        ("id" = String, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "League deleted", body = bool),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    service.delete_league(&id).await?;

    Ok(Json(true))
}

/// Get the leagues of a season.
#[utoipa::path(
    get,
    path = "/leagues/seasons/{seasonId}",
    tag = LEAGUE_TAG,
    params(
        ("seasonId" = String, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Leagues of the season", body = Vec<LeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leagues_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let leagues = service.get_leagues_by_season_id(&season_id).await?;

    Ok(Json(into_dtos(leagues)))
}

/// Get a league by its exact name.
///
/// # Returns
/// - `200 OK` - The league, or `null` when no league has that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/leagues/name/{name}",
    tag = LEAGUE_TAG,
    params(
        ("name" = String, Path, description = "League name")
    ),
    responses(
        (status = 200, description = "League, or null when none matches", body = LeagueDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeagueService::new(&state.db, &state.player_client);

    let league = service.get_league_by_name(&name).await?;

    Ok(Json(league.map(League::into_dto)))
}

fn into_dtos(leagues: Vec<League>) -> Vec<LeagueDto> {
    leagues.into_iter().map(League::into_dto).collect()
}
