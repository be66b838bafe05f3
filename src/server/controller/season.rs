use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Datelike;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        season::{LeagueType, SeasonDto, UpsertSeasonDto},
    },
    server::{
        error::{league::LeagueValidationError, AppError},
        model::season::{Season, SeasonParam},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CurrentSeasonParams {
    /// League type, `pickem` when omitted
    pub league_type: Option<LeagueType>,
    /// Year the seasons must cover, the current year when omitted
    pub year: Option<i32>,
}

/// Create a new season.
///
/// Any `id` in the body is ignored; the season gets a generated ID.
///
/// # Returns
/// - `200 OK` - The created season
/// - `400 Bad Request` - `INVALID_SEASON_YEARS`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/seasons/",
    tag = SEASON_TAG,
    request_body = UpsertSeasonDto,
    responses(
        (status = 200, description = "Created season", body = SeasonDto),
        (status = 400, description = "Season ends before it starts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeasonService::new(&state.db);

    let season = service.create_season(SeasonParam::from(payload)).await?;

    Ok(Json(season.into_dto()))
}

/// Update an existing season identified by the `id` field of the body.
///
/// # Returns
/// - `200 OK` - The updated season
/// - `400 Bad Request` - `INVALID_SEASON_YEARS`
/// - `404 Not Found` - `SEASON_NOT_FOUND` when the ID is missing or unknown
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/seasons/",
    tag = SEASON_TAG,
    request_body = UpsertSeasonDto,
    responses(
        (status = 200, description = "Updated season", body = SeasonDto),
        (status = 400, description = "Season ends before it starts", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    Json(mut payload): Json<UpsertSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload
        .id
        .take()
        .filter(|id| !id.trim().is_empty())
        .ok_or(LeagueValidationError::SeasonNotFound)?;

    let service = SeasonService::new(&state.db);

    let season = service
        .update_season(&id, SeasonParam::from(payload))
        .await?;

    Ok(Json(season.into_dto()))
}

/// Get the seasons of a league type running during a year.
#[utoipa::path(
    get,
    path = "/seasons/current",
    tag = SEASON_TAG,
    params(CurrentSeasonParams),
    responses(
        (status = 200, description = "Current seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_seasons(
    State(state): State<AppState>,
    Query(params): Query<CurrentSeasonParams>,
) -> Result<impl IntoResponse, AppError> {
    let league_type = params.league_type.unwrap_or(LeagueType::Pickem);
    let year = params.year.unwrap_or_else(|| chrono::Utc::now().year());

    let service = SeasonService::new(&state.db);

    let seasons = service.get_current_seasons(league_type, year).await?;

    Ok(Json(into_dtos(seasons)))
}

/// Get the seasons of a league type.
///
/// An unknown league type has no seasons.
#[utoipa::path(
    get,
    path = "/seasons/type/{leagueType}",
    tag = SEASON_TAG,
    params(
        ("leagueType" = String, Path, description = "League type, e.g. `pickem`")
    ),
    responses(
        (status = 200, description = "Seasons of the league type", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons_by_league_type(
    State(state): State<AppState>,
    Path(league_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(league_type) = league_type.parse::<LeagueType>() else {
        return Ok(Json(Vec::<SeasonDto>::new()));
    };

    let service = SeasonService::new(&state.db);

    let seasons = service.get_seasons_by_league_type(league_type).await?;

    Ok(Json(into_dtos(seasons)))
}

/// Delete a season along with its leagues.
///
/// # Returns
/// - `200 OK` - `true` when a season was deleted, `false` when none had the ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/seasons/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = String, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Whether a season was deleted", body = bool),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeasonService::new(&state.db);

    let deleted = service.delete_season(&id).await?;

    Ok(Json(deleted))
}

fn into_dtos(seasons: Vec<Season>) -> Vec<SeasonDto> {
    seasons.into_iter().map(Season::into_dto).collect()
}
