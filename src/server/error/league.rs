use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// League and season business rule violations.
///
/// Each variant displays as the symbolic reason code clients match on, which is also
/// the `error` field of the response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueValidationError {
    /// League name is empty or whitespace.
    #[error("LEAGUE_NAME_IS_NULL")]
    LeagueNameIsNull,

    /// Another league already uses the requested name.
    #[error("LEAGUE_NAME_IN_USE")]
    LeagueNameInUse,

    /// Season ID is empty or does not reference an existing season.
    #[error("SEASON_ID_IS_NULL")]
    SeasonIdIsNull,

    /// Admin ID does not resolve to a player known to the player service.
    #[error("ADMIN_NOT_FOUND")]
    AdminNotFound,

    /// No league matched the provided ID or name.
    #[error("LEAGUE_NOT_FOUND")]
    LeagueNotFound,

    /// Player ID of a membership request is empty or whitespace.
    #[error("PLAYER_ID_IS_NULL")]
    PlayerIdIsNull,

    /// Supplied password differs from the league password.
    #[error("INVALID_LEAGUE_PASSWORD")]
    InvalidLeaguePassword,

    /// No season matched the provided ID.
    #[error("SEASON_NOT_FOUND")]
    SeasonNotFound,

    /// Season ends before it starts.
    #[error("INVALID_SEASON_YEARS")]
    InvalidSeasonYears,
}

impl LeagueValidationError {
    /// HTTP status the violation is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::LeagueNotFound | Self::SeasonNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts rule violations into HTTP responses.
///
/// Violations are expected client mistakes, so they are logged at debug level only.
///
/// # Returns
/// - 404 Not Found - For `LeagueNotFound` and `SeasonNotFound`
/// - 400 Bad Request - For every other violation
impl IntoResponse for LeagueValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
