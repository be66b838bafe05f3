//! Client for the player service.
//!
//! Leagues reference players by ID only; the player service owns the player records.
//! The league service asks it whether an admin ID names a real player before storing
//! a league.

use reqwest::StatusCode;
use url::Url;

use crate::server::error::AppError;

/// HTTP client for looking up players in the player service.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct PlayerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PlayerClient {
    /// Creates a new PlayerClient.
    ///
    /// # Arguments
    /// - `http` - HTTP client used for requests
    /// - `base_url` - Base URL of the player service, e.g. `http://player-service:8080`
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Checks whether a player with the provided ID exists.
    ///
    /// Sends `GET {base_url}/players/{player_id}`.
    ///
    /// # Returns
    /// - `Ok(true)` - The player service answered with a success status
    /// - `Ok(false)` - The player service answered `404 Not Found`
    /// - `Err(AppError::ReqwestErr)` - The player service could not be reached
    /// - `Err(AppError::InternalError)` - The player service answered with any other status
    pub async fn player_exists(&self, player_id: &str) -> Result<bool, AppError> {
        let url = self.player_url(player_id)?;

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Player {} not found in player service", player_id);
            return Ok(false);
        }

        Err(AppError::InternalError(format!(
            "Player service answered {} for player {}",
            status, player_id
        )))
    }

    /// Builds the lookup URL for a player, percent-encoding the ID as one path segment.
    fn player_url(&self, player_id: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                AppError::InternalError(format!(
                    "Player service URL {} cannot be a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("players")
            .push(player_id);

        Ok(url)
    }
}
