use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Base URL of the player service used to resolve league admins.
    pub player_service_url: Url,

    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = required_var("DATABASE_URL")?;
        let player_service_url =
            parse_service_url("PLAYER_SERVICE_URL", &required_var("PLAYER_SERVICE_URL")?)?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocketAddr {
                var: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        Ok(Self {
            database_url,
            player_service_url,
            bind_address,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an absolute http(s) base URL for a downstream service.
///
/// # Returns
/// - `Ok(Url)` - URL with an http or https scheme
/// - `Err(ConfigError::InvalidUrl)` - Unparseable URL or unsupported scheme
pub fn parse_service_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var: var.to_string(),
        value: value.to_string(),
    };

    let url = Url::parse(value).map_err(|_| invalid())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}
