use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Kind of competition a season hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeagueType {
    Pickem,
    Suicide,
}

impl LeagueType {
    /// All league types, in the order the API lists them.
    pub const ALL: [LeagueType; 2] = [LeagueType::Pickem, LeagueType::Suicide];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pickem => "pickem",
            Self::Suicide => "suicide",
        }
    }
}

impl fmt::Display for LeagueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeagueType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LeagueType::ALL
            .into_iter()
            .find(|league_type| league_type.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

/// A season as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: String,
    pub start_year: i32,
    pub end_year: i32,
    pub league_type: LeagueType,
}

/// Request body for creating or updating a season. `id` is ignored on create and
/// required on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSeasonDto {
    #[serde(default)]
    pub id: Option<String>,
    pub start_year: i32,
    pub end_year: i32,
    pub league_type: LeagueType,
}
