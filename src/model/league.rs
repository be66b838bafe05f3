use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A league as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: String,
    pub league_name: String,
    pub admin_id: String,
    pub season_id: String,
    pub password: String,
    pub active: bool,
    pub paid_for: i32,
    pub money: bool,
    pub free: bool,
    pub spreads: bool,
    pub double_enabled: bool,
    pub banker: bool,
    pub double_type: i32,
    pub entry_fee: f64,
    pub weekly_fee: f64,
    pub first_place_percent: i32,
    pub second_place_percent: i32,
    pub third_place_percent: i32,
    pub fourth_place_percent: i32,
    pub fifth_place_percent: i32,
}

/// Request body for creating or updating a league.
///
/// Every field is optional on the wire; missing strings arrive empty so that the
/// league rules, not the JSON extractor, decide what is invalid. `id` is ignored on
/// create and required on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertLeagueDto {
    pub id: Option<String>,
    pub league_name: String,
    pub admin_id: String,
    pub season_id: String,
    pub password: String,
    pub active: bool,
    pub paid_for: i32,
    pub money: bool,
    pub free: bool,
    pub spreads: bool,
    pub double_enabled: bool,
    pub banker: bool,
    pub double_type: i32,
    pub entry_fee: f64,
    pub weekly_fee: f64,
    pub first_place_percent: i32,
    pub second_place_percent: i32,
    pub third_place_percent: i32,
    pub fourth_place_percent: i32,
    pub fifth_place_percent: i32,
}

/// Short description of a league a player belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueNameDto {
    pub league_id: String,
    pub league_name: String,
    pub season_id: String,
}

/// Request body for joining or leaving a league.
///
/// Joining resolves the league by `leagueId` first and falls back to `leagueName`.
/// Leaving only uses `leagueId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeagueDto {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub league_name: Option<String>,
    pub player_id: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// A player's membership in a league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub league_id: String,
    pub player_id: String,
    pub league_name: String,
}
