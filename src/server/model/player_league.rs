//! Player-league membership domain model and parameters.

use crate::model::league::{MembershipDto, PlayerLeagueDto};

/// A player's membership in a league.
///
/// Keyed by (`league_id`, `player_id`). The league name and password are copied from
/// the league at the time the player joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLeague {
    pub league_id: String,
    pub player_id: String,
    pub league_name: String,
    pub password: String,
}

impl PlayerLeague {
    pub fn from_entity(entity: entity::player_league::Model) -> Self {
        Self {
            league_id: entity.league_id,
            player_id: entity.player_id,
            league_name: entity.league_name,
            password: entity.password,
        }
    }

    /// Converts the membership to a DTO, leaving out the stored password.
    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            league_id: self.league_id,
            player_id: self.player_id,
            league_name: self.league_name,
        }
    }
}

/// Parameters for joining a league.
///
/// The league is resolved by `league_id` when present, otherwise by `league_name`.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinLeagueParam {
    pub league_id: Option<String>,
    pub league_name: Option<String>,
    pub player_id: String,
    pub password: Option<String>,
}

impl From<PlayerLeagueDto> for JoinLeagueParam {
    fn from(dto: PlayerLeagueDto) -> Self {
        Self {
            league_id: non_blank(dto.league_id),
            league_name: non_blank(dto.league_name),
            player_id: dto.player_id,
            password: dto.password,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
