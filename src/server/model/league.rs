//! League domain models and parameters.
//!
//! Defines the league domain model, the parameters used to create and update leagues,
//! and the short `LeagueName` view returned when listing a player's leagues.

use crate::model::league::{LeagueDto, LeagueNameDto, UpsertLeagueDto};

/// A pick'em or suicide competition within a season.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: String,
    pub league_name: String,
    /// ID of the player administering the league.
    pub admin_id: String,
    pub season_id: String,
    /// Password players must supply to join.
    pub password: String,
    pub active: bool,
    pub settings: LeagueSettings,
}

/// Payout and scoring options of a league.
///
/// None of these take part in league rules; they are stored and returned as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSettings {
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

impl League {
    /// Converts an entity model to the league domain model.
    pub fn from_entity(entity: entity::league::Model) -> Self {
        Self {
            id: entity.id,
            league_name: entity.league_name,
            admin_id: entity.admin_id,
            season_id: entity.season_id,
            password: entity.password,
            active: entity.active,
            settings: LeagueSettings {
                paid_for: entity.paid_for,
                money: entity.money,
                free: entity.free,
                spreads: entity.spreads,
                double_enabled: entity.double_enabled,
                banker: entity.banker,
                double_type: entity.double_type,
                entry_fee: entity.entry_fee,
                weekly_fee: entity.weekly_fee,
                first_place_percent: entity.first_place_percent,
                second_place_percent: entity.second_place_percent,
                third_place_percent: entity.third_place_percent,
                fourth_place_percent: entity.fourth_place_percent,
                fifth_place_percent: entity.fifth_place_percent,
            },
        }
    }

    /// Converts the league domain model to a DTO for API responses.
    pub fn into_dto(self) -> LeagueDto {
        let settings = self.settings;

        LeagueDto {
            id: self.id,
            league_name: self.league_name,
            admin_id: self.admin_id,
            season_id: self.season_id,
            password: self.password,
            active: self.active,
            paid_for: settings.paid_for,
            money: settings.money,
            free: settings.free,
            spreads: settings.spreads,
            double_enabled: settings.double_enabled,
            banker: settings.banker,
            double_type: settings.double_type,
            entry_fee: settings.entry_fee,
            weekly_fee: settings.weekly_fee,
            first_place_percent: settings.first_place_percent,
            second_place_percent: settings.second_place_percent,
            third_place_percent: settings.third_place_percent,
            fourth_place_percent: settings.fourth_place_percent,
            fifth_place_percent: settings.fifth_place_percent,
        }
    }

    /// Short view of the league used in a player's league list.
    pub fn to_league_name(&self) -> LeagueName {
        LeagueName {
            league_id: self.id.clone(),
            league_name: self.league_name.clone(),
            season_id: self.season_id.clone(),
        }
    }
}

/// Parameters for creating or updating a league.
///
/// The league ID is passed separately: generated on create, taken from the request
/// on update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueParam {
    pub league_name: String,
    pub admin_id: String,
    pub season_id: String,
    pub password: String,
    pub active: bool,
    pub settings: LeagueSettings,
}

impl LeagueParam {
    /// Converts a request body into league parameters, discarding the `id` field.
    pub fn from_dto(dto: UpsertLeagueDto) -> Self {
        Self {
            league_name: dto.league_name,
            admin_id: dto.admin_id,
            season_id: dto.season_id,
            password: dto.password,
            active: dto.active,
            settings: LeagueSettings {
                paid_for: dto.paid_for,
                money: dto.money,
                free: dto.free,
                spreads: dto.spreads,
                double_enabled: dto.double_enabled,
                banker: dto.banker,
                double_type: dto.double_type,
                entry_fee: dto.entry_fee,
                weekly_fee: dto.weekly_fee,
                first_place_percent: dto.first_place_percent,
                second_place_percent: dto.second_place_percent,
                third_place_percent: dto.third_place_percent,
                fourth_place_percent: dto.fourth_place_percent,
                fifth_place_percent: dto.fifth_place_percent,
            },
        }
    }
}

/// League ID, name, and season of a league a player belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeagueName {
    pub league_id: String,
    pub league_name: String,
    pub season_id: String,
}

impl LeagueName {
    pub fn into_dto(self) -> LeagueNameDto {
        LeagueNameDto {
            league_id: self.league_id,
            league_name: self.league_name,
            season_id: self.season_id,
        }
    }
}
