pub mod prelude;

pub mod league;
pub mod player_league;
pub mod season;
