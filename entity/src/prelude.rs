pub use super::league::Entity as League;
pub use super::player_league::Entity as PlayerLeague;
pub use super::season::Entity as Season;
