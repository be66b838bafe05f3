//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entity types out of the service layer.

pub mod league;
pub mod player_league;
pub mod season;

#[cfg(test)]
mod test;
