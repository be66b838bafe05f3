//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Field names are serialized in
//! camelCase to match the JSON format clients of the league service already speak.

pub mod api;
pub mod league;
pub mod season;
