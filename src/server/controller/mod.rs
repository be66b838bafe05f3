//! HTTP request handlers.
//!
//! Controllers convert request DTOs into domain parameters, call the services, and
//! convert the results back into response DTOs. Every handler carries a
//! `#[utoipa::path]` annotation collected by the router into the OpenAPI document.

pub mod health;
pub mod league;
pub mod membership;
pub mod season;

#[cfg(test)]
mod test;
