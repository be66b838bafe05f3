//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing league, membership, and season rules
//! - **Orchestration**: Coordinating repository calls and the player service
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod league;
pub mod player;
pub mod season;
