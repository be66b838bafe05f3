//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships, so a league
//! needs an existing season and a membership needs an existing league.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let season = factory::season::create_season(&db).await?;
//!     let league = factory::league::create_league(&db, &season.id).await?;
//!
//!     // Create with all dependencies
//!     let (season, league) = factory::helpers::create_league_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let league = factory::league::LeagueFactory::new(&db, &season.id)
//!     .name("Indian Cricket League")
//!     .password("password")
//!     .admin_id("11")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod league;
pub mod player_league;
pub mod season;

pub use league::create_league;
pub use player_league::create_membership;
pub use season::create_season;
