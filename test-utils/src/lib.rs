//! League Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the league
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, customizable table schemas, and a mock player service.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and mock player service
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting seasons, leagues, and memberships with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_league_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_league_tables()
//!         .with_player("11")
//!         .build()
//!         .await?;
//!
//!     let db = &test.db;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
