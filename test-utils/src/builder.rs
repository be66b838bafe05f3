use entity::prelude::*;
use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases and a mock player service. Use the builder pattern to add entity tables and
/// player endpoints, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_league_tables()
///     .with_player("11")
///     .with_unknown_player("404")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Deferred mock endpoint registrations, applied once the mock server exists.
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for league operations.
    ///
    /// Adds Season, League, and PlayerLeague in dependency order.
    pub fn with_league_tables(self) -> Self {
        self.with_table(Season)
            .with_table(League)
            .with_table(PlayerLeague)
    }

    /// Registers a player the mock player service knows about.
    ///
    /// `GET /players/{player_id}` answers `200 OK`.
    pub fn with_player(self, player_id: impl Into<String>) -> Self {
        let path = format!("/players/{}", player_id.into());

        self.with_mock_endpoint(move |server| {
            server
                .mock("GET", path.as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .create()
        })
    }

    /// Registers a player the mock player service does not know.
    ///
    /// `GET /players/{player_id}` answers `404 Not Found`.
    pub fn with_unknown_player(self, player_id: impl Into<String>) -> Self {
        let path = format!("/players/{}", player_id.into());

        self.with_mock_endpoint(move |server| {
            server.mock("GET", path.as_str()).with_status(404).create()
        })
    }

    /// Adds a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Builds and initializes the test context with configured tables and endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and mocks ready
    /// - `Err(TestError::DbErr)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        setup.with_tables(self.tables).await?;

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
