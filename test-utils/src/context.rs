use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context containing database connection and the mock player service.
///
/// Provides an in-memory SQLite database connection and a mockito server standing in
/// for the player service, for isolated unit and integration testing. Both persist for
/// the lifetime of the test context.
pub struct TestContext {
    /// Database connection to in-memory SQLite instance.
    pub db: DatabaseConnection,

    /// Mock HTTP server answering player lookups.
    pub server: ServerGuard,

    /// Mock endpoints registered by the builder, kept alive for assertions.
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Creates a new test context.
    ///
    /// Connects to a fresh in-memory SQLite database and starts a mock HTTP server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with no tables and no mock endpoints
    /// - `Err(TestError::DbErr)` - Failed to connect to in-memory SQLite database
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence to set up the required database
    /// schema for the test. Typically called internally by `TestBuilder::build()` rather
    /// than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Failed to create one or more tables
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock player service.
    ///
    /// Pass this to the player client under test so lookups hit the mocked endpoints.
    pub fn player_service_url(&self) -> String {
        self.server.url()
    }

    /// Asserts every mock endpoint registered by the builder received its expected calls.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
