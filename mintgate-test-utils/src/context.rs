//! Test context returned by `TestBuilder`.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// ```ignore
/// let mut test = TestBuilder::new().with_ledger_tables().build().await?;
///
/// let collection = test.ledger().insert_mock_collection("Cats", &["1-100"]).await?;
/// let node_url = test.server_url();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server standing in for the node's JSON-RPC interface
    pub(crate) server: ServerGuard,
    /// Mock endpoints registered by the builder, verified by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        // Every pooled connection to `sqlite::memory:` would open its own empty database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);

        let db = Database::connect(options).await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base url of the mock node server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Direct access to the mock server for one-off endpoints.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints registered by the builder were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
