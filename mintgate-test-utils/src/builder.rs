//! Declarative test builder.
//!
//! Configuration calls are queued and executed in order by `build()`: tables first, then
//! ledger fixtures, then mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ledger_tables: bool,
    include_audit_tables: bool,

    // (name, ranges)
    collections: Vec<(String, Vec<String>)>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // (raw_hex, Ok(txid) | Err(message), expected_requests)
    send_raw_transaction_endpoints: Vec<(String, Result<String, String>, usize)>,
    // (blocks, expected_requests)
    blockchain_info_endpoints: Vec<(i64, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ledger_tables: false,
            include_audit_tables: false,
            collections: Vec::new(),
            mock_builders: Vec::new(),
            send_raw_transaction_endpoints: Vec::new(),
            blockchain_info_endpoints: Vec::new(),
        }
    }

    /// Create the collection, serial range and item tables.
    pub fn with_ledger_tables(mut self) -> Self {
        self.include_ledger_tables = true;
        self
    }

    /// Create the tx, mint, allocation and error log tables.
    pub fn with_audit_tables(mut self) -> Self {
        self.include_audit_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use mintgate_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), mintgate_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Collection)
    ///     .with_table(SerialRange)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a collection with the given `start-end` ranges.
    ///
    /// Requires the ledger tables.
    pub fn with_collection(mut self, name: &str, ranges: &[&str]) -> Self {
        self.collections.push((
            name.to_string(),
            ranges.iter().map(|r| r.to_string()).collect(),
        ));
        self
    }

    /// Register a custom mock endpoint on the node server.
    ///
    /// Custom endpoints are created before the preconfigured ones so tests can queue several
    /// responses for the same request.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Mock the node accepting `raw_hex` as `txid`.
    pub fn with_send_raw_transaction_endpoint(
        mut self,
        raw_hex: &str,
        txid: &str,
        expected_requests: usize,
    ) -> Self {
        self.send_raw_transaction_endpoints.push((
            raw_hex.to_string(),
            Ok(txid.to_string()),
            expected_requests,
        ));
        self
    }

    /// Mock the node rejecting `raw_hex` with `message`.
    pub fn with_send_raw_transaction_error_endpoint(
        mut self,
        raw_hex: &str,
        message: &str,
        expected_requests: usize,
    ) -> Self {
        self.send_raw_transaction_endpoints.push((
            raw_hex.to_string(),
            Err(message.to_string()),
            expected_requests,
        ));
        self
    }

    /// Mock `getblockchaininfo` reporting a chain tip at `blocks`.
    pub fn with_blockchain_info_endpoint(mut self, blocks: i64, expected_requests: usize) -> Self {
        self.blockchain_info_endpoints
            .push((blocks, expected_requests));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with tables and fixtures, node server with mocks
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_ledger_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Collection),
                schema.create_table_from_entity(entity::prelude::SerialRange),
                schema.create_table_from_entity(entity::prelude::Item),
            ]);
        }

        if self.include_audit_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::TxLog),
                schema.create_table_from_entity(entity::prelude::MintLog),
                schema.create_table_from_entity(entity::prelude::AllocationLog),
                schema.create_table_from_entity(entity::prelude::ErrorLog),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert ledger fixtures
        for (name, ranges) in &self.collections {
            let ranges: Vec<&str> = ranges.iter().map(String::as_str).collect();
            setup.ledger().insert_mock_collection(name, &ranges).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (raw_hex, response, expected) in self.send_raw_transaction_endpoints {
            let mock = match response {
                Ok(txid) => setup
                    .node()
                    .create_send_raw_transaction_endpoint(&raw_hex, &txid, expected),
                Err(message) => setup
                    .node()
                    .create_send_raw_transaction_error_endpoint(&raw_hex, &message, expected),
            };
            mocks.push(mock);
        }

        for (blocks, expected) in self.blockchain_info_endpoints {
            mocks.push(setup.node().create_blockchain_info_endpoint(blocks, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
