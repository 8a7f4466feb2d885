//! Shared test harness for the mintgate workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, ledger fixtures and
//! mocked node RPC endpoints, then `build()` returns a [`TestContext`] with an in-memory
//! SQLite database and a running `mockito` server standing in for the node.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_RPC_PASSWORD, TEST_RPC_USER, TEST_TICKER},
        fixtures::ledger::factory,
        TestBuilder, TestContext, TestError,
    };
}
