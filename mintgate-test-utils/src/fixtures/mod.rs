//! Fixture helpers used once a test context is built.
//!
//! - `ledger` - collections, serial ranges and items
//! - `node` - mocked node JSON-RPC endpoints

pub mod ledger;
pub mod node;
