//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for the ledger tables (collections, serial ranges,
//! items) and the audit tables. They accept any `ConnectionTrait` so callers can pass either
//! a pooled connection or a transaction.

pub mod audit;
pub mod collection;
pub mod item;
pub mod serial_range;

#[cfg(test)]
mod tests;
