//! Business logic services.
//!
//! - `ledger` - collection lookups and supply statistics
//! - `allocator` - collision-free serial number allocation
//! - `broadcast` - ordered batch submission with partial failure reporting
//! - `mint` - construct-then-broadcast mint flow
//! - `audit` - best-effort audit trail
//! - `retry` - retry with backoff for transient failures

pub mod allocator;
pub mod audit;
pub mod broadcast;
pub mod ledger;
pub mod mint;
pub mod retry;
