//! Server-side domain types.

pub mod app;
pub mod broadcast;
pub mod constructor;
pub mod db;
pub mod ledger;
pub mod node;
