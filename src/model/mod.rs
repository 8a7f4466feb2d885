//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod broadcast;
pub mod collection;
pub mod mint;
pub mod node;
