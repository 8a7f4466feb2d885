//! Server side of mintgate: HTTP routing, persistence, the node and constructor clients,
//! rate limiting and the services allocating serial numbers and broadcasting transactions.

pub mod config;
pub mod constructor;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod node;
pub mod rate_limit;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
