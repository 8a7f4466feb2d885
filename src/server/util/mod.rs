//! Helpers shared by services and controllers: name sanitisation, rc001 document rendering
//! and time calculations.

pub mod render;
pub mod sanitize;
pub mod time;
