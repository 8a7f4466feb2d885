pub mod prelude;

pub mod allocation_log;
pub mod collection;
pub mod error_log;
pub mod item;
pub mod mint_log;
pub mod serial_range;
pub mod tx_log;
