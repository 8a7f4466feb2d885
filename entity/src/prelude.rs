pub use super::allocation_log::Entity as AllocationLog;
pub use super::collection::Entity as Collection;
pub use super::error_log::Entity as ErrorLog;
pub use super::item::Entity as Item;
pub use super::mint_log::Entity as MintLog;
pub use super::serial_range::Entity as SerialRange;
pub use super::tx_log::Entity as TxLog;
