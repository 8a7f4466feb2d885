//! Database model type aliases.

/// An rc001 collection, `created_at` holds the deploy block height.
pub type CollectionModel = entity::collection::Model;

/// One `start-end` range of a collection's serial number space.
pub type SerialRangeModel = entity::serial_range::Model;

/// An allocated serial number, inscribed once `inscription_id` is set.
pub type ItemModel = entity::item::Model;
