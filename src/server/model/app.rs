use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    constructor::TransactionConstructor, node::NodeClient, rate_limit::RateLimiter,
    service::allocator::CollectionLocks,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub node: Arc<dyn NodeClient>,
    pub constructor: Arc<dyn TransactionConstructor>,
    pub rate_limiter: RateLimiter,
    pub collection_locks: CollectionLocks,
    /// Only ticker served, uppercase
    pub supported_ticker: String,
}
