use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, constructor::script::ScriptConstructor, error::Error,
    model::app::AppState, node::rpc::RpcNodeClient, rate_limit::RateLimiter,
    service::allocator::CollectionLocks,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the node client from the RPC settings
pub fn build_node_client(config: &Config) -> Result<RpcNodeClient, Error> {
    let client = RpcNodeClient::new(
        &config.node_rpc_url,
        &config.node_rpc_user,
        &config.node_rpc_password,
        config.node_rpc_wallet.as_deref(),
        config.node_rpc_timeout,
    )?;

    Ok(client)
}

/// Build the constructor running the configured scripts
pub fn build_constructor(config: &Config) -> ScriptConstructor {
    ScriptConstructor::new(
        config.constructor_script_dir.clone(),
        config.constructor_mint_script.clone(),
        config.constructor_transfer_script.clone(),
    )
}

/// Assemble the state shared by all request handlers
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    Ok(AppState {
        db,
        node: Arc::new(build_node_client(config)?),
        constructor: Arc::new(build_constructor(config)),
        rate_limiter: RateLimiter::new(),
        collection_locks: CollectionLocks::new(),
        supported_ticker: config.supported_ticker.clone(),
    })
}
