//! HTTP routes and OpenAPI documentation.
//!
//! Every endpoint is registered through `utoipa-axum` so its `#[utoipa::path]` annotation ends
//! up in the OpenAPI document served by Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the router with all endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /health` - Service liveness
/// - `GET /api/health/{ticker}` - Node reachability
/// - `GET /api/listunspent/{ticker}/{address}` - Unspent outputs of an address
/// - `GET /api/getlasttransactions/{ticker}/{address}` - Recent wallet transactions of an address
/// - `POST /api/importaddress/{ticker}` - Watch an address in the node wallet
/// - `GET /api/gettransaction/{ticker}/{txid}` - Verbose transaction lookup
/// - `GET /api/getblockchaininfo/{ticker}` - Chain tip
/// - `GET /api/estimatesmartfee/{ticker}/{conf_target}` - Fee estimate
/// - `POST /api/sendrawtransaction/{ticker}` - Submit one raw transaction
/// - `GET /rc001/collections` - Collections with supply statistics
/// - `GET /rc001/collection/{ticker}/{name}` - Items of a collection
/// - `GET /rc001/inscriptions/{ticker}/{name}/{address}` - Inscriptions held by an address
/// - `GET /rc001/validate/{inscription_id}` - Locate an inscription or serial number
/// - `GET /rc001/mint/{ticker}/{name}` - Allocate and render a mint document
/// - `GET /rc001/mint_hex/{ticker}/{name}` - Same, hex encoded
/// - `POST /rc001/mint_rc001/{ticker}` - Construct and broadcast an ordinal mint
/// - `POST /rc001/broadcast_pending/{ticker}` - Broadcast a batch of transactions
/// - `POST /bitcore_lib/generate-tx` - Construct a plain transfer
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "mintgate", description = "rc001 collection and broadcast API"), tags(
        (name = controller::node::NODE_TAG, description = "Node RPC pass-through routes"),
        (name = controller::rc001::RC001_TAG, description = "rc001 collection, mint and broadcast routes"),
        (name = controller::bitcore::BITCORE_TAG, description = "Transaction construction routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::node::health))
        .routes(routes!(controller::node::node_health))
        .routes(routes!(controller::node::list_unspent))
        .routes(routes!(controller::node::get_last_transactions))
        .routes(routes!(controller::node::import_address))
        .routes(routes!(controller::node::get_transaction))
        .routes(routes!(controller::node::get_blockchain_info))
        .routes(routes!(controller::node::estimate_smart_fee))
        .routes(routes!(controller::node::send_raw_transaction))
        .routes(routes!(controller::rc001::list_collections))
        .routes(routes!(controller::rc001::get_collection))
        .routes(routes!(controller::rc001::get_inscriptions))
        .routes(routes!(controller::rc001::validate))
        .routes(routes!(controller::rc001::mint_document))
        .routes(routes!(controller::rc001::mint_document_hex))
        .routes(routes!(controller::rc001::mint))
        .routes(routes!(controller::rc001::broadcast_pending))
        .routes(routes!(controller::bitcore::generate_tx))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
