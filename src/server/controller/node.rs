use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        node::{
            BlockchainInfoDto, FeeEstimateDto, ImportAddressDto, ImportAddressRequestDto,
            NodeHealthDto, SendRawTransactionRequestDto, TxidDto, UnspentListDto,
            WalletTransactionListDto,
        },
    },
    server::{
        controller::util::ticker::ensure_supported_ticker,
        data::audit::TxLogEntry,
        error::{request::RequestError, Error},
        model::{app::AppState, node::latest_for_address},
        rate_limit::{config::NODE_READ, RateLimitKey},
        service::audit::AuditLog,
    },
};

pub static NODE_TAG: &str = "node";

/// Outputs with fewer confirmations are listed too
const LIST_UNSPENT_MIN_CONFIRMATIONS: u32 = 0;

/// Wallet transactions scanned for an address
const LAST_TRANSACTIONS_COUNT: u32 = 10;

/// Service liveness
#[utoipa::path(
    get,
    path = "/health",
    tag = NODE_TAG,
    responses(
        (status = 200, description = "Service is running", body = StatusDto),
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusDto {
            status: "ok".to_string(),
        }),
    )
}

/// Check the node is reachable
#[utoipa::path(
    get,
    path = "/api/health/{ticker}",
    tag = NODE_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    responses(
        (status = 200, description = "Node answered", body = NodeHealthDto),
        (status = 400, description = "Unsupported ticker or node RPC error", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn node_health(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;

    let info = state.node.get_blockchain_info().await?;

    Ok((
        StatusCode::OK,
        Json(NodeHealthDto {
            status: "ok".to_string(),
            ticker,
            chain: info.chain,
            blocks: info.blocks,
            headers: info.headers,
        }),
    ))
}

/// List the unspent outputs of an address
#[utoipa::path(
    get,
    path = "/api/listunspent/{ticker}/{address}",
    tag = NODE_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("address" = String, Path, description = "Address to list outputs for")
    ),
    responses(
        (status = 200, description = "Unspent outputs", body = UnspentListDto),
        (status = 400, description = "Unsupported ticker or node RPC error", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn list_unspent(
    State(state): State<AppState>,
    Path((ticker, address)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    state.rate_limiter.check(
        &RateLimitKey::new("listunspent", &ticker, &address),
        NODE_READ,
    )?;

    tracing::info!(ticker = %ticker, address = %address, "Fetching unspent outputs");

    let unspent = state
        .node
        .list_unspent(&address, LIST_UNSPENT_MIN_CONFIRMATIONS)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UnspentListDto {
            network: ticker,
            address,
            txs: unspent.into_iter().map(Into::into).collect(),
        }),
    ))
}

/// Recent wallet transactions of an address
///
/// Only the wallet's latest transactions are scanned, so the address must be imported into
/// the node wallet and older history is not returned.
#[utoipa::path(
    get,
    path = "/api/getlasttransactions/{ticker}/{address}",
    tag = NODE_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Transactions newest first", body = WalletTransactionListDto),
        (status = 400, description = "Unsupported ticker or node RPC error", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn get_last_transactions(
    State(state): State<AppState>,
    Path((ticker, address)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    state.rate_limiter.check(
        &RateLimitKey::new("getlasttransactions", &ticker, &address),
        NODE_READ,
    )?;

    tracing::info!(ticker = %ticker, address = %address, "Fetching last transactions");

    let transactions = state.node.list_transactions(LAST_TRANSACTIONS_COUNT).await?;

    Ok((
        StatusCode::OK,
        Json(WalletTransactionListDto {
            network: ticker,
            transactions: latest_for_address(transactions, &address)
                .into_iter()
                .map(Into::into)
                .collect(),
            address,
        }),
    ))
}

/// Watch an address in the node wallet
#[utoipa::path(
    post,
    path = "/api/importaddress/{ticker}",
    tag = NODE_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    request_body = ImportAddressRequestDto,
    responses(
        (status = 200, description = "Address imported", body = ImportAddressDto),
        (status = 400, description = "Unsupported ticker, missing address or node RPC error", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn import_address(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(payload): Json<ImportAddressRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;

    if payload.address.trim().is_empty() {
        return Err(RequestError::MissingField("address".to_string()).into());
    }

    tracing::info!(ticker = %ticker, address = %payload.address, "Importing address");

    state.node.import_address(&payload.address).await?;

    Ok((
        StatusCode::OK,
        Json(ImportAddressDto {
            status: "success".to_string(),
            imported_address: payload.address,
        }),
    ))
}

/// Verbose transaction details as reported by the node
#[utoipa::path(
    get,
    path = "/api/gettransaction/{ticker}/{txid}",
    tag = NODE_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("txid" = String, Path, description = "Transaction id")
    ),
    responses(
        (status = 200, description = "Transaction details as returned by the node"),
        (status = 400, description = "Unsupported ticker or unknown transaction", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path((ticker, txid)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    state.rate_limiter.check(
        &RateLimitKey::new("gettransaction", &ticker, &txid),
        NODE_READ,
    )?;

    let transaction = state.node.get_raw_transaction(&txid).await?;

    Ok((StatusCode::OK, Json(transaction)))
}

/// Chain tip reported by the node
#[utoipa::path(
    get,
    path = "/api/getblockchaininfo/{ticker}",
    tag = NODE_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    responses(
        (status = 200, description = "Blockchain info", body = BlockchainInfoDto),
        (status = 400, description = "Unsupported ticker or node RPC error", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn get_blockchain_info(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<impl IntoResponse, Error> {
    ensure_supported_ticker(&state, &ticker)?;

    let info = state.node.get_blockchain_info().await?;

    Ok((StatusCode::OK, Json(BlockchainInfoDto::from(info))))
}

/// Fee rate estimate for confirmation within `conf_target` blocks
#[utoipa::path(
    get,
    path = "/api/estimatesmartfee/{ticker}/{conf_target}",
    tag = NODE_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("conf_target" = u32, Path, description = "Confirmation target in blocks")
    ),
    responses(
        (status = 200, description = "Fee estimate", body = FeeEstimateDto),
        (status = 400, description = "Unsupported ticker or invalid target", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn estimate_smart_fee(
    State(state): State<AppState>,
    Path((ticker, conf_target)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    ensure_supported_ticker(&state, &ticker)?;

    let conf_target = conf_target
        .parse::<u32>()
        .map_err(|e| RequestError::InvalidField {
            field: "conf_target".to_string(),
            reason: e.to_string(),
        })?;

    let estimate = state.node.estimate_smart_fee(conf_target).await?;

    Ok((StatusCode::OK, Json(FeeEstimateDto::from(estimate))))
}

/// Submit a signed raw transaction
#[utoipa::path(
    post,
    path = "/api/sendrawtransaction/{ticker}",
    tag = NODE_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    request_body = SendRawTransactionRequestDto,
    responses(
        (status = 200, description = "Transaction accepted", body = TxidDto),
        (status = 400, description = "Unsupported ticker or transaction rejected", body = ErrorDto),
        (status = 503, description = "Node is unreachable", body = ErrorDto)
    ),
)]
pub async fn send_raw_transaction(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(payload): Json<SendRawTransactionRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;

    let raw_tx = payload.raw_tx.trim();
    if raw_tx.is_empty() {
        return Err(RequestError::MissingField("raw_tx".to_string()).into());
    }

    let result = state.node.submit_raw_transaction(raw_tx).await;

    let (status, txid, error) = match &result {
        Ok(txid) => ("ok", Some(txid.clone()), None),
        Err(e) => ("error", None, Some(e.to_string())),
    };
    AuditLog::new(&state.db)
        .record_tx(TxLogEntry {
            ticker,
            action: "sendrawtransaction".to_string(),
            status: status.to_string(),
            txid,
            raw_tx: Some(raw_tx.to_string()),
            metadata: None,
            error,
        })
        .await;

    let txid = result?;

    Ok((StatusCode::OK, Json(TxidDto { txid })))
}
