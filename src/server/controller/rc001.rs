use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        broadcast::{BroadcastPendingRequestDto, BroadcastResponseDto},
        collection::{
            CollectionItemsDto, CollectionSummaryDto, InscriptionsDto, MintHexDto, ValidateDto,
        },
        mint::{MintRequestDto, MintResponseDto},
    },
    server::{
        controller::util::ticker::ensure_supported_ticker,
        error::{request::RequestError, Error},
        model::{app::AppState, broadcast::BatchItem},
        rate_limit::{
            config::{MINT_DOCUMENT, MINT_TRANSACTION},
            RateLimitKey,
        },
        service::{
            allocator::SerialAllocator, audit::AuditLog, broadcast::BroadcastEngine,
            ledger::LedgerService, mint::{build_mint_request, MintOrchestrator},
        },
        util::render::{render_mint_document, render_mint_document_hex},
    },
};

pub static RC001_TAG: &str = "rc001";

/// List collections with supply statistics, newest first
#[utoipa::path(
    get,
    path = "/rc001/collections",
    tag = RC001_TAG,
    responses(
        (status = 200, description = "Collections of the supported ticker", body = Vec<CollectionSummaryDto>),
        (status = 400, description = "Malformed serial range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_collections(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let summaries = LedgerService::new(&state.db)
        .list_collections(&state.supported_ticker)
        .await?;

    let dtos: Vec<CollectionSummaryDto> = summaries.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List every item of a collection in creation order
#[utoipa::path(
    get,
    path = "/rc001/collection/{ticker}/{name}",
    tag = RC001_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("name" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 200, description = "Items of the collection", body = CollectionItemsDto),
        (status = 400, description = "Unsupported ticker", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path((ticker, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    let ledger = LedgerService::new(&state.db);

    let collection = ledger.find_collection(&ticker, &name).await?;
    let items = ledger.list_items(collection.id).await?;

    Ok((
        StatusCode::OK,
        Json(CollectionItemsDto {
            coin_ticker: collection.coin_ticker,
            name: collection.name,
            items: items.into_iter().map(Into::into).collect(),
        }),
    ))
}

/// List inscriptions of a collection held by an address
#[utoipa::path(
    get,
    path = "/rc001/inscriptions/{ticker}/{name}/{address}",
    tag = RC001_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("name" = String, Path, description = "Collection name"),
        ("address" = String, Path, description = "Holder address")
    ),
    responses(
        (status = 200, description = "Inscription ids held by the address", body = InscriptionsDto),
        (status = 400, description = "Unsupported ticker", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inscriptions(
    State(state): State<AppState>,
    Path((ticker, name, address)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    let ledger = LedgerService::new(&state.db);

    let collection = ledger.find_collection(&ticker, &name).await?;
    let inscriptions = ledger
        .inscriptions_by_address(collection.id, &address)
        .await?;

    Ok((
        StatusCode::OK,
        Json(InscriptionsDto {
            address,
            inscriptions,
        }),
    ))
}

/// Find the collection and position of an inscription id or serial number
#[utoipa::path(
    get,
    path = "/rc001/validate/{inscription_id}",
    tag = RC001_TAG,
    params(("inscription_id" = String, Path, description = "Inscription id or serial number")),
    responses(
        (status = 200, description = "Item found", body = ValidateDto),
        (status = 404, description = "No item matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate(
    State(state): State<AppState>,
    Path(inscription_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let location = LedgerService::new(&state.db)
        .find_by_serial_or_inscription(&state.supported_ticker, inscription_id.trim())
        .await?;

    Ok((StatusCode::OK, Json(ValidateDto::from(location))))
}

/// Allocates a serial number and returns (collection name, parent inscription id, sn).
async fn allocate_for_document(
    state: &AppState,
    ticker: &str,
    name: &str,
) -> Result<(String, String, String), Error> {
    let ticker = ensure_supported_ticker(state, ticker)?;
    let collection = LedgerService::new(&state.db)
        .find_collection(&ticker, name)
        .await?;

    state.rate_limiter.check(
        &RateLimitKey::new("mint", &ticker, &collection.sanitized_name),
        MINT_DOCUMENT,
    )?;

    let item = SerialAllocator::new(&state.db, &state.collection_locks)
        .allocate(&collection)
        .await?;

    Ok((
        collection.name,
        collection.parent_inscription_id.unwrap_or_default(),
        item.sn,
    ))
}

/// Allocate a serial number and render its rc001 mint document
#[utoipa::path(
    get,
    path = "/rc001/mint/{ticker}/{name}",
    tag = RC001_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("name" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 200, description = "rc001 mint document", body = String, content_type = "text/html"),
        (status = 400, description = "Unsupported ticker or collection without ranges", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 409, description = "No serial number left", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mint_document(
    State(state): State<AppState>,
    Path((ticker, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let (collection_name, parent, sn) = allocate_for_document(&state, &ticker, &name).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html;charset=utf-8")],
        render_mint_document(&sn, &collection_name, &parent),
    ))
}

/// Allocate a serial number and return its rc001 mint document as hex
#[utoipa::path(
    get,
    path = "/rc001/mint_hex/{ticker}/{name}",
    tag = RC001_TAG,
    params(
        ("ticker" = String, Path, description = "Coin ticker"),
        ("name" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 200, description = "Hex encoded rc001 mint document", body = MintHexDto),
        (status = 400, description = "Unsupported ticker or collection without ranges", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 409, description = "No serial number left", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mint_document_hex(
    State(state): State<AppState>,
    Path((ticker, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let (collection_name, parent, sn) = allocate_for_document(&state, &ticker, &name).await?;

    Ok((
        StatusCode::OK,
        Json(MintHexDto {
            status: "success".to_string(),
            hex: render_mint_document_hex(&sn, &collection_name, &parent),
        }),
    ))
}

/// Construct an ordinal mint and optionally broadcast it
#[utoipa::path(
    post,
    path = "/rc001/mint_rc001/{ticker}",
    tag = RC001_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    request_body = MintRequestDto,
    responses(
        (status = 200, description = "Constructed, and possibly broadcast, mint", body = MintResponseDto),
        (status = 400, description = "Invalid request or rejected by the constructor", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded", body = ErrorDto),
        (status = 500, description = "Constructor failure", body = ErrorDto)
    ),
)]
pub async fn mint(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(payload): Json<MintRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;
    let broadcast = payload.broadcast;
    let request = build_mint_request(payload)?;

    state.rate_limiter.check(
        &RateLimitKey::new("mint_rc001", &ticker, &request.sending_address),
        MINT_TRANSACTION,
    )?;

    tracing::info!(
        ticker = %ticker,
        sending_address = %request.sending_address,
        broadcast,
        "Constructing mint"
    );

    let response = MintOrchestrator::new(&state.db, state.node.as_ref(), state.constructor.as_ref())
        .mint(&ticker, &request, broadcast)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Broadcast signed transactions in order
#[utoipa::path(
    post,
    path = "/rc001/broadcast_pending/{ticker}",
    tag = RC001_TAG,
    params(("ticker" = String, Path, description = "Coin ticker")),
    request_body = BroadcastPendingRequestDto,
    responses(
        (status = 200, description = "Per transaction outcome and overall status", body = BroadcastResponseDto),
        (status = 400, description = "Unsupported ticker or no transactions", body = ErrorDto)
    ),
)]
pub async fn broadcast_pending(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(payload): Json<BroadcastPendingRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &ticker)?;

    let mut items: Vec<BatchItem> = payload
        .pending_transactions
        .into_iter()
        .filter_map(BatchItem::from_pending)
        .collect();
    if items.is_empty() {
        items = payload
            .raw_txs
            .into_iter()
            .map(|raw_hex| BatchItem {
                requested_id: None,
                raw_hex,
            })
            .collect();
    }

    if items.is_empty() {
        return Err(RequestError::MissingField(
            "pendingTransactions or raw_txs".to_string(),
        )
        .into());
    }

    let raw_hexes: Vec<String> = items.iter().map(|item| item.raw_hex.clone()).collect();
    let result = BroadcastEngine::new(state.node.as_ref())
        .broadcast_batch(items, payload.continue_on_error)
        .await;

    AuditLog::new(&state.db)
        .record_batch(&ticker, "broadcast_pending", &result, &raw_hexes)
        .await;

    tracing::info!(
        ticker = %ticker,
        status = result.status.as_str(),
        count = result.entries.len(),
        "Broadcast batch"
    );

    Ok((StatusCode::OK, Json(BroadcastResponseDto::from(result))))
}
