use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        mint::{GenerateTxRequestDto, GenerateTxResponseDto},
    },
    server::{
        controller::util::ticker::ensure_supported_ticker,
        data::audit::TxLogEntry,
        error::{request::RequestError, Error},
        model::app::AppState,
        service::audit::AuditLog,
    },
};

pub static BITCORE_TAG: &str = "bitcore";

fn validate_transfer(request: &GenerateTxRequestDto) -> Result<(), RequestError> {
    if request.receiving_address.trim().is_empty() {
        return Err(RequestError::MissingField("receivingAddress".to_string()));
    }
    if request.wallet_data.address.trim().is_empty() {
        return Err(RequestError::MissingField("walletData.address".to_string()));
    }
    if request.wallet_data.privkey.trim().is_empty() {
        return Err(RequestError::MissingField("walletData.privkey".to_string()));
    }
    if request.amount <= 0 {
        return Err(RequestError::InvalidField {
            field: "amount".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if request.fee < 0 {
        return Err(RequestError::InvalidField {
            field: "fee".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

/// Build and sign a plain transfer from the wallet's outputs
#[utoipa::path(
    post,
    path = "/bitcore_lib/generate-tx",
    tag = BITCORE_TAG,
    request_body = GenerateTxRequestDto,
    responses(
        (status = 200, description = "Signed transaction hex", body = GenerateTxResponseDto),
        (status = 400, description = "Invalid request or rejected by the constructor", body = ErrorDto),
        (status = 500, description = "Constructor failure", body = ErrorDto)
    ),
)]
pub async fn generate_tx(
    State(state): State<AppState>,
    Json(payload): Json<GenerateTxRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let ticker = ensure_supported_ticker(&state, &payload.wallet_data.ticker)?;
    validate_transfer(&payload)?;

    let result = state.constructor.construct_transfer(&payload).await;

    let (status, raw_tx, error) = match &result {
        Ok(tx_hex) => ("ok", Some(tx_hex.clone()), None),
        Err(e) => ("error", None, Some(e.to_string())),
    };
    AuditLog::new(&state.db)
        .record_tx(TxLogEntry {
            ticker,
            action: "generate-tx".to_string(),
            status: status.to_string(),
            txid: None,
            raw_tx,
            metadata: Some(format!(
                "from {} to {} amount {} fee {}",
                payload.wallet_data.address, payload.receiving_address, payload.amount, payload.fee
            )),
            error,
        })
        .await;

    let tx_hex = result?;

    Ok((
        StatusCode::OK,
        Json(GenerateTxResponseDto {
            success: true,
            tx_hex,
        }),
    ))
}
