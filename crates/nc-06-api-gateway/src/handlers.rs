//! # Route Handlers
//!
//! | Route | Success | Failure |
//! |-------|---------|---------|
//! | `POST /stamp` | `{status, txHash}` | 422 bad input, 500 submission |
//! | `GET /verify/:hash` | `{hash, count, first_block}` | 404 for everything |
//! | `GET /wait1block` | `{success, blocknumber}` | 500 |
//! | `GET /status/tx/:tx_hash` | `{Status, ...}` | 404 |
//! | `GET /status/network` | `{Status: "OK", ...}` | `{Status: "ERROR"}` |
//! | `GET /status/contract` | `{Status, ContractAddress, Functions}` | - |
//! | `GET /status/account` | `{Status: "OK", ...}` | `{Status: "ERROR", Error}` |

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use nc_01_hash_normalizer::{ensure_prefix, normalize, normalize_batch};
use shared_types::{to_checksum_address, tx_hash_hex};
use tracing::{info, warn};

use crate::domain::error::ApiError;
use crate::domain::responses::{
    AccountStatusResponse, ContractStatusResponse, NetworkStatusResponse, RootResponse,
    StampRequest, StampResponse, TxStatusResponse, VerifyResponse, WaitResponse,
};
use crate::router::AppState;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "Ok",
        message: "Notary-Chain stamping gateway",
    })
}

pub async fn stamp(
    State(state): State<AppState>,
    payload: Result<Json<StampRequest>, JsonRejection>,
) -> Result<Json<StampResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::unprocessable(format!(
            "The 'hashes' key must be an array of strings: {}",
            rejection.body_text()
        ))
    })?;

    let hashes = normalize_batch(&request.hashes)?;
    let submitted = state.stamping.stamp(&hashes).await.map_err(|e| {
        warn!(error = %e, "Stamping failed");
        ApiError::from(e)
    })?;

    let tx_hash = tx_hash_hex(&submitted.tx_hash);
    info!(tx = %tx_hash, count = submitted.hash_count, "Stamped");
    Ok(Json(StampResponse::success(tx_hash)))
}

pub async fn verify(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let hash = normalize(&raw).map_err(ApiError::not_found)?;
    let result = state
        .verifier
        .verify(&hash)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(VerifyResponse {
        hash: ensure_prefix(&raw),
        count: result.occurrence_count,
        first_block: result.first_block,
    }))
}

pub async fn wait_one_block(State(state): State<AppState>) -> Result<Json<WaitResponse>, ApiError> {
    let blocknumber = state
        .confirmations
        .await_next_block(state.wait_policy)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(WaitResponse {
        success: true,
        blocknumber,
    }))
}

pub async fn tx_status(
    State(state): State<AppState>,
    Path(tx_hash): Path<String>,
) -> Result<Json<TxStatusResponse>, ApiError> {
    let status = state
        .confirmations
        .get_receipt(&tx_hash)
        .await
        .map_err(ApiError::not_found)?;
    Ok(Json(status.into()))
}

pub async fn network_status(State(state): State<AppState>) -> Json<NetworkStatusResponse> {
    if state.ledger.is_connected().await {
        Json(NetworkStatusResponse::Ok {
            network_id: state.context.network_id.clone(),
            chain_id: state.context.chain_id,
        })
    } else {
        Json(NetworkStatusResponse::Error)
    }
}

pub async fn contract_status(State(state): State<AppState>) -> Json<ContractStatusResponse> {
    Json(ContractStatusResponse {
        status: "OK",
        contract_address: to_checksum_address(&state.context.contract),
        functions: state.contract.function_names(),
    })
}

pub async fn account_status(State(state): State<AppState>) -> Json<AccountStatusResponse> {
    match state.ledger.get_balance(state.context.account).await {
        Ok(balance) => Json(AccountStatusResponse::ok(&state.context.account, balance)),
        Err(e) => Json(AccountStatusResponse::Error {
            error: e.to_string(),
        }),
    }
}
