//! Router construction and shared handler state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use nc_02_transaction_submission::StampingApi;
use nc_03_confirmation_tracker::{ConfirmationApi, TrackerPolicy};
use nc_04_existence_verifier::VerificationApi;
use shared_types::{ChainContext, LedgerClient};
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domain::config::GatewayConfig;
use crate::domain::contract::ContractInterface;
use crate::handlers;
use crate::middleware::create_cors_layer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub stamping: Arc<dyn StampingApi>,
    pub confirmations: Arc<dyn ConfirmationApi>,
    pub verifier: Arc<dyn VerificationApi>,
    /// Direct ledger access for the status endpoints.
    pub ledger: Arc<dyn LedgerClient>,
    pub context: Arc<ChainContext>,
    pub contract: Arc<ContractInterface>,
    /// Policy used by `/wait1block`.
    pub wait_policy: TrackerPolicy,
}

/// Routes only, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/stamp", post(handlers::stamp))
        .route("/verify/:hash", get(handlers::verify))
        .route("/wait1block", get(handlers::wait_one_block))
        .route("/status/tx/:tx_hash", get(handlers::tx_status))
        .route("/status/network", get(handlers::network_status))
        .route("/status/contract", get(handlers::contract_status))
        .route("/status/account", get(handlers::account_status))
}

/// Full HTTP application: routes, tracing, timeout and CORS.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(create_cors_layer(&config.cors));

    routes().layer(middleware).with_state(state)
}
