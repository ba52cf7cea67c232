//! # API Gateway Service
//!
//! Binds the HTTP listener and serves the router until the shutdown future
//! resolves. In-flight requests are drained before `serve` returns.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::{build_router, AppState};

pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl ApiGatewayService {
    pub fn new(config: GatewayConfig, state: AppState) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config, state })
    }

    pub fn addr(&self) -> SocketAddr {
        self.config.addr()
    }

    /// Serve until `shutdown` completes.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;
        let local = listener.local_addr().map_err(GatewayError::Serve)?;
        info!(addr = %local, "Starting HTTP server");

        let router = build_router(self.state, &self.config);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("API Gateway stopped");
        Ok(())
    }
}
