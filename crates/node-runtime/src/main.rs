//! # Notary-Chain Node Runtime
//!
//! The main entry point for the Notary-Chain stamping gateway.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber (`RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Load the contract ABI, check the credential, reach the ledger
//! 4. Wire the subsystems and start the HTTP server
//! 5. Drain in-flight requests and exit on Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use nc_06_api_gateway::ApiGatewayService;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, SubsystemContainer};

/// The running gateway.
pub struct NodeRuntime {
    container: Arc<SubsystemContainer>,
}

impl NodeRuntime {
    /// Wire every subsystem. Fails if the ledger is unreachable or the
    /// wallet settings are inconsistent.
    pub async fn start(config: NodeConfig) -> Result<Self> {
        info!("===========================================");
        info!("  Notary-Chain Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");
        info!(rpc_url = %config.ledger.rpc_url, "Connecting to ledger");

        let container = SubsystemContainer::connect(config)
            .await
            .context("Startup failed")?;

        Ok(Self {
            container: Arc::new(container),
        })
    }

    /// Serve the HTTP API until Ctrl+C.
    pub async fn run(&self) -> Result<()> {
        let gateway = ApiGatewayService::new(
            self.container.config.gateway.clone(),
            self.container.app_state(),
        )?;
        info!(addr = %gateway.addr(), "Node is running. Press Ctrl+C to stop.");

        gateway.serve(shutdown_signal()).await?;

        info!("Shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Initiating graceful shutdown..."),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}

/// Load configuration from the environment.
fn load_config() -> Result<NodeConfig> {
    let config = NodeConfig::from_env().context("Invalid configuration")?;
    info!(
        api = %config.gateway.addr(),
        abi = %config.wallet.abi_path.display(),
        wait_attempts = config.tracker.max_attempts,
        wait_interval_ms = config.tracker.interval.as_millis() as u64,
        "Configuration loaded"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;

    let runtime = NodeRuntime::start(config).await?;
    runtime.run().await
}
