//! # Subsystem Container
//!
//! Holds all subsystem instances and the one ledger connection they share.
//!
//! ## Initialization Order
//!
//! ```text
//! 1. Contract ABI      (file; must describe put/getObjectCount/getBlockNo)
//! 2. Credential        (must derive WALLET_ADDRESS)
//! 3. Ledger client     (must answer net_version)
//! 4. Chain context     (chain id + network id read once)
//! 5. Services          (submission, confirmation, verification)
//! ```
//!
//! Any step failing aborts startup.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use nc_02_transaction_submission::{Credential, StampService};
use nc_03_confirmation_tracker::ConfirmationTracker;
use nc_04_existence_verifier::ExistenceVerifier;
use nc_05_ledger_rpc::JsonRpcLedgerClient;
use nc_06_api_gateway::{AppState, ContractInterface};
use shared_types::abi::{GET_BLOCK_NO_SIGNATURE, GET_OBJECT_COUNT_SIGNATURE, PUT_SIGNATURE};
use shared_types::{to_checksum_address, ChainContext, LedgerClient};
use tracing::{info, instrument};

use crate::container::config::NodeConfig;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    pub config: NodeConfig,
    pub ledger: Arc<dyn LedgerClient>,
    pub context: Arc<ChainContext>,
    pub contract: Arc<ContractInterface>,
    pub stamping: Arc<StampService>,
    pub confirmations: Arc<ConfirmationTracker>,
    pub verifier: Arc<ExistenceVerifier>,
}

impl SubsystemContainer {
    /// Connect to the configured JSON-RPC node and wire every subsystem.
    pub async fn connect(config: NodeConfig) -> Result<Self> {
        let ledger = JsonRpcLedgerClient::new(&config.ledger)
            .with_context(|| format!("Invalid ledger endpoint {}", config.ledger.rpc_url))?;
        Self::with_ledger(config, Arc::new(ledger)).await
    }

    /// Wire every subsystem around an already constructed ledger client.
    #[instrument(skip_all)]
    pub async fn with_ledger(config: NodeConfig, ledger: Arc<dyn LedgerClient>) -> Result<Self> {
        let contract = Arc::new(load_contract_interface(&config.wallet.abi_path)?);
        info!(functions = ?contract.function_names(), "Contract ABI loaded");

        let credential = Arc::new(
            Credential::from_hex(&config.wallet.private_key)
                .context("WALLET_PRIVATE_KEY is not usable")?,
        );
        if credential.address() != config.wallet.address {
            bail!(
                "WALLET_PRIVATE_KEY derives {} but WALLET_ADDRESS is {}",
                to_checksum_address(&credential.address()),
                to_checksum_address(&config.wallet.address)
            );
        }

        if !ledger.is_connected().await {
            bail!("Cannot connect to ledger at {}", config.ledger.rpc_url);
        }
        let chain_id = ledger.chain_id().await.context("Failed to read chain id")?;
        let network_id = ledger
            .network_version()
            .await
            .context("Failed to read network id")?;

        let context = Arc::new(ChainContext {
            account: config.wallet.address,
            contract: config.wallet.contract_address,
            chain_id,
            network_id,
        });
        info!(
            chain_id,
            network_id = %context.network_id,
            account = %to_checksum_address(&context.account),
            contract = %to_checksum_address(&context.contract),
            "Connected to ledger"
        );

        let stamping = Arc::new(StampService::new(
            Arc::clone(&ledger),
            Arc::clone(&context),
            credential,
            config.submitter.clone(),
        ));
        let confirmations = Arc::new(ConfirmationTracker::new(Arc::clone(&ledger)));
        let verifier = Arc::new(ExistenceVerifier::new(
            Arc::clone(&ledger),
            Arc::clone(&context),
        ));

        Ok(Self {
            config,
            ledger,
            context,
            contract,
            stamping,
            confirmations,
            verifier,
        })
    }

    /// Handler state for the API gateway.
    pub fn app_state(&self) -> AppState {
        AppState {
            stamping: self.stamping.clone(),
            confirmations: self.confirmations.clone(),
            verifier: self.verifier.clone(),
            ledger: Arc::clone(&self.ledger),
            context: Arc::clone(&self.context),
            contract: Arc::clone(&self.contract),
            wait_policy: self.config.tracker,
        }
    }
}

/// Read the ABI file and check it describes the notarization contract.
pub fn load_contract_interface(path: &Path) -> Result<ContractInterface> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read contract ABI {}", path.display()))?;
    let contract = ContractInterface::from_json(&json)
        .with_context(|| format!("Cannot parse contract ABI {}", path.display()))?;
    contract
        .require(&[PUT_SIGNATURE, GET_OBJECT_COUNT_SIGNATURE, GET_BLOCK_NO_SIGNATURE])
        .with_context(|| format!("Contract ABI {} is incomplete", path.display()))?;
    Ok(contract)
}
