//! # Node Configuration
//!
//! Unified configuration for all subsystems and runtime parameters, read
//! from environment variables.
//!
//! ## Security Requirements
//!
//! - `WALLET_PRIVATE_KEY` is never logged or serialized
//! - Wallet and contract settings have no defaults; startup aborts without them

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use nc_02_transaction_submission::SubmitterConfig;
use nc_03_confirmation_tracker::TrackerPolicy;
use nc_05_ledger_rpc::LedgerConfig;
use nc_06_api_gateway::GatewayConfig;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Ledger node endpoint.
    pub ledger: LedgerConfig,
    /// Signing account and contract location.
    pub wallet: WalletConfig,
    /// HTTP server.
    pub gateway: GatewayConfig,
    /// Gas settings and batch ceiling.
    pub submitter: SubmitterConfig,
    /// Polling policy for `/wait1block`.
    pub tracker: TrackerPolicy,
}

/// Account, credential and contract settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Hex secp256k1 key, `0x` optional.
    #[serde(skip_serializing)]
    pub private_key: String,
    /// Account the key must derive.
    pub address: Address,
    /// Deployed notarization contract.
    pub contract_address: Address,
    /// Contract ABI JSON file.
    pub abi_path: PathBuf,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            private_key: String::new(),
            address: Address::zero(),
            contract_address: Address::zero(),
            abi_path: PathBuf::from("./contract/abi.json"),
        }
    }
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .field("contract_address", &self.contract_address)
            .field("abi_path", &self.abi_path)
            .finish()
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error(transparent)]
    Gateway(#[from] nc_06_api_gateway::ConfigError),
}

impl NodeConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset optional keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = NodeConfig::default();

        if let Some(url) = lookup("RPC_URL") {
            config.ledger.rpc_url = url;
        }
        if let Some(secs) = parse::<u64, _>(&lookup, "RPC_TIMEOUT_SECS")? {
            config.ledger.request_timeout = Duration::from_secs(secs);
        }

        config.wallet.private_key =
            lookup("WALLET_PRIVATE_KEY").ok_or(ConfigError::Missing("WALLET_PRIVATE_KEY"))?;
        config.wallet.address = required_address(&lookup, "WALLET_ADDRESS")?;
        config.wallet.contract_address = required_address(&lookup, "SMART_CONTRACT_ADDRESS")?;
        if let Some(path) = lookup("CONTRACT_ABI_PATH") {
            config.wallet.abi_path = PathBuf::from(path);
        }

        if let Some(host) = parse(&lookup, "API_HOST")? {
            config.gateway.host = host;
        }
        if let Some(port) = parse(&lookup, "API_PORT")? {
            config.gateway.port = port;
        }

        if let Some(gas_limit) = parse(&lookup, "GAS_LIMIT")? {
            config.submitter.gas_limit = gas_limit;
        }
        if let Some(gwei) = parse::<u64, _>(&lookup, "GAS_PRICE_GWEI")? {
            config.submitter = config.submitter.with_gas_price_gwei(gwei);
        }
        if let Some(max) = parse(&lookup, "MAX_BATCH_SIZE")? {
            config.submitter.max_batch_size = max;
        }

        if let Some(attempts) = parse(&lookup, "WAIT_MAX_ATTEMPTS")? {
            config.tracker.max_attempts = attempts;
        }
        if let Some(ms) = parse::<u64, _>(&lookup, "WAIT_INTERVAL_MS")? {
            config.tracker.interval = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no subsystem could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.tracker.validate().map_err(|e| ConfigError::Invalid {
            var: "WAIT_MAX_ATTEMPTS",
            reason: e.to_string(),
        })?;
        // A block wait must end in its own timeout, not the gateway's
        let wait_budget = self.tracker.interval.checked_mul(self.tracker.max_attempts);
        if wait_budget.map_or(true, |budget| budget >= self.gateway.request_timeout) {
            return Err(ConfigError::Invalid {
                var: "WAIT_INTERVAL_MS",
                reason: format!(
                    "{} attempts every {:?} do not fit the {:?} request timeout",
                    self.tracker.max_attempts,
                    self.tracker.interval,
                    self.gateway.request_timeout
                ),
            });
        }
        if self.submitter.max_batch_size == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_BATCH_SIZE",
                reason: "must be at least 1".into(),
            });
        }
        if self.submitter.gas_limit == 0 {
            return Err(ConfigError::Invalid {
                var: "GAS_LIMIT",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

fn parse<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })
        })
        .transpose()
}

fn required_address<F>(lookup: &F, var: &'static str) -> Result<Address, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var).ok_or(ConfigError::Missing(var))?;
    let digits = raw.trim();
    let digits = digits.strip_prefix("0x").unwrap_or(digits);
    let bytes = hex::decode(digits).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;
    if bytes.len() != 20 {
        return Err(ConfigError::Invalid {
            var,
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        });
    }
    Ok(Address::from_slice(&bytes))
}
