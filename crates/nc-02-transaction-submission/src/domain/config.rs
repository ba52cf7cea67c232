//! Submission parameters.

use serde::{Deserialize, Serialize};
use shared_types::U256;

/// One gwei in wei.
pub const GWEI: u64 = 1_000_000_000;

/// Fixed fee and size policy for stamping transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitterConfig {
    /// Gas ceiling for every stamping transaction.
    pub gas_limit: u64,
    /// Flat gas price in wei. No dynamic fee estimation.
    pub gas_price: U256,
    /// Largest batch accepted in one transaction.
    pub max_batch_size: usize,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            gas_limit: 300_000,
            gas_price: U256::from(GWEI),
            max_batch_size: 256,
        }
    }
}

impl SubmitterConfig {
    /// Set the flat gas price in gwei.
    pub fn with_gas_price_gwei(mut self, gwei: u64) -> Self {
        self.gas_price = U256::from(gwei) * U256::from(GWEI);
        self
    }
}
