//! Inbound ports (API) for the Confirmation Tracker subsystem.

use async_trait::async_trait;
use shared_types::{BlockNumber, ReceiptStatus, TransactionReceipt};

use crate::domain::errors::TrackerError;
use crate::domain::policy::TrackerPolicy;

/// Primary API for confirmation tracking.
#[async_trait]
pub trait ConfirmationApi: Send + Sync {
    /// Wait until the block height exceeds the height observed at call start.
    ///
    /// Returns the newly observed height.
    ///
    /// # Errors
    /// * `ConfirmationTimeout` - `policy.max_attempts` polls saw no new block
    /// * `InvalidPolicy` - `policy.max_attempts` is zero
    async fn await_next_block(&self, policy: TrackerPolicy) -> Result<BlockNumber, TrackerError>;

    /// One-shot receipt lookup for a hex transaction id.
    async fn get_receipt(&self, tx_id: &str) -> Result<ReceiptStatus, TrackerError>;

    /// Poll `get_receipt` until the transaction is included in a block.
    async fn await_receipt(
        &self,
        tx_id: &str,
        policy: TrackerPolicy,
    ) -> Result<TransactionReceipt, TrackerError>;
}
