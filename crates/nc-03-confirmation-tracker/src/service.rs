//! # Confirmation Tracker Service
//!
//! Implements [`ConfirmationApi`] over an injected [`LedgerClient`].

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{BlockNumber, LedgerClient, ReceiptStatus, TransactionReceipt, TxHash};
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::TrackerError;
use crate::domain::policy::TrackerPolicy;
use crate::domain::tx_id::parse_tx_hash;
use crate::ports::inbound::ConfirmationApi;

/// Confirmation Tracker service.
///
/// Stateless between calls; share via `Arc`.
pub struct ConfirmationTracker {
    ledger: Arc<dyn LedgerClient>,
}

impl ConfirmationTracker {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self { ledger }
    }

    async fn receipt_for(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, TrackerError> {
        Ok(self.ledger.get_transaction_receipt(hash).await?)
    }
}

/// Run `probe` up to `policy.max_attempts` times, sleeping between attempts.
async fn poll<T, F, Fut>(policy: TrackerPolicy, mut probe: F) -> Result<T, TrackerError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Option<T>, TrackerError>>,
{
    policy.validate()?;

    for attempt in 1..=policy.max_attempts {
        if let Some(value) = probe(attempt).await? {
            return Ok(value);
        }
        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    Err(TrackerError::ConfirmationTimeout {
        attempts: policy.max_attempts,
    })
}

#[async_trait]
impl ConfirmationApi for ConfirmationTracker {
    #[instrument(skip(self))]
    async fn await_next_block(&self, policy: TrackerPolicy) -> Result<BlockNumber, TrackerError> {
        policy.validate()?;
        let start = self.ledger.block_number().await?;
        debug!(start, "Waiting for next block");

        let result = poll(policy, move |attempt| async move {
            let height = self.ledger.block_number().await?;
            debug!(attempt, height, "Polled block height");
            Ok::<_, TrackerError>((height > start).then_some(height))
        })
        .await;

        match &result {
            Ok(height) => info!(start, height, "Ledger advanced"),
            Err(TrackerError::ConfirmationTimeout { attempts }) => {
                warn!(start, attempts, "Ledger did not advance")
            }
            Err(_) => {}
        }
        result
    }

    #[instrument(skip(self))]
    async fn get_receipt(&self, tx_id: &str) -> Result<ReceiptStatus, TrackerError> {
        let hash = parse_tx_hash(tx_id)?;
        Ok(match self.receipt_for(hash).await? {
            Some(receipt) => receipt.into(),
            None => ReceiptStatus::Pending,
        })
    }

    #[instrument(skip(self))]
    async fn await_receipt(
        &self,
        tx_id: &str,
        policy: TrackerPolicy,
    ) -> Result<TransactionReceipt, TrackerError> {
        let hash = parse_tx_hash(tx_id)?;

        let receipt = poll(policy, move |attempt| async move {
            let receipt = self.receipt_for(hash).await?;
            debug!(attempt, found = receipt.is_some(), "Polled receipt");
            Ok::<_, TrackerError>(receipt)
        })
        .await?;

        info!(block = receipt.block_number, "Transaction confirmed");
        Ok(receipt)
    }
}
