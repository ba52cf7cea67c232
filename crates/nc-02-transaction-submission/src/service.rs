//! # Stamp Service
//!
//! Implements [`StampingApi`] on top of an injected [`LedgerClient`].
//!
//! ## Flow
//!
//! 1. Validate the batch (no ledger traffic for bad input)
//! 2. Take the per-account submission lock
//! 3. Read the pending transaction count; that count is the nonce
//! 4. Build and sign the `put(bytes32[])` transaction
//! 5. Broadcast
//!
//! Steps 3-5 run under the lock, so two concurrent stampings can never sign
//! with the same nonce.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{tx_hash_hex, ChainContext, HashIdentifier, LedgerClient};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::config::SubmitterConfig;
use crate::domain::errors::SubmissionError;
use crate::domain::signer::Credential;
use crate::domain::transaction::{LedgerTransaction, SubmittedStamp};
use crate::ports::inbound::StampingApi;

/// Transaction Submission service.
///
/// ## Thread Safety
///
/// Shareable across tasks via `Arc`. Submissions are serialized internally;
/// everything before the lock (validation, encoding) runs concurrently.
pub struct StampService {
    ledger: Arc<dyn LedgerClient>,
    context: Arc<ChainContext>,
    credential: Arc<Credential>,
    config: SubmitterConfig,
    /// Held across nonce fetch, signing and broadcast.
    submission: Mutex<()>,
}

impl StampService {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        context: Arc<ChainContext>,
        credential: Arc<Credential>,
        config: SubmitterConfig,
    ) -> Self {
        Self {
            ledger,
            context,
            credential,
            config,
            submission: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    fn validate(&self, hashes: &[HashIdentifier]) -> Result<(), SubmissionError> {
        if hashes.is_empty() {
            return Err(SubmissionError::EmptyBatch);
        }
        if hashes.len() > self.config.max_batch_size {
            return Err(SubmissionError::BatchTooLarge {
                len: hashes.len(),
                max: self.config.max_batch_size,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StampingApi for StampService {
    #[instrument(skip(self, hashes), fields(count = hashes.len()))]
    async fn stamp(&self, hashes: &[HashIdentifier]) -> Result<SubmittedStamp, SubmissionError> {
        self.validate(hashes)?;

        let _guard = self.submission.lock().await;

        // Pending-inclusive count, so unmined submissions are already counted
        let nonce = self
            .ledger
            .get_transaction_count(self.context.account)
            .await
            .map_err(SubmissionError::SubmissionFailed)?;
        debug!(nonce, "Nonce selected");

        let tx = LedgerTransaction::stamp(&self.context, &self.config, nonce, hashes);
        let signed = self.credential.sign(&tx)?;

        match self.ledger.send_raw_transaction(signed.raw().to_vec()).await {
            Ok(tx_hash) => {
                if tx_hash != signed.hash() {
                    warn!(
                        node = %tx_hash_hex(&tx_hash),
                        local = %tx_hash_hex(&signed.hash()),
                        "Node reported a different transaction hash"
                    );
                }
                info!(tx = %tx_hash_hex(&tx_hash), nonce, "Stamping transaction submitted");
                Ok(SubmittedStamp {
                    tx_hash,
                    nonce,
                    hash_count: hashes.len(),
                })
            }
            Err(e) => {
                warn!(nonce, error = %e, "Stamping transaction rejected");
                Err(SubmissionError::SubmissionFailed(e))
            }
        }
    }
}
