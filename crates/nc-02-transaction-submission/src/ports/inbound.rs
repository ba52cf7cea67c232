//! Inbound ports (API) for the Transaction Submission subsystem.

use async_trait::async_trait;
use shared_types::HashIdentifier;

use crate::domain::errors::SubmissionError;
use crate::domain::transaction::SubmittedStamp;

/// Primary API for stamping hashes onto the ledger.
#[async_trait]
pub trait StampingApi: Send + Sync {
    /// Record a batch of normalized hashes in one contract transaction.
    ///
    /// Returns once the node has accepted the transaction; confirmation is
    /// tracked separately.
    ///
    /// # Errors
    /// * `EmptyBatch` / `BatchTooLarge` - rejected before any ledger call
    /// * `SubmissionFailed` - the node refused or could not be reached
    async fn stamp(&self, hashes: &[HashIdentifier]) -> Result<SubmittedStamp, SubmissionError>;
}
