//! Inbound ports (API) for the Existence Verifier subsystem.

use async_trait::async_trait;
use shared_types::HashIdentifier;

use crate::domain::errors::VerificationError;
use crate::domain::result::VerificationResult;

/// Primary API for existence queries.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Look up a normalized hash.
    ///
    /// # Errors
    /// * `HashNotFound` - the contract holds zero occurrences
    /// * `Ledger` - either contract read failed
    async fn verify(&self, hash: &HashIdentifier) -> Result<VerificationResult, VerificationError>;
}
