//! # Submission Errors

use shared_types::LedgerError;
use thiserror::Error;

/// Errors that can occur while stamping a batch of hashes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// No hashes to stamp. Raised before any ledger call.
    #[error("Hash list must not be empty")]
    EmptyBatch,

    /// More hashes than the fixed gas ceiling is sized for.
    #[error("Batch of {len} hashes exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    /// The ledger rejected or never received the transaction.
    ///
    /// Covers stale nonces, insufficient funds, an unreachable node and
    /// malformed node responses alike.
    #[error("Submission failed: {0}")]
    SubmissionFailed(#[source] LedgerError),

    /// The held credential could not produce a signature.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl SubmissionError {
    /// Whether the error is the caller's to fix (bad input) rather than the ledger's.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmissionError::EmptyBatch | SubmissionError::BatchTooLarge { .. }
        )
    }
}

/// Errors loading the signing credential at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The key is not valid hex.
    #[error("Private key is not valid hex")]
    InvalidHex,

    /// The key is not a valid secp256k1 scalar.
    #[error("Private key is not a valid secp256k1 key")]
    InvalidKey,
}
