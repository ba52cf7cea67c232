//! # Verification Errors

use shared_types::{HashIdentifier, LedgerError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The contract reports zero occurrences.
    #[error("Hash {0} not found")]
    HashNotFound(HashIdentifier),

    /// A contract read failed or returned an unusable value.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
