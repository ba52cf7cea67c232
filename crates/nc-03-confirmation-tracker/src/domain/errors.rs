//! # Tracker Errors

use shared_types::LedgerError;
use thiserror::Error;

/// Errors raised while waiting on the ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// The attempt budget ran out before the condition held.
    ///
    /// The node may be stalled or unsynchronized; a watched transaction may
    /// still be pending.
    #[error("No confirmation after {attempts} attempts")]
    ConfirmationTimeout { attempts: u32 },

    /// A policy with zero attempts can never succeed.
    #[error("Invalid polling policy: {0}")]
    InvalidPolicy(String),

    /// The transaction identifier is not a 32-byte hex value.
    #[error("Invalid transaction id: {0}")]
    InvalidTransactionId(String),

    /// The ledger could not answer a poll.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
