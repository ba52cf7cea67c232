//! # Error Types
//!
//! Transport-level errors raised by `LedgerClient` implementations.

use thiserror::Error;

/// Errors that can occur while talking to the ledger node.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The endpoint could not be reached (connect failure, transport timeout).
    #[error("Ledger unreachable: {0}")]
    Unreachable(String),

    /// The node answered with a JSON-RPC error object.
    #[error("Ledger RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node answered, but the payload could not be interpreted.
    #[error("Malformed ledger response: {0}")]
    MalformedResponse(String),
}

impl LedgerError {
    /// Whether this error means the node was never reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, LedgerError::Unreachable(_))
    }
}
