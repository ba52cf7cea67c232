//! # Normalization Errors

use thiserror::Error;

/// Errors produced while validating client-supplied hashes.
///
/// All of these are local input errors: no ledger call has been made when one
/// is returned, and the caller can always fix them by correcting the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Not an even-length, non-empty run of hex digits.
    #[error("Malformed hash: {0}")]
    MalformedHash(String),

    /// Decodes to more than 32 bytes.
    #[error("Hash too long: {len} bytes exceeds the 32-byte limit")]
    HashTooLong { len: usize },

    /// A stamp request carried no hashes.
    #[error("Hash list must not be empty")]
    EmptyBatch,

    /// One element of a batch failed normalization.
    #[error("Invalid hash at index {index}: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: Box<NormalizeError>,
    },
}

impl NormalizeError {
    /// The per-hash error, unwrapping batch position information.
    pub fn root_cause(&self) -> &NormalizeError {
        match self {
            NormalizeError::InvalidElement { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
