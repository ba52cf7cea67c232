//! Verification outcome.

use shared_types::{BlockNumber, HashIdentifier, LedgerError, U256};

/// Proof that a hash is recorded.
///
/// `occurrence_count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub hash: HashIdentifier,
    pub occurrence_count: u64,
    /// First block the configured account recorded the hash in.
    pub first_block: BlockNumber,
}

/// Narrow a contract `uint256` to `u64`.
pub(crate) fn narrow(value: U256, what: &str) -> Result<u64, LedgerError> {
    if value > U256::from(u64::MAX) {
        return Err(LedgerError::MalformedResponse(format!(
            "{what} does not fit in 64 bits: {value}"
        )));
    }
    Ok(value.low_u64())
}
