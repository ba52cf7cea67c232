//! Transaction identifier parsing.

use shared_types::TxHash;

use super::errors::TrackerError;

/// Parse a `0x`-prefixed (or bare) 64-digit hex transaction hash.
pub fn parse_tx_hash(raw: &str) -> Result<TxHash, TrackerError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.len() != 64 {
        return Err(TrackerError::InvalidTransactionId(raw.to_string()));
    }
    let bytes =
        hex::decode(digits).map_err(|_| TrackerError::InvalidTransactionId(raw.to_string()))?;
    Ok(TxHash::from_slice(&bytes))
}
