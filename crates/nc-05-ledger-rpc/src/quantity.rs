//! Hex encodings used on the Ethereum JSON-RPC wire.
//!
//! Quantities are `0x`-prefixed, big-endian and without leading zeros
//! (`0x0` for zero). Data is `0x`-prefixed with two digits per byte.

use shared_types::{LedgerError, U256};

fn digits<'a>(value: &'a str, what: &str) -> Result<&'a str, LedgerError> {
    value
        .strip_prefix("0x")
        .filter(|d| !d.is_empty())
        .ok_or_else(|| {
            LedgerError::MalformedResponse(format!("{what}: not a hex quantity: {value:?}"))
        })
}

/// Parse a quantity that must fit in 64 bits.
pub fn parse_u64(value: &str, what: &str) -> Result<u64, LedgerError> {
    let d = digits(value, what)?;
    u64::from_str_radix(d, 16)
        .map_err(|e| LedgerError::MalformedResponse(format!("{what}: {e}: {value:?}")))
}

/// Parse a 256-bit quantity.
pub fn parse_u256(value: &str, what: &str) -> Result<U256, LedgerError> {
    let d = digits(value, what)?;
    U256::from_str_radix(d, 16)
        .map_err(|e| LedgerError::MalformedResponse(format!("{what}: {e}: {value:?}")))
}

/// Parse unformatted data. `0x` alone is the empty byte string.
pub fn parse_data(value: &str, what: &str) -> Result<Vec<u8>, LedgerError> {
    let d = value
        .strip_prefix("0x")
        .ok_or_else(|| LedgerError::MalformedResponse(format!("{what}: missing 0x prefix")))?;
    hex::decode(d).map_err(|e| LedgerError::MalformedResponse(format!("{what}: {e}")))
}

/// Encode bytes as unformatted data.
pub fn encode_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
