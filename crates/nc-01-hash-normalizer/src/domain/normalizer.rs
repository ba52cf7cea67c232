//! # Normalization Rules
//!
//! `normalize("11")` and `normalize("0x11")` both yield `0x11` followed by 31
//! zero bytes. The output of `HashIdentifier::to_hex` always normalizes back to
//! the same identifier.

use shared_types::{HashIdentifier, HASH_IDENTIFIER_LEN};

use super::errors::NormalizeError;

/// Conventional hex prefix. Only the lowercase form is recognized.
pub const HEX_PREFIX: &str = "0x";

/// Return `raw` with a leading `0x`, adding it when absent.
pub fn ensure_prefix(raw: &str) -> String {
    if raw.starts_with(HEX_PREFIX) {
        raw.to_string()
    } else {
        format!("{HEX_PREFIX}{raw}")
    }
}

/// Normalize one hex string into a 32-byte identifier.
pub fn normalize(raw: &str) -> Result<HashIdentifier, NormalizeError> {
    let digits = raw.strip_prefix(HEX_PREFIX).unwrap_or(raw);

    if digits.is_empty() {
        return Err(NormalizeError::MalformedHash("no hex digits".into()));
    }
    if digits.len() % 2 != 0 {
        return Err(NormalizeError::MalformedHash(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }

    let bytes = hex::decode(digits).map_err(|e| NormalizeError::MalformedHash(e.to_string()))?;
    if bytes.len() > HASH_IDENTIFIER_LEN {
        return Err(NormalizeError::HashTooLong { len: bytes.len() });
    }

    let mut padded = [0u8; HASH_IDENTIFIER_LEN];
    padded[..bytes.len()].copy_from_slice(&bytes);
    Ok(HashIdentifier::from_bytes(padded))
}

/// Normalize a stamp request, preserving order.
///
/// Fails on the first bad element; an empty request is rejected outright.
pub fn normalize_batch<S: AsRef<str>>(raw: &[S]) -> Result<Vec<HashIdentifier>, NormalizeError> {
    if raw.is_empty() {
        return Err(NormalizeError::EmptyBatch);
    }

    raw.iter()
        .enumerate()
        .map(|(index, h)| {
            normalize(h.as_ref()).map_err(|e| NormalizeError::InvalidElement {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}
