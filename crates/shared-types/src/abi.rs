//! # Contract ABI Codec
//!
//! Solidity ABI encoding for the three notarization contract functions:
//!
//! | Function | Kind | Returns |
//! |----------|------|---------|
//! | `put(bytes32[])` | write (transaction) | - |
//! | `getObjectCount(bytes32)` | read (`eth_call`) | `uint256` |
//! | `getBlockNo(bytes32,address)` | read (`eth_call`) | `uint256` |

use sha3::{Digest, Keccak256};

use crate::entities::{Address, HashIdentifier, U256};
use crate::errors::LedgerError;

/// Canonical signature of the stamping function.
pub const PUT_SIGNATURE: &str = "put(bytes32[])";

/// Canonical signature of the occurrence-count read.
pub const GET_OBJECT_COUNT_SIGNATURE: &str = "getObjectCount(bytes32)";

/// Canonical signature of the first-block read.
pub const GET_BLOCK_NO_SIGNATURE: &str = "getBlockNo(bytes32,address)";

/// ABI word size.
const WORD: usize = 32;

/// Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// First four bytes of the keccak of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Call data for `put(bytes32[])`.
///
/// Layout: selector, offset to the dynamic array (always `0x20` since it is
/// the only argument), array length, then one word per element.
pub fn encode_put(hashes: &[HashIdentifier]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD * (2 + hashes.len()));
    data.extend_from_slice(&selector(PUT_SIGNATURE));
    data.extend_from_slice(&uint_word(U256::from(WORD)));
    data.extend_from_slice(&uint_word(U256::from(hashes.len())));
    for hash in hashes {
        data.extend_from_slice(hash.as_bytes());
    }
    data
}

/// Call data for `getObjectCount(bytes32)`.
pub fn encode_get_object_count(hash: &HashIdentifier) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&selector(GET_OBJECT_COUNT_SIGNATURE));
    data.extend_from_slice(hash.as_bytes());
    data
}

/// Call data for `getBlockNo(bytes32,address)`.
pub fn encode_get_block_no(hash: &HashIdentifier, account: &Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 2 * WORD);
    data.extend_from_slice(&selector(GET_BLOCK_NO_SIGNATURE));
    data.extend_from_slice(hash.as_bytes());
    data.extend_from_slice(&address_word(account));
    data
}

/// Decode a single `uint256` return value.
///
/// Nodes answer `0x` when the target has no code or the call reverted without
/// data; that is reported as a malformed response rather than as zero.
pub fn decode_uint256(data: &[u8]) -> Result<U256, LedgerError> {
    if data.len() < WORD {
        return Err(LedgerError::MalformedResponse(format!(
            "expected a 32-byte uint256 return value, got {} bytes",
            data.len()
        )));
    }
    Ok(U256::from_big_endian(&data[..WORD]))
}

fn uint_word(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

fn address_word(address: &Address) -> [u8; WORD] {
    // Addresses are left-padded to a full word
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address.as_bytes());
    word
}
