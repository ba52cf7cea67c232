//! # Core Domain Entities
//!
//! Ledger-facing entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Identifiers**: `HashIdentifier`, `TxHash`, `Address`
//! - **Ledger state**: `TransactionReceipt`, `ReceiptStatus`, `BlockNumber`
//! - **Process context**: `ChainContext`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::abi::keccak256;

// Re-export fixed-width types from primitive-types for use across all subsystems
pub use primitive_types::{H160 as Address, H256 as TxHash, U256};

/// Block height on the ledger.
pub type BlockNumber = u64;

/// Width of a contract `bytes32` slot.
pub const HASH_IDENTIFIER_LEN: usize = 32;

// =============================================================================
// CLUSTER A: IDENTIFIERS
// =============================================================================

/// A notarized content hash in the contract's `bytes32` form.
///
/// Always exactly 32 bytes. Shorter inputs are right-padded with zeros by the
/// normalizer before one of these is constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashIdentifier([u8; HASH_IDENTIFIER_LEN]);

impl HashIdentifier {
    /// Wrap an already fixed-width value.
    pub const fn from_bytes(bytes: [u8; HASH_IDENTIFIER_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_IDENTIFIER_LEN] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex of all 32 bytes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HashIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashIdentifier({})", self.to_hex())
    }
}

impl fmt::Display for HashIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; HASH_IDENTIFIER_LEN]> for HashIdentifier {
    fn from(bytes: [u8; HASH_IDENTIFIER_LEN]) -> Self {
        Self(bytes)
    }
}

/// Render an address in EIP-55 mixed-case checksum form.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Full `0x`-prefixed hex of a transaction hash.
///
/// `Display` on `H256` abbreviates the middle bytes, which is useless to API
/// clients, so callers format through this instead.
pub fn tx_hash_hex(hash: &TxHash) -> String {
    format!("0x{}", hex::encode(hash.as_bytes()))
}

// =============================================================================
// CLUSTER B: LEDGER STATE
// =============================================================================

/// A transaction receipt as reported by the ledger node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Hash of the transaction this receipt belongs to.
    pub transaction_hash: TxHash,
    /// Block that included the transaction.
    pub block_number: BlockNumber,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
    /// Address of a contract created by the transaction, if any.
    pub contract_address: Option<Address>,
    /// Post-byzantium status flag (1 = success, 0 = reverted).
    pub status: Option<u64>,
}

/// Confirmation state of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReceiptStatus {
    /// The node has no receipt yet.
    Pending,
    /// The transaction was included in a block.
    Confirmed {
        block_number: BlockNumber,
        gas_used: u64,
        contract_address: Option<Address>,
    },
}

impl From<TransactionReceipt> for ReceiptStatus {
    fn from(receipt: TransactionReceipt) -> Self {
        ReceiptStatus::Confirmed {
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            contract_address: receipt.contract_address,
        }
    }
}

// =============================================================================
// CLUSTER C: PROCESS CONTEXT
// =============================================================================

/// Process-lifetime ledger context, resolved once at startup.
///
/// Passed by value (or `Arc`) into every subsystem at construction time and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainContext {
    /// Account that signs and owns every stamping transaction.
    pub account: Address,
    /// Address of the notarization contract.
    pub contract: Address,
    /// EIP-155 chain id reported by the node.
    pub chain_id: u64,
    /// `net_version` reported by the node.
    pub network_id: String,
}
