//! # Stamping Transactions
//!
//! Legacy (type 0) transactions with EIP-155 replay protection.
//!
//! Signing payload: `keccak256(rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]))`
//! Wire format: `rlp([nonce, gasPrice, gasLimit, to, value, data, v, r, s])`
//! with `v = chainId * 2 + 35 + yParity`.

use rlp::RlpStream;
use shared_types::abi::encode_put;
use shared_types::{keccak256, Address, ChainContext, HashIdentifier, TxHash, U256};

use super::config::SubmitterConfig;

/// An unsigned transaction descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerTransaction {
    /// Account the transaction is sent from.
    pub from: Address,
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    /// Target contract.
    pub to: Address,
    pub value: U256,
    /// ABI-encoded call data.
    pub data: Vec<u8>,
    pub chain_id: u64,
}

impl LedgerTransaction {
    /// Build a `put(bytes32[])` call against the notarization contract.
    pub fn stamp(
        context: &ChainContext,
        config: &SubmitterConfig,
        nonce: u64,
        hashes: &[HashIdentifier],
    ) -> Self {
        Self {
            from: context.account,
            nonce,
            gas_price: config.gas_price,
            gas_limit: config.gas_limit,
            to: context.contract,
            value: U256::zero(),
            data: encode_put(hashes),
            chain_id: context.chain_id,
        }
    }

    /// EIP-155 signing hash.
    pub fn signing_hash(&self) -> [u8; 32] {
        let mut stream = RlpStream::new_list(9);
        self.append_payload(&mut stream);
        stream.append(&self.chain_id);
        stream.append(&0u8);
        stream.append(&0u8);
        keccak256(&stream.out())
    }

    /// Encode the signed wire form from signature components.
    pub(crate) fn encode_signed(&self, v: u64, r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
        let mut stream = RlpStream::new_list(9);
        self.append_payload(&mut stream);
        stream.append(&v);
        // r and s are RLP integers: leading zero bytes are dropped
        stream.append(&U256::from_big_endian(r));
        stream.append(&U256::from_big_endian(s));
        stream.out().to_vec()
    }

    fn append_payload(&self, stream: &mut RlpStream) {
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        stream.append(&self.to);
        stream.append(&self.value);
        stream.append(&self.data);
    }
}

/// A signed transaction, ready for broadcast.
///
/// Lives only for the duration of one submission; never persisted or logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    raw: Vec<u8>,
    hash: TxHash,
    nonce: u64,
}

impl SignedTransaction {
    pub(crate) fn new(raw: Vec<u8>, nonce: u64) -> Self {
        let hash = TxHash::from(keccak256(&raw));
        Self { raw, hash, nonce }
    }

    /// RLP wire bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Transaction hash (keccak256 of the wire bytes).
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }
}

impl std::fmt::Debug for SignedTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedTransaction")
            .field("hash", &self.hash)
            .field("nonce", &self.nonce)
            .field("raw_len", &self.raw.len())
            .finish()
    }
}

/// Outcome of a successful stamping submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedStamp {
    /// Identifier for later receipt lookups.
    pub tx_hash: TxHash,
    /// Nonce the transaction was signed with.
    pub nonce: u64,
    /// Number of hashes carried.
    pub hash_count: usize,
}
