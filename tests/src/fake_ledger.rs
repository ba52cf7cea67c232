//! # In-Memory Ledger
//!
//! A `LedgerClient` that behaves like a single-account dev node running the
//! notarization contract:
//!
//! - `eth_sendRawTransaction` decodes the RLP envelope, enforces the pending
//!   nonce and queues the `put(bytes32[])` payload
//! - nothing is mined until [`FakeLedger::mine`] is called
//! - `eth_call` answers `getObjectCount` / `getBlockNo` from mined state
//!
//! Signatures are not checked; every transaction is attributed to the
//! configured sender.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use rlp::Rlp;
use shared_types::abi::{
    selector, GET_BLOCK_NO_SIGNATURE, GET_OBJECT_COUNT_SIGNATURE, PUT_SIGNATURE,
};
use shared_types::{
    keccak256, Address, BlockNumber, ChainContext, HashIdentifier, LedgerClient, LedgerError,
    TransactionReceipt, TxHash, U256,
};

/// Well-known development key.
pub const TEST_PRIVATE_KEY: &str =
    "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Address derived from [`TEST_PRIVATE_KEY`].
pub const TEST_ACCOUNT: [u8; 20] = [
    0x2c, 0x75, 0x36, 0xe3, 0x60, 0x5d, 0x9c, 0x16, 0xa7, 0xa3, 0xd7, 0xb1, 0x89, 0x8e, 0x52,
    0x93, 0x96, 0xa6, 0x5c, 0x23,
];

pub const TEST_CHAIN_ID: u64 = 12345;

const BASE_GAS: u64 = 21_000;
const GAS_PER_HASH: u64 = 20_000;

struct PendingTx {
    hash: TxHash,
    hashes: Vec<HashIdentifier>,
}

struct LedgerState {
    connected: bool,
    height: BlockNumber,
    next_nonce: u64,
    balance: U256,
    pending: Vec<PendingTx>,
    receipts: HashMap<TxHash, TransactionReceipt>,
    counts: HashMap<HashIdentifier, u64>,
    first_blocks: HashMap<(HashIdentifier, Address), BlockNumber>,
    reject_next: Option<LedgerError>,
    requests: Vec<&'static str>,
}

/// In-memory ledger; share via `Arc`.
pub struct FakeLedger {
    sender: Address,
    contract: Address,
    state: Mutex<LedgerState>,
}

impl Default for FakeLedger {
    fn default() -> Self {
        Self::new(100)
    }
}

impl FakeLedger {
    /// A connected ledger at `height` with nothing mined for the test account.
    pub fn new(height: BlockNumber) -> Self {
        Self {
            sender: Address::from(TEST_ACCOUNT),
            contract: Address::repeat_byte(0xc0),
            state: Mutex::new(LedgerState {
                connected: true,
                height,
                next_nonce: 0,
                balance: U256::exp10(18),
                pending: Vec::new(),
                receipts: HashMap::new(),
                counts: HashMap::new(),
                first_blocks: HashMap::new(),
                reject_next: None,
                requests: Vec::new(),
            }),
        }
    }

    /// Context matching this ledger and the test credential.
    pub fn context(&self) -> ChainContext {
        ChainContext {
            account: self.sender,
            contract: self.contract,
            chain_id: TEST_CHAIN_ID,
            network_id: TEST_CHAIN_ID.to_string(),
        }
    }

    /// Seal one block holding every pending transaction. Returns its height.
    pub fn mine(&self) -> BlockNumber {
        let mut state = self.state.lock();
        state.height += 1;
        let height = state.height;

        for tx in std::mem::take(&mut state.pending) {
            for hash in &tx.hashes {
                *state.counts.entry(*hash).or_insert(0) += 1;
                state
                    .first_blocks
                    .entry((*hash, self.sender))
                    .or_insert(height);
            }
            let receipt = TransactionReceipt {
                transaction_hash: tx.hash,
                block_number: height,
                gas_used: BASE_GAS + GAS_PER_HASH * tx.hashes.len() as u64,
                contract_address: None,
                status: Some(1),
            };
            state.receipts.insert(tx.hash, receipt);
        }
        height
    }

    pub fn height(&self) -> BlockNumber {
        self.state.lock().height
    }

    pub fn set_connected(&self, connected: bool) {
        self.state.lock().connected = connected;
    }

    /// Fail the next broadcast with `error` without consuming a nonce.
    pub fn reject_next_send(&self, error: LedgerError) {
        self.state.lock().reject_next = Some(error);
    }

    /// Another writer used the account's next nonce.
    pub fn external_submission(&self) {
        self.state.lock().next_nonce += 1;
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Every JSON-RPC method invoked so far, in order.
    pub fn requests(&self) -> Vec<&'static str> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|m| **m == method)
            .count()
    }

    fn record(&self, method: &'static str) -> Result<(), LedgerError> {
        let mut state = self.state.lock();
        state.requests.push(method);
        if state.connected {
            Ok(())
        } else {
            Err(LedgerError::Unreachable("connection refused".into()))
        }
    }
}

fn malformed(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::MalformedResponse(e.to_string())
}

fn word(value: u64) -> Vec<u8> {
    let mut out = [0u8; 32];
    U256::from(value).to_big_endian(&mut out);
    out.to_vec()
}

fn hash_arg(data: &[u8]) -> Result<HashIdentifier, LedgerError> {
    let bytes: [u8; 32] = data
        .get(4..36)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| malformed("short call data"))?;
    Ok(HashIdentifier::from_bytes(bytes))
}

/// Decode `put(bytes32[])` call data.
fn decode_put(data: &[u8]) -> Result<Vec<HashIdentifier>, LedgerError> {
    if data.len() < 68 || data[..4] != selector(PUT_SIGNATURE) {
        return Err(LedgerError::Rpc {
            code: 3,
            message: "execution reverted".into(),
        });
    }
    let len = U256::from_big_endian(&data[36..68]).low_u64() as usize;
    let body = &data[68..];
    if body.len() != len * 32 {
        return Err(malformed("array length does not match call data"));
    }
    Ok(body
        .chunks_exact(32)
        .map(|chunk| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            HashIdentifier::from_bytes(bytes)
        })
        .collect())
}

#[async_trait]
impl LedgerClient for FakeLedger {
    async fn is_connected(&self) -> bool {
        self.record("net_version").is_ok()
    }

    async fn chain_id(&self) -> Result<u64, LedgerError> {
        self.record("eth_chainId")?;
        Ok(TEST_CHAIN_ID)
    }

    async fn network_version(&self) -> Result<String, LedgerError> {
        self.record("net_version")?;
        Ok(TEST_CHAIN_ID.to_string())
    }

    async fn block_number(&self) -> Result<BlockNumber, LedgerError> {
        self.record("eth_blockNumber")?;
        Ok(self.state.lock().height)
    }

    async fn get_balance(&self, account: Address) -> Result<U256, LedgerError> {
        self.record("eth_getBalance")?;
        let state = self.state.lock();
        Ok(if account == self.sender {
            state.balance
        } else {
            U256::zero()
        })
    }

    async fn get_transaction_count(&self, account: Address) -> Result<u64, LedgerError> {
        self.record("eth_getTransactionCount")?;
        Ok(if account == self.sender {
            self.state.lock().next_nonce
        } else {
            0
        })
    }

    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, LedgerError> {
        self.record("eth_getTransactionReceipt")?;
        Ok(self.state.lock().receipts.get(&tx_hash).cloned())
    }

    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, LedgerError> {
        self.record("eth_sendRawTransaction")?;

        let envelope = Rlp::new(&raw);
        let nonce: u64 = envelope.val_at(0).map_err(malformed)?;
        let to: Address = envelope.val_at(3).map_err(malformed)?;
        let data: Vec<u8> = envelope.val_at(5).map_err(malformed)?;

        let mut state = self.state.lock();
        if let Some(error) = state.reject_next.take() {
            return Err(error);
        }
        if nonce != state.next_nonce {
            let message = if nonce < state.next_nonce {
                "nonce too low"
            } else {
                "nonce too high"
            };
            return Err(LedgerError::Rpc {
                code: -32000,
                message: message.into(),
            });
        }
        if to != self.contract {
            return Err(LedgerError::Rpc {
                code: -32000,
                message: "unknown contract".into(),
            });
        }

        let hashes = decode_put(&data)?;
        let hash = TxHash::from(keccak256(&raw));
        state.next_nonce += 1;
        state.pending.push(PendingTx { hash, hashes });
        Ok(hash)
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, LedgerError> {
        self.record("eth_call")?;
        if to != self.contract || data.len() < 4 {
            // No code at the target
            return Ok(Vec::new());
        }

        let state = self.state.lock();
        if data[..4] == selector(GET_OBJECT_COUNT_SIGNATURE) {
            let hash = hash_arg(&data)?;
            Ok(word(state.counts.get(&hash).copied().unwrap_or(0)))
        } else if data[..4] == selector(GET_BLOCK_NO_SIGNATURE) {
            let hash = hash_arg(&data)?;
            let account = data
                .get(48..68)
                .map(Address::from_slice)
                .ok_or_else(|| malformed("short call data"))?;
            Ok(word(
                state
                    .first_blocks
                    .get(&(hash, account))
                    .copied()
                    .unwrap_or(0),
            ))
        } else {
            Err(LedgerError::Rpc {
                code: 3,
                message: "execution reverted".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::abi::{encode_get_block_no, encode_get_object_count};

    #[tokio::test]
    async fn test_unmined_state_is_empty() {
        let ledger = FakeLedger::new(7);
        let hash = HashIdentifier::from_bytes([1; 32]);

        let count = ledger
            .call(ledger.contract, encode_get_object_count(&hash))
            .await
            .unwrap();
        assert_eq!(count, word(0));
        assert_eq!(ledger.block_number().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_disconnected_ledger_is_unreachable() {
        let ledger = FakeLedger::default();
        ledger.set_connected(false);

        assert!(!ledger.is_connected().await);
        assert!(ledger.block_number().await.unwrap_err().is_unreachable());
        let block = ledger
            .call(
                ledger.contract,
                encode_get_block_no(&HashIdentifier::default(), &ledger.sender),
            )
            .await;
        assert!(block.is_err());
    }

    #[test]
    fn test_mining_empty_block_advances_height() {
        let ledger = FakeLedger::new(1);
        assert_eq!(ledger.mine(), 2);
        assert_eq!(ledger.height(), 2);
    }
}
