//! # Ledger Capability (Driven Port)
//!
//! The operations Notary-Chain needs from a ledger node. The production
//! implementation speaks JSON-RPC (`nc-05-ledger-rpc`); tests use an
//! in-memory fake that can advance blocks and mine receipts on demand.

use async_trait::async_trait;

use crate::entities::{Address, BlockNumber, TransactionReceipt, TxHash, U256};
use crate::errors::LedgerError;

/// Client of an Ethereum-compatible ledger node.
///
/// Implementations must be cheap to share (`Arc<dyn LedgerClient>`) and hold
/// no per-request state.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Whether the node currently answers requests.
    async fn is_connected(&self) -> bool;

    /// EIP-155 chain id (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, LedgerError>;

    /// Network id (`net_version`).
    async fn network_version(&self) -> Result<String, LedgerError>;

    /// Current block height (`eth_blockNumber`).
    async fn block_number(&self) -> Result<BlockNumber, LedgerError>;

    /// Balance of an account in wei (`eth_getBalance`).
    async fn get_balance(&self, account: Address) -> Result<U256, LedgerError>;

    /// Next nonce for an account (`eth_getTransactionCount`).
    async fn get_transaction_count(&self, account: Address) -> Result<u64, LedgerError>;

    /// Receipt of a transaction, `None` while it is still pending
    /// (`eth_getTransactionReceipt`).
    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, LedgerError>;

    /// Broadcast a signed transaction (`eth_sendRawTransaction`).
    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, LedgerError>;

    /// Execute a read-only contract call against the latest block (`eth_call`).
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, LedgerError>;
}
