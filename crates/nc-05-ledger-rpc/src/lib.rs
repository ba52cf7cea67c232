//! # Ledger RPC Adapter (NC-05)
//!
//! Production `LedgerClient`: JSON-RPC 2.0 over HTTP to an
//! Ethereum-compatible node.
//!
//! ## Method Mapping
//!
//! | Capability | JSON-RPC |
//! |------------|----------|
//! | `is_connected` / `network_version` | `net_version` |
//! | `chain_id` | `eth_chainId` |
//! | `block_number` | `eth_blockNumber` |
//! | `get_balance` | `eth_getBalance [addr, "latest"]` |
//! | `get_transaction_count` | `eth_getTransactionCount [addr, "pending"]` |
//! | `get_transaction_receipt` | `eth_getTransactionReceipt [hash]` |
//! | `send_raw_transaction` | `eth_sendRawTransaction [0x..]` |
//! | `call` | `eth_call [{to, data}, "latest"]` |
//!
//! ## Error Mapping
//!
//! - Transport failures (connect, timeout, I/O) → `LedgerError::Unreachable`
//! - JSON-RPC error objects → `LedgerError::Rpc`
//! - Anything that does not parse → `LedgerError::MalformedResponse`

pub mod client;
pub mod config;
pub mod quantity;
pub mod types;

pub use client::{JsonRpcLedgerClient, RpcSetupError};
pub use config::LedgerConfig;
