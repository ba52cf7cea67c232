//! JSON-RPC 2.0 envelopes and Ethereum wire objects.

use serde::{Deserialize, Serialize};
use shared_types::{Address, LedgerError, TransactionReceipt, TxHash};

use crate::quantity::parse_u64;

/// JSON-RPC request structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: T,
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: impl Into<String>, params: T, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC response structure.
///
/// `result` stays untyped here: `null` is a legitimate answer for some
/// methods (an unknown receipt) and an error for others.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl From<JsonRpcError> for LedgerError {
    fn from(error: JsonRpcError) -> Self {
        LedgerError::Rpc {
            code: error.code,
            message: error.message,
        }
    }
}

/// `eth_call` transaction object.
#[derive(Debug, Serialize)]
pub struct CallRequest {
    pub to: Address,
    pub data: String,
}

/// Receipt as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    pub transaction_hash: TxHash,
    /// Some nodes return a receipt stub with a null block while the
    /// transaction is still pending.
    #[serde(default)]
    pub block_number: Option<String>,
    pub gas_used: String,
    #[serde(default)]
    pub contract_address: Option<Address>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RpcReceipt {
    /// Convert to the domain receipt; `None` while the block is unknown.
    pub fn into_receipt(self) -> Result<Option<TransactionReceipt>, LedgerError> {
        let Some(block) = self.block_number else {
            return Ok(None);
        };
        Ok(Some(TransactionReceipt {
            transaction_hash: self.transaction_hash,
            block_number: parse_u64(&block, "receipt.blockNumber")?,
            gas_used: parse_u64(&self.gas_used, "receipt.gasUsed")?,
            contract_address: self.contract_address,
            status: self
                .status
                .as_deref()
                .map(|s| parse_u64(s, "receipt.status"))
                .transpose()?,
        }))
    }
}
