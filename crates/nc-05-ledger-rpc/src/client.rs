//! JSON-RPC ledger client.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use shared_types::{
    Address, BlockNumber, LedgerClient, LedgerError, TransactionReceipt, TxHash, U256,
};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::config::LedgerConfig;
use crate::quantity::{encode_data, parse_data, parse_u256, parse_u64};
use crate::types::{CallRequest, JsonRpcRequest, JsonRpcResponse, RpcReceipt};

/// Errors constructing the client. Runtime failures are `LedgerError`s.
#[derive(Debug, Error)]
pub enum RpcSetupError {
    #[error("Invalid RPC URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// `LedgerClient` speaking JSON-RPC 2.0 over HTTP.
///
/// One pooled `reqwest::Client` is shared by every request; the client holds
/// no per-request state beyond a monotonically increasing request id.
#[derive(Debug)]
pub struct JsonRpcLedgerClient {
    client: Client,
    url: Url,
    request_id: AtomicU64,
}

impl JsonRpcLedgerClient {
    pub fn new(config: &LedgerConfig) -> Result<Self, RpcSetupError> {
        let url = Url::parse(&config.rpc_url).map_err(|e| RpcSetupError::InvalidUrl {
            url: config.rpc_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RpcSetupError::InvalidUrl {
                url: config.rpc_url.clone(),
                reason: "scheme must be http or https".into(),
            });
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            url,
            request_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Issue one call, returning the raw `result` (possibly `null`).
    async fn raw_call<P: Serialize>(&self, method: &str, params: P) -> Result<Value, LedgerError> {
        let request = JsonRpcRequest::new(method, params, self.next_id());
        trace!(method, id = request.id, "JSON-RPC request");

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LedgerError::Unreachable(format!("Cannot connect to {}", self.url))
                } else {
                    LedgerError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LedgerError::Unreachable(e.to_string()))?;

        let rpc: JsonRpcResponse = serde_json::from_slice(&body).map_err(|e| {
            LedgerError::MalformedResponse(format!("HTTP {status}, body is not JSON-RPC: {e}"))
        })?;

        if let Some(error) = rpc.error {
            debug!(method, code = error.code, message = %error.message, "JSON-RPC error");
            return Err(error.into());
        }

        Ok(rpc.result.unwrap_or(Value::Null))
    }

    /// Issue one call and deserialize a non-null result.
    async fn call_typed<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, LedgerError> {
        let value = self.raw_call(method, params).await?;
        if value.is_null() {
            return Err(LedgerError::MalformedResponse(format!(
                "{method}: missing result"
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| LedgerError::MalformedResponse(format!("{method}: {e}")))
    }
}

#[async_trait]
impl LedgerClient for JsonRpcLedgerClient {
    #[instrument(skip(self))]
    async fn is_connected(&self) -> bool {
        self.network_version().await.is_ok()
    }

    #[instrument(skip(self))]
    async fn chain_id(&self) -> Result<u64, LedgerError> {
        let id: String = self.call_typed("eth_chainId", [(); 0]).await?;
        parse_u64(&id, "eth_chainId")
    }

    #[instrument(skip(self))]
    async fn network_version(&self) -> Result<String, LedgerError> {
        self.call_typed("net_version", [(); 0]).await
    }

    #[instrument(skip(self))]
    async fn block_number(&self) -> Result<BlockNumber, LedgerError> {
        let height: String = self.call_typed("eth_blockNumber", [(); 0]).await?;
        parse_u64(&height, "eth_blockNumber")
    }

    #[instrument(skip(self))]
    async fn get_balance(&self, account: Address) -> Result<U256, LedgerError> {
        let balance: String = self
            .call_typed("eth_getBalance", json!([account, "latest"]))
            .await?;
        parse_u256(&balance, "eth_getBalance")
    }

    #[instrument(skip(self))]
    async fn get_transaction_count(&self, account: Address) -> Result<u64, LedgerError> {
        let count: String = self
            .call_typed("eth_getTransactionCount", json!([account, "pending"]))
            .await?;
        parse_u64(&count, "eth_getTransactionCount")
    }

    #[instrument(skip(self))]
    async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, LedgerError> {
        let value = self
            .raw_call("eth_getTransactionReceipt", json!([tx_hash]))
            .await?;
        let receipt: Option<RpcReceipt> = serde_json::from_value(value).map_err(|e| {
            LedgerError::MalformedResponse(format!("eth_getTransactionReceipt: {e}"))
        })?;
        match receipt {
            Some(receipt) => receipt.into_receipt(),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, raw), fields(len = raw.len()))]
    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash, LedgerError> {
        self.call_typed("eth_sendRawTransaction", [encode_data(&raw)])
            .await
    }

    #[instrument(skip(self, data), fields(len = data.len()))]
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, LedgerError> {
        let request = CallRequest {
            to,
            data: encode_data(&data),
        };
        let result: String = self
            .call_typed("eth_call", json!([request, "latest"]))
            .await?;
        parse_data(&result, "eth_call")
    }
}
