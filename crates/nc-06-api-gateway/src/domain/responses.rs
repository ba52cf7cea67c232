//! Request and response bodies.
//!
//! Field names follow the established wire contract, which mixes
//! `camelCase`, `snake_case` and `PascalCase` between endpoints.

use serde::{Deserialize, Serialize};
use shared_types::{to_checksum_address, Address, BlockNumber, ReceiptStatus, U256};

/// `POST /stamp` body.
#[derive(Debug, Clone, Deserialize)]
pub struct StampRequest {
    pub hashes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StampResponse {
    pub status: &'static str,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

impl StampResponse {
    pub fn success(tx_hash: String) -> Self {
        Self {
            status: "success",
            tx_hash,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    /// The hash as supplied, `0x`-prefixed.
    pub hash: String,
    pub count: u64,
    pub first_block: BlockNumber,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitResponse {
    pub success: bool,
    pub blocknumber: BlockNumber,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
    #[serde(rename = "Message")]
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Status")]
pub enum TxStatusResponse {
    Pending,
    #[serde(rename_all = "PascalCase")]
    Confirmed {
        block_number: BlockNumber,
        gas_used: u64,
        contract_address: Option<String>,
    },
}

impl From<ReceiptStatus> for TxStatusResponse {
    fn from(status: ReceiptStatus) -> Self {
        match status {
            ReceiptStatus::Pending => TxStatusResponse::Pending,
            ReceiptStatus::Confirmed {
                block_number,
                gas_used,
                contract_address,
            } => TxStatusResponse::Confirmed {
                block_number,
                gas_used,
                contract_address: contract_address.as_ref().map(to_checksum_address),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Status")]
pub enum NetworkStatusResponse {
    #[serde(rename = "OK", rename_all = "PascalCase")]
    Ok { network_id: String, chain_id: u64 },
    #[serde(rename = "ERROR")]
    Error,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractStatusResponse {
    pub status: &'static str,
    pub contract_address: String,
    pub functions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Status")]
pub enum AccountStatusResponse {
    #[serde(rename = "OK", rename_all = "PascalCase")]
    Ok {
        address: String,
        /// Decimal string, not a JSON number: clients expecting a numeric
        /// `BalanceWei` must parse it. Balances can exceed JSON's safe integer
        /// range.
        balance_wei: String,
        /// Decimal string like `BalanceWei`, trailing zeros trimmed.
        balance_ether: String,
    },
    #[serde(rename = "ERROR", rename_all = "PascalCase")]
    Error { error: String },
}

impl AccountStatusResponse {
    pub fn ok(address: &Address, balance: U256) -> Self {
        AccountStatusResponse::Ok {
            address: to_checksum_address(address),
            balance_wei: balance.to_string(),
            balance_ether: format_ether(balance),
        }
    }
}

/// Render wei as a decimal ether amount without trailing zeros.
pub fn format_ether(wei: U256) -> String {
    let unit = U256::exp10(18);
    let whole = wei / unit;
    let frac = wei % unit;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>18}", frac.to_string());
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
