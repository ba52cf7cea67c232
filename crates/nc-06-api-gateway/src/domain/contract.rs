//! # Contract Interface Description
//!
//! The notarization contract's ABI as loaded at startup. Only function
//! entries are retained; events, constructors and fallbacks are ignored.
//!
//! Accepts either a bare ABI array or a build artifact object carrying the
//! array under `"abi"`.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractInterfaceError {
    #[error("Contract ABI is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("Contract ABI lacks function {0}")]
    MissingFunction(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AbiDocument {
    Bare(Vec<AbiEntry>),
    Artifact { abi: Vec<AbiEntry> },
}

#[derive(Debug, Deserialize)]
struct AbiEntry {
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    inputs: Vec<AbiParam>,
}

#[derive(Debug, Deserialize)]
struct AbiParam {
    #[serde(rename = "type")]
    kind: String,
}

fn function_kind() -> String {
    "function".to_string()
}

/// A contract function as described by the ABI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFunction {
    pub name: String,
    /// Canonical signature, e.g. `getBlockNo(bytes32,address)`.
    pub signature: String,
}

/// Functions exposed by the notarization contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractInterface {
    functions: Vec<ContractFunction>,
}

impl ContractInterface {
    pub fn from_json(json: &str) -> Result<Self, ContractInterfaceError> {
        let document: AbiDocument = serde_json::from_str(json)
            .map_err(|e| ContractInterfaceError::InvalidJson(e.to_string()))?;
        let entries = match document {
            AbiDocument::Bare(entries) | AbiDocument::Artifact { abi: entries } => entries,
        };

        let functions = entries
            .into_iter()
            .filter(|entry| entry.kind == "function")
            .filter_map(|entry| {
                let name = entry.name?;
                let types: Vec<&str> = entry.inputs.iter().map(|p| p.kind.as_str()).collect();
                let signature = format!("{}({})", name, types.join(","));
                Some(ContractFunction { name, signature })
            })
            .collect();

        Ok(Self { functions })
    }

    /// Fail unless every signature in `required` is present.
    pub fn require(&self, required: &[&str]) -> Result<(), ContractInterfaceError> {
        for signature in required {
            if !self.functions.iter().any(|f| f.signature == *signature) {
                return Err(ContractInterfaceError::MissingFunction(signature.to_string()));
            }
        }
        Ok(())
    }

    /// Function names in ABI order.
    pub fn function_names(&self) -> Vec<String> {
        self.functions.iter().map(|f| f.name.clone()).collect()
    }

    pub fn functions(&self) -> &[ContractFunction] {
        &self.functions
    }
}
