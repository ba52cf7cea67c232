//! # Shared Types Crate
//!
//! This crate contains the ledger-facing entities, the contract ABI codec and
//! the `LedgerClient` capability used by every Notary-Chain subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `HashIdentifier`, `Address`, `TxHash` and
//!   receipts are defined once and shared.
//! - **Injected Ledger**: no subsystem talks JSON-RPC directly; all of them
//!   depend on the `LedgerClient` trait so tests can swap in a fake ledger.
//! - **Immutable Context**: process-lifetime settings travel in a
//!   `ChainContext` value built once at startup.

pub mod abi;
pub mod entities;
pub mod errors;
pub mod ledger;

pub use abi::keccak256;
pub use entities::*;
pub use errors::*;
pub use ledger::LedgerClient;
