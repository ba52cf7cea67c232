//! # Transaction Submission Subsystem (NC-02)
//!
//! Turns a batch of normalized hashes into a signed `put(bytes32[])`
//! transaction and broadcasts it to the ledger.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): transaction building, EIP-155 signing,
//!   no I/O.
//! - **Ports Layer** (`ports/`): the `StampingApi` driving port. The driven
//!   port is `shared_types::LedgerClient`.
//! - **Service Layer** (`service.rs`): the serialized
//!   fetch nonce → sign → submit flow.
//!
//! ## Guarantees
//!
//! - Submission returns as soon as the node accepts the transaction; it never
//!   waits for a block.
//! - Every ledger-side failure surfaces as `SubmissionError::SubmissionFailed`
//!   with its cause. Nothing is retried.
//! - Concurrent stampings from this process never share a nonce.
//!
//! ## Security Notes
//!
//! - The credential is held in process memory only and is redacted from
//!   `Debug` output; its key bytes are zeroized on drop.
//! - Signatures are low-S (EIP-2) and replay-protected (EIP-155).

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::SubmitterConfig;
pub use domain::errors::{CredentialError, SubmissionError};
pub use domain::signer::Credential;
pub use domain::transaction::{LedgerTransaction, SignedTransaction, SubmittedStamp};
pub use ports::inbound::StampingApi;
pub use service::StampService;
