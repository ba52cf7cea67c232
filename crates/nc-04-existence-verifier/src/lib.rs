//! # Existence Verifier Subsystem (NC-04)
//!
//! Reads the notarization contract to decide whether a hash has been
//! recorded and, if so, the first block it was recorded in by the configured
//! account.
//!
//! Two independent `eth_call` round trips per query; nothing is cached.
//! A zero occurrence count is an error (`HashNotFound`), never a
//! zero-valued success.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::VerificationError;
pub use domain::result::VerificationResult;
pub use ports::inbound::VerificationApi;
pub use service::ExistenceVerifier;
