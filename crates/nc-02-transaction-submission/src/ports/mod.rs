//! Ports for the Transaction Submission subsystem.
//!
//! The driven side is `shared_types::LedgerClient`.

pub mod inbound;
