//! # Confirmation Tracker Subsystem (NC-03)
//!
//! Answers "has the ledger moved on?" and "is my transaction in a block yet?"
//! by polling an injected `LedgerClient`.
//!
//! ## Polling Model
//!
//! Every wait is a finite loop: at most `max_attempts` polls, separated by
//! `interval` of non-blocking `tokio::time::sleep`. The loop returns as soon
//! as its condition holds and never sleeps after its last attempt. Nothing
//! runs in the background between calls.
//!
//! A new block only proves the ledger advanced; it says nothing about any
//! particular transaction. Use [`ConfirmationApi::await_receipt`] for that.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::TrackerError;
pub use domain::policy::TrackerPolicy;
pub use domain::tx_id::parse_tx_hash;
pub use ports::inbound::ConfirmationApi;
pub use service::ConfirmationTracker;
