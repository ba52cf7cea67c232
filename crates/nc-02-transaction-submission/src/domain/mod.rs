//! Domain layer: pure transaction logic.

pub mod config;
pub mod errors;
pub mod signer;
pub mod transaction;
