//! # Hash Normalizer (NC-01)
//!
//! Turns client-supplied hex strings into the 32-byte `HashIdentifier` the
//! notarization contract stores.
//!
//! ## Rules
//!
//! - A leading `0x` is optional and added when absent
//! - Digits must be valid hex, non-empty and of even length
//! - More than 32 decoded bytes is rejected, never truncated
//! - Fewer than 32 decoded bytes is right-padded with zeros
//!
//! Pure functions only: no I/O, no shared state.

pub mod domain;

pub use domain::errors::NormalizeError;
pub use domain::normalizer::{ensure_prefix, normalize, normalize_batch, HEX_PREFIX};
