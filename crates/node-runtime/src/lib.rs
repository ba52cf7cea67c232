//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.

pub mod container;

pub use container::{ConfigError, NodeConfig, SubsystemContainer, WalletConfig};
