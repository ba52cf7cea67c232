//! # Subsystem Container
//!
//! Configuration plus the wired subsystem instances.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, NodeConfig, WalletConfig};
pub use subsystems::{load_contract_interface, SubsystemContainer};
