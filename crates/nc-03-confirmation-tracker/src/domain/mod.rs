//! Domain layer: polling policy and identifier parsing.

pub mod errors;
pub mod policy;
pub mod tx_id;
