//! Gateway domain: configuration, contract description, errors and wire shapes.

pub mod config;
pub mod contract;
pub mod error;
pub mod responses;
