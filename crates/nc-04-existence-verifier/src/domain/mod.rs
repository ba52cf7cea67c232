//! Domain layer.

pub mod errors;
pub mod result;
