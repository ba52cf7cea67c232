//! Domain layer of the hash normalizer.

pub mod errors;
pub mod normalizer;
