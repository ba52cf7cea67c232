//! Ports for the Existence Verifier subsystem.

pub mod inbound;
