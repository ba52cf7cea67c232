//! Ports for the Confirmation Tracker subsystem.

pub mod inbound;
