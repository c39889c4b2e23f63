//! Utility modules
//!
//! Shared helpers that don't belong to a single protocol phase.

pub mod network;
