//! Error handling
//!
//! Defines error types and handling for the FTP client.

pub mod types;

pub use types::*;
