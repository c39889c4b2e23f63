//! Data-channel transfer handling
//!
//! Listener setup for the inbound data connection and the per-command
//! payload consumers.

pub mod data_channel;
pub mod file_ops;

pub use data_channel::accept_data_connection;
pub use file_ops::{is_text_target, read_listing, receive_file};
