//! Command dispatch toward the server.

pub mod dispatch;

pub use dispatch::send_command;
