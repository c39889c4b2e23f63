//! RAX FTP Client
//!
//! A minimal two-channel file-transfer client. Commands and short replies
//! travel over a long-lived control connection; bulk payloads (directory
//! listings, file bytes) arrive on a per-command data connection that the
//! client listens for and the server initiates.
//!
//! Wire-contract warnings, inherited from the server: credentials are sent
//! in clear text, messages carry no framing or length headers, and with no
//! reply timeout configured a silent peer blocks the session indefinitely.

pub mod auth;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod control;
pub mod error;
pub mod prompt;
pub mod session;
pub mod transfer;
pub mod utils;

pub use client::{SessionOutcome, run};
pub use config::ClientConfig;
pub use session::{Command, Session};
