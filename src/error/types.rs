//! Error types
//!
//! Defines domain-specific error types for each module of the FTP client.

use std::fmt;
use std::io;

/// Command-line validation errors, detected before any I/O.
#[derive(Debug)]
pub enum UsageError {
    BadArgCount(usize),
    MalformedPort { which: &'static str, value: String },
    PortOutOfRange { which: &'static str, port: i64 },
    UnknownCommand(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::BadArgCount(n) => write!(f, "wrong number of arguments ({})", n),
            UsageError::MalformedPort { which, value } => {
                write!(f, "Invalid {} port '{}': not a number.", which, value)
            }
            UsageError::PortOutOfRange { which, port } => {
                write!(f, "Invalid {} port {}. Use port [1024, 49151].", which, port)
            }
            UsageError::UnknownCommand(cmd) => write!(f, "command {} not recognized", cmd),
        }
    }
}

impl std::error::Error for UsageError {}

/// Network setup errors on either channel. Fatal, never retried.
#[derive(Debug)]
pub enum ConnectionError {
    ControlConnect {
        host: String,
        port: u16,
        source: io::Error,
    },
    DataBind {
        port: u16,
        source: io::Error,
    },
    DataAccept {
        port: u16,
        source: io::Error,
    },
    AddressProbe(io::Error),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::ControlConnect { host, port, source } => {
                write!(f, "Failed to connect to {}:{}: {}", host, port, source)
            }
            ConnectionError::DataBind { port, source } => {
                write!(f, "Failed to bind data port {}: {}", port, source)
            }
            ConnectionError::DataAccept { port, source } => {
                write!(
                    f,
                    "Failed to accept data connection on port {}: {}",
                    port, source
                )
            }
            ConnectionError::AddressProbe(e) => {
                write!(f, "Failed to determine local address: {}", e)
            }
        }
    }
}

impl std::error::Error for ConnectionError {}

/// General client error that encompasses all error types
#[derive(Debug)]
pub enum ClientError {
    Usage(UsageError),
    Connection(ConnectionError),
    IoError(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Usage(e) => write!(f, "Usage error: {}", e),
            ClientError::Connection(e) => write!(f, "Connection error: {}", e),
            ClientError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<UsageError> for ClientError {
    fn from(error: UsageError) -> Self {
        ClientError::Usage(error)
    }
}

impl From<ConnectionError> for ClientError {
    fn from(error: ConnectionError) -> Self {
        ClientError::Connection(error)
    }
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::IoError(error)
    }
}
