//! Module `control`
//!
//! The control channel: one outbound TCP connection carrying the credential
//! exchange, the command line, and short textual replies. Messages have no
//! framing; boundaries come from bounded reads. The underlying socket is
//! closed exactly once, when the channel is dropped at the end of the
//! session scope.

use log::{debug, info};
use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::ConnectionError;

pub struct ControlChannel {
    stream: TcpStream,
    host: String,
    port: u16,
}

impl ControlChannel {
    /// Opens the control connection to `(host, port)`. An unreachable or
    /// refusing peer is fatal for the session.
    ///
    /// `reply_timeout` bounds subsequent reply reads when set; `None`
    /// preserves the documented block-forever behavior.
    pub fn connect(
        host: &str,
        port: u16,
        reply_timeout: Option<Duration>,
    ) -> Result<Self, ConnectionError> {
        let stream =
            TcpStream::connect((host, port)).map_err(|e| ConnectionError::ControlConnect {
                host: host.to_string(),
                port,
                source: e,
            })?;
        if let Some(timeout) = reply_timeout {
            stream
                .set_read_timeout(Some(timeout))
                .map_err(|e| ConnectionError::ControlConnect {
                    host: host.to_string(),
                    port,
                    source: e,
                })?;
        }
        info!("Control connection established to {}:{}", host, port);
        Ok(Self {
            stream,
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Sends one unframed text message.
    pub fn send(&mut self, message: &str) -> std::io::Result<()> {
        debug!("Control send ({} bytes)", message.len());
        self.stream.write_all(message.as_bytes())?;
        self.stream.flush()
    }

    /// One bounded read of at most `max_len` bytes, decoded lossily.
    /// Returns an empty string if the peer has closed.
    pub fn read_reply(&mut self, max_len: usize) -> std::io::Result<String> {
        let mut buffer = vec![0u8; max_len];
        let n = self.stream.read(&mut buffer)?;
        debug!("Control reply ({} bytes)", n);
        Ok(String::from_utf8_lossy(&buffer[..n]).into_owned())
    }
}
