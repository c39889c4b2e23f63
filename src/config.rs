//! Configuration for the RAX FTP client
//!
//! Loads optional settings from `rax-ftp-client.toml` with environment
//! overrides (`RAX_FTP_CLIENT_*`). Unlike the server, a missing file is not
//! an error: the client must run from a bare command line, so every value
//! has a default.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Tunable client settings. Everything defaults; nothing is required.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    /// Chunk size for data-channel reads during a file transfer.
    pub buffer_size: usize,

    /// Optional bound on control-reply reads and the data-channel accept.
    /// Unset, every blocking call blocks indefinitely, matching the
    /// documented wire behavior.
    pub reply_timeout_secs: Option<u64>,

    /// Files whose destination name ends with this suffix are written as
    /// decoded text; everything else is written as raw bytes.
    pub text_suffix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            buffer_size: 16384,
            reply_timeout_secs: None,
            text_suffix: ".txt".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from rax-ftp-client.toml (if present) with
    /// environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("rax-ftp-client").required(false))
            .add_source(Environment::with_prefix("RAX_FTP_CLIENT"))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn reply_timeout(&self) -> Option<Duration> {
        self.reply_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size cannot be 0".into(),
            ));
        }
        if self.text_suffix.is_empty() {
            return Err(config::ConfigError::Message(
                "text_suffix cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
