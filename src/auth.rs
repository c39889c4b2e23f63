//! Module `auth`
//!
//! Client-side authentication over the control channel. Credentials are
//! collected interactively, concatenated into a single token with no
//! separator, and sent as one message — in clear text, with no hashing or
//! encryption. That is the server's documented wire contract, inherited
//! as-is; do not point this client at credentials you care about.

use log::{info, warn};
use std::io;

use crate::control::ControlChannel;
use crate::prompt::Interact;

/// Substring in the server's reply that signals rejected credentials.
const REJECT_MARKER: &str = "fail";

/// The server's auth reply is short; one bounded read suffices.
const MAX_AUTH_REPLY: usize = 128;

/// Outcome of the credential exchange. Both variants carry the server's
/// reply so the caller can print it verbatim.
#[derive(Debug, PartialEq)]
pub enum AuthOutcome {
    Accepted(String),
    Rejected(String),
}

/// Builds the wire credential token: username directly followed by
/// password, no separator.
pub fn credential_token(username: &str, password: &str) -> String {
    format!("{}{}", username, password)
}

/// True if the reply text signals rejected credentials.
pub fn is_rejected(reply: &str) -> bool {
    reply.contains(REJECT_MARKER)
}

/// Runs the credential exchange: prompt, send one token, read one bounded
/// reply. Rejection is an expected outcome, not an error.
pub fn authenticate(
    ctrl: &mut ControlChannel,
    prompt: &mut dyn Interact,
) -> io::Result<AuthOutcome> {
    let username = prompt.username()?;
    let password = prompt.password()?;

    ctrl.send(&credential_token(&username, &password))?;
    let reply = ctrl.read_reply(MAX_AUTH_REPLY)?;

    if is_rejected(&reply) {
        warn!("Server rejected credentials for user '{}'", username);
        Ok(AuthOutcome::Rejected(reply))
    } else {
        info!("Server accepted credentials for user '{}'", username);
        Ok(AuthOutcome::Accepted(reply))
    }
}
