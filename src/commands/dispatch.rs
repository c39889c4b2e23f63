//! Command dispatch
//!
//! Formats and sends the single command line over the control channel. The
//! server learns the client's address from the command line itself and uses
//! it to initiate the data connection, so the dispatcher first probes for
//! the outward-facing local address. No reply is read here; reply handling
//! is command-specific and lives with the response handlers.

use log::info;

use crate::control::ControlChannel;
use crate::error::{ClientError, ConnectionError};
use crate::session::Session;
use crate::utils::network::outward_local_ip;

/// Probes for the local address and sends the session's command line as
/// one control-channel message.
pub fn send_command(ctrl: &mut ControlChannel, session: &Session) -> Result<(), ClientError> {
    let client_addr = outward_local_ip().map_err(ConnectionError::AddressProbe)?;
    let command_line = session.wire_command(client_addr);
    info!("Dispatching command: {}", command_line);
    ctrl.send(&command_line)?;
    Ok(())
}
