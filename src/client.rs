//! Module `client`
//!
//! Drives one full session: control connect, authentication, command
//! dispatch, command-specific response handling, teardown. The control
//! channel is owned by this scope and dropped exactly once on every exit
//! path; the data channel, when one exists, is owned by the response
//! handling and dropped as soon as the transfer finishes or is cancelled.

use log::info;
use std::path::Path;

use crate::auth::{self, AuthOutcome};
use crate::commands;
use crate::config::ClientConfig;
use crate::control::ControlChannel;
use crate::error::ClientError;
use crate::prompt::{ConflictChoice, Interact};
use crate::session::{Command, Session};
use crate::transfer;

/// Substring in a pre-transfer status reply that signals the server could
/// not satisfy a get request.
const ERROR_MARKER: &str = "ERROR";

/// Bound on control-channel reply reads outside authentication.
const MAX_REPLY: usize = 1024;

/// How a session ended. All three are normal outcomes with exit status 0;
/// failures travel as `ClientError` instead.
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    Completed,
    AuthRejected,
    Cancelled,
}

/// Runs the session end to end.
pub fn run(
    session: &Session,
    config: &ClientConfig,
    prompt: &mut dyn Interact,
) -> Result<SessionOutcome, ClientError> {
    let mut ctrl =
        ControlChannel::connect(&session.host, session.ctrl_port, config.reply_timeout())?;

    match auth::authenticate(&mut ctrl, prompt)? {
        AuthOutcome::Rejected(reply) => {
            println!("{}", reply);
            return Ok(SessionOutcome::AuthRejected);
        }
        AuthOutcome::Accepted(reply) => println!("{}", reply),
    }

    commands::send_command(&mut ctrl, session)?;

    match &session.command {
        Command::List { data_port } => handle_list(session, *data_port, config),
        Command::Get {
            filename,
            data_port,
        } => handle_get(&mut ctrl, session, filename, *data_port, config, prompt),
        Command::Cwd { .. } => handle_cwd(&mut ctrl),
    }
}

/// List: the whole payload arrives on the data channel; the control
/// channel carries no reply.
fn handle_list(
    session: &Session,
    data_port: u16,
    config: &ClientConfig,
) -> Result<SessionOutcome, ClientError> {
    println!(
        "Receiving requested directory list from {}:{}",
        session.host, data_port
    );
    let data = transfer::accept_data_connection(data_port, config.reply_timeout())?;
    let entries = transfer::read_listing(&data)?;
    for entry in &entries {
        println!("{}", entry);
    }
    drop(data);
    Ok(SessionOutcome::Completed)
}

/// Get: one pre-transfer status on the control channel decides whether a
/// data channel is opened at all. A name conflict is resolved exactly once,
/// before any bytes are written; Cancel closes both connections with the
/// local file untouched.
fn handle_get(
    ctrl: &mut ControlChannel,
    session: &Session,
    filename: &str,
    data_port: u16,
    config: &ClientConfig,
    prompt: &mut dyn Interact,
) -> Result<SessionOutcome, ClientError> {
    println!(
        "Requesting file transfer: {} from {}:{}",
        filename, session.host, data_port
    );

    let status = ctrl.read_reply(MAX_REPLY)?;
    println!(
        "Message from {}:{}: {}",
        ctrl.host(),
        ctrl.port(),
        status
    );
    if status.contains(ERROR_MARKER) {
        // Server refused the transfer; no data channel is opened.
        info!("Server signaled an error, skipping data channel setup");
        return Ok(SessionOutcome::Completed);
    }

    let data = transfer::accept_data_connection(data_port, config.reply_timeout())?;

    let dest = if Path::new(filename).exists() {
        match prompt.resolve_conflict(filename)? {
            ConflictChoice::Rename(new_name) => new_name,
            ConflictChoice::Overwrite => filename.to_string(),
            ConflictChoice::Cancel => {
                println!("File Transfer Cancelled. Goodbye.");
                drop(data);
                return Ok(SessionOutcome::Cancelled);
            }
        }
    } else {
        filename.to_string()
    };

    let text_mode = transfer::is_text_target(&dest, &config.text_suffix);
    let bytes = transfer::receive_file(&data, &dest, text_mode, config.buffer_size)?;
    drop(data);

    println!("File Transfer Complete. ({} bytes)", bytes);
    Ok(SessionOutcome::Completed)
}

/// Cd: reply only, printed verbatim. The directory change is server-side;
/// the client touches neither the filesystem nor a data channel.
fn handle_cwd(ctrl: &mut ControlChannel) -> Result<SessionOutcome, ClientError> {
    let reply = ctrl.read_reply(MAX_REPLY)?;
    println!("{}", reply);
    Ok(SessionOutcome::Completed)
}
