//! Module `data_channel`
//!
//! Client side of the out-of-band data connection. The client binds a
//! listening socket on the agreed port and the server connects inbound to
//! deliver the payload (directory listing or file bytes). Exactly one
//! connection is accepted per command; the listener is dropped as soon as
//! the connection is in hand.

use log::{info, warn};
use std::net::{TcpListener, TcpStream};
use std::time::{Duration, Instant};

use crate::error::ConnectionError;

/// Poll interval while waiting for the server under an accept deadline.
const ACCEPT_POLL: Duration = Duration::from_millis(100);

/// Binds `0.0.0.0:<port>` and blocks until the server connects, returning
/// the accepted stream. With `timeout` unset this waits indefinitely — an
/// unresponsive server hangs the session, which matches the documented
/// wire behavior.
pub fn accept_data_connection(
    port: u16,
    timeout: Option<Duration>,
) -> Result<TcpStream, ConnectionError> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .map_err(|e| ConnectionError::DataBind { port, source: e })?;
    info!("Data listener bound on port {}, waiting for server", port);

    let stream = match timeout {
        None => {
            let (stream, peer_addr) = listener
                .accept()
                .map_err(|e| ConnectionError::DataAccept { port, source: e })?;
            info!("Data connection accepted from {}", peer_addr);
            stream
        }
        Some(limit) => accept_with_deadline(&listener, port, limit)?,
    };

    // Accepted streams inherit non-blocking mode on some platforms.
    if let Err(e) = stream.set_nonblocking(false) {
        warn!("Failed to set data stream to blocking mode: {}", e);
    }
    Ok(stream)
}

/// Accept with a deadline: the listener polls in non-blocking mode so a
/// silent server surfaces as a timed-out `WouldBlock` instead of a hang.
fn accept_with_deadline(
    listener: &TcpListener,
    port: u16,
    limit: Duration,
) -> Result<TcpStream, ConnectionError> {
    listener
        .set_nonblocking(true)
        .map_err(|e| ConnectionError::DataAccept { port, source: e })?;

    let deadline = Instant::now() + limit;
    loop {
        match listener.accept() {
            Ok((stream, peer_addr)) => {
                info!("Data connection accepted from {}", peer_addr);
                return Ok(stream);
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                if Instant::now() >= deadline {
                    return Err(ConnectionError::DataAccept {
                        port,
                        source: std::io::Error::new(
                            std::io::ErrorKind::TimedOut,
                            format!("no data connection within {:?}", limit),
                        ),
                    });
                }
                std::thread::sleep(ACCEPT_POLL);
            }
            Err(e) => return Err(ConnectionError::DataAccept { port, source: e }),
        }
    }
}
