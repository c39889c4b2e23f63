//! Network utilities
//!
//! Provides network-related utility functions.

use std::io;
use std::net::{IpAddr, UdpSocket};

/// Address used to discover which local interface outbound traffic would
/// take. Connecting a datagram socket routes it without sending anything.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Returns the outward-facing local IP address.
///
/// Opens a transient UDP socket, "connects" it to a well-known public
/// address (no packet is sent), and reads back the local address the
/// operating system picked for the route.
pub fn outward_local_ip() -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(PROBE_ADDR)?;
    Ok(socket.local_addr()?.ip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_yields_a_usable_address() {
        // No traffic leaves the host; connect() only routes the socket.
        let ip = outward_local_ip().unwrap();
        assert!(!ip.is_unspecified());
    }
}
