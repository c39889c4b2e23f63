//! Module `session`
//!
//! Defines the immutable per-run `Session` built from validated command-line
//! input, and the `Command` variants the client can issue. A `Session` is
//! constructed once by `cli::parse_args` and never mutated afterwards.

use std::net::IpAddr;

/// The three operations the client can request from the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `-l`: request a directory listing over the data channel.
    List { data_port: u16 },
    /// `-g`: request a file over the data channel.
    Get { filename: String, data_port: u16 },
    /// `cd`: ask the server to change its working directory; reply only.
    Cwd { path: String },
}

impl Command {
    /// The wire flag as it appears on the command line and on the wire.
    pub fn flag(&self) -> &'static str {
        match self {
            Command::List { .. } => "-l",
            Command::Get { .. } => "-g",
            Command::Cwd { .. } => "cd",
        }
    }

    /// The data port, for commands that open a data channel.
    pub fn data_port(&self) -> Option<u16> {
        match self {
            Command::List { data_port } => Some(*data_port),
            Command::Get { data_port, .. } => Some(*data_port),
            Command::Cwd { .. } => None,
        }
    }
}

/// One client run: target server, control port, and the single command.
#[derive(Debug, Clone)]
pub struct Session {
    pub host: String,
    pub ctrl_port: u16,
    pub command: Command,
}

impl Session {
    /// Builds the space-joined command line sent over the control channel:
    /// `<host-as-typed> <client-address> <flag> <arg> [<arg>]`.
    ///
    /// The first token is the host argument exactly as the user typed it.
    /// The server tokenizes it off and discards it, but its parser expects
    /// the token to be present, so it is kept for wire compatibility.
    pub fn wire_command(&self, client_addr: IpAddr) -> String {
        match &self.command {
            Command::List { data_port } => format!(
                "{} {} {} {}",
                self.host,
                client_addr,
                self.command.flag(),
                data_port
            ),
            Command::Get {
                filename,
                data_port,
            } => format!(
                "{} {} {} {} {}",
                self.host,
                client_addr,
                self.command.flag(),
                filename,
                data_port
            ),
            Command::Cwd { path } => {
                format!("{} {} {} {}", self.host, client_addr, self.command.flag(), path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    const CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));

    #[test]
    fn test_wire_command_list() {
        let session = Session {
            host: "flip1.engr.example.edu".to_string(),
            ctrl_port: 30021,
            command: Command::List { data_port: 30020 },
        };
        assert_eq!(
            session.wire_command(CLIENT),
            "flip1.engr.example.edu 10.0.0.7 -l 30020"
        );
    }

    #[test]
    fn test_wire_command_get() {
        let session = Session {
            host: "localhost".to_string(),
            ctrl_port: 30021,
            command: Command::Get {
                filename: "report.txt".to_string(),
                data_port: 30020,
            },
        };
        assert_eq!(
            session.wire_command(CLIENT),
            "localhost 10.0.0.7 -g report.txt 30020"
        );
    }

    #[test]
    fn test_wire_command_cwd() {
        let session = Session {
            host: "localhost".to_string(),
            ctrl_port: 30021,
            command: Command::Cwd {
                path: "../docs".to_string(),
            },
        };
        assert_eq!(session.wire_command(CLIENT), "localhost 10.0.0.7 cd ../docs");
    }

    #[test]
    fn test_first_token_is_host_as_typed() {
        // The leading token is the literal host argument, not a resolved
        // address. The server discards it but expects it to be there.
        let session = Session {
            host: "SomeWeirdlyCasedHost".to_string(),
            ctrl_port: 2121,
            command: Command::List { data_port: 2020 },
        };
        let wire = session.wire_command(CLIENT);
        assert!(wire.starts_with("SomeWeirdlyCasedHost "));
    }

    #[test]
    fn test_data_port_per_command() {
        assert_eq!(Command::List { data_port: 4000 }.data_port(), Some(4000));
        assert_eq!(
            Command::Get {
                filename: "a".into(),
                data_port: 4001
            }
            .data_port(),
            Some(4001)
        );
        assert_eq!(Command::Cwd { path: "/".into() }.data_port(), None);
    }
}
