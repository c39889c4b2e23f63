//! Module `cli`
//!
//! Validates the raw argument vector and builds the immutable [`Session`].
//! All checks run before any network resource is opened; a violation is
//! reported as a [`UsageError`] and the process exits with status 1.

use crate::error::UsageError;
use crate::session::{Command, Session};

/// Valid server port range for both the control and the data port.
pub const PORT_MIN: u16 = 1024;
pub const PORT_MAX: u16 = 49151;

pub const USAGE: &str = "usage: rax-ftp-client <host> <ctrl port> -l <data port>
       rax-ftp-client <host> <ctrl port> -g <filename> <data port>
       rax-ftp-client <host> <ctrl port> cd <path>";

/// Parses one port argument, rejecting non-numeric input and values
/// outside [1024, 49151]. Boundary values are accepted.
fn parse_port(which: &'static str, value: &str) -> Result<u16, UsageError> {
    let port: i64 = value.parse().map_err(|_| UsageError::MalformedPort {
        which,
        value: value.to_string(),
    })?;
    if port < PORT_MIN as i64 || port > PORT_MAX as i64 {
        return Err(UsageError::PortOutOfRange { which, port });
    }
    Ok(port as u16)
}

/// Validates the full argument vector (program name included) and builds
/// the session. The three accepted shapes are:
///
/// - `<host> <ctrl port> -l <data port>`
/// - `<host> <ctrl port> -g <filename> <data port>`
/// - `<host> <ctrl port> cd <path>`
pub fn parse_args(args: &[String]) -> Result<Session, UsageError> {
    if args.len() < 5 || args.len() > 6 {
        return Err(UsageError::BadArgCount(args.len()));
    }

    let host = args[1].clone();
    let ctrl_port = parse_port("ctrl", &args[2])?;

    let command = match args[3].as_str() {
        "-l" => {
            if args.len() != 5 {
                return Err(UsageError::BadArgCount(args.len()));
            }
            Command::List {
                data_port: parse_port("data", &args[4])?,
            }
        }
        "-g" => {
            if args.len() != 6 {
                return Err(UsageError::BadArgCount(args.len()));
            }
            Command::Get {
                filename: args[4].clone(),
                data_port: parse_port("data", &args[5])?,
            }
        }
        "cd" => {
            if args.len() != 5 {
                return Err(UsageError::BadArgCount(args.len()));
            }
            Command::Cwd {
                path: args[4].clone(),
            }
        }
        other => return Err(UsageError::UnknownCommand(other.to_string())),
    };

    Ok(Session {
        host,
        ctrl_port,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_list() {
        let session = parse_args(&args(&["ftc", "localhost", "30021", "-l", "30020"])).unwrap();
        assert_eq!(session.host, "localhost");
        assert_eq!(session.ctrl_port, 30021);
        assert_eq!(session.command, Command::List { data_port: 30020 });
    }

    #[test]
    fn test_parse_get() {
        let session =
            parse_args(&args(&["ftc", "localhost", "30021", "-g", "a.txt", "30020"])).unwrap();
        assert_eq!(
            session.command,
            Command::Get {
                filename: "a.txt".to_string(),
                data_port: 30020
            }
        );
    }

    #[test]
    fn test_parse_cwd() {
        let session = parse_args(&args(&["ftc", "localhost", "30021", "cd", "../dir"])).unwrap();
        assert_eq!(
            session.command,
            Command::Cwd {
                path: "../dir".to_string()
            }
        );
    }

    #[test]
    fn test_too_few_and_too_many_args() {
        assert!(matches!(
            parse_args(&args(&["ftc", "localhost", "30021", "-l"])),
            Err(UsageError::BadArgCount(4))
        ));
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-g", "f", "30020", "extra"])),
            Err(UsageError::BadArgCount(7))
        ));
    }

    #[test]
    fn test_shape_must_match_flag() {
        // -l takes no filename; -g requires one.
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-l", "f.txt", "30020"])),
            Err(UsageError::BadArgCount(6))
        ));
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-g", "30020"])),
            Err(UsageError::BadArgCount(5))
        ));
    }

    #[test]
    fn test_port_boundaries() {
        assert!(parse_args(&args(&["ftc", "h", "1024", "-l", "49151"])).is_ok());
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "1023", "-l", "30020"])),
            Err(UsageError::PortOutOfRange { which: "ctrl", port: 1023 })
        ));
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-l", "49152"])),
            Err(UsageError::PortOutOfRange { which: "data", port: 49152 })
        ));
    }

    #[test]
    fn test_non_numeric_port_is_usage_error() {
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "ctrlport", "-l", "30020"])),
            Err(UsageError::MalformedPort { which: "ctrl", .. })
        ));
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-l", "30x20"])),
            Err(UsageError::MalformedPort { which: "data", .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse_args(&args(&["ftc", "h", "30021", "-x", "30020"])),
            Err(UsageError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_cd_takes_no_port() {
        // The cd path argument is not a port and must not be range checked.
        let session = parse_args(&args(&["ftc", "h", "30021", "cd", "subdir"])).unwrap();
        assert_eq!(
            session.command,
            Command::Cwd {
                path: "subdir".to_string()
            }
        );
    }
}
