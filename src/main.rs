//! RAX FTP Client - Entry Point
//!
//! Validates arguments, loads optional configuration, and runs one session
//! against the server. Exit status: 0 on success, user cancellation, and
//! authentication rejection; 1 on usage, connection, or I/O errors.

use env_logger;
use log::{info, warn};
use std::env;
use std::process;

use rax_ftp_client::config::ClientConfig;
use rax_ftp_client::prompt::StdinPrompt;
use rax_ftp_client::{cli, client};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let session = match cli::parse_args(&args) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration, using defaults: {}", e);
            ClientConfig::default()
        }
    };

    let mut prompt = StdinPrompt;
    match client::run(&session, &config, &mut prompt) {
        Ok(outcome) => {
            info!("Session finished: {:?}", outcome);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
