//! Module `prompt`
//!
//! Interactive input behind a trait so the session logic can run without a
//! real terminal. Tests inject scripted implementations; the binary uses
//! [`StdinPrompt`].

use std::io::{self, BufRead, Write};

/// The user's decision when the transfer target already exists locally.
/// Made exactly once, before any bytes are written.
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictChoice {
    Rename(String),
    Overwrite,
    Cancel,
}

/// Everything the session needs to ask the user.
pub trait Interact {
    fn username(&mut self) -> io::Result<String>;
    fn password(&mut self) -> io::Result<String>;
    fn resolve_conflict(&mut self, filename: &str) -> io::Result<ConflictChoice>;
}

/// Terminal-backed prompt used by the binary.
pub struct StdinPrompt;

impl StdinPrompt {
    fn read_line(prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Interact for StdinPrompt {
    fn username(&mut self) -> io::Result<String> {
        Self::read_line("Username: ")
    }

    fn password(&mut self) -> io::Result<String> {
        Self::read_line("Password: ")
    }

    fn resolve_conflict(&mut self, filename: &str) -> io::Result<ConflictChoice> {
        println!("Duplicate filename: {}", filename);
        loop {
            let choice =
                Self::read_line("Enter: (R)Rename File, (O)Overwrite Existing, or (C)Cancel\nSelection: ")?;
            match choice.chars().next() {
                Some('R') | Some('r') => {
                    let new_name = Self::read_line("Rename file: ")?;
                    if !new_name.trim().is_empty() {
                        return Ok(ConflictChoice::Rename(new_name));
                    }
                    println!("New name cannot be empty.");
                }
                Some('O') | Some('o') => return Ok(ConflictChoice::Overwrite),
                Some('C') | Some('c') => return Ok(ConflictChoice::Cancel),
                _ => println!("Unrecognized selection."),
            }
        }
    }
}
