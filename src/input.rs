//! Domain list input: a named file or piped standard input

use crate::error::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read the root domain list.
///
/// Reads `list` when given, otherwise standard input. Standard input is only
/// accepted when it is not an interactive terminal, since there would be
/// nothing piped to read.
pub fn read_domains(list: Option<&Path>, stdin_is_terminal: bool) -> Result<Vec<String>, InputError> {
    match list {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
            parse_domains(BufReader::new(file))
        }
        None => {
            if stdin_is_terminal {
                return Err(InputError::NoInput);
            }
            parse_domains(io::stdin().lock())
        }
    }
}

/// Whether standard input is attached to a terminal
pub fn stdin_is_terminal() -> bool {
    is_terminal::is_terminal(io::stdin())
}

/// Split input into trimmed, non-empty lines, preserving order.
///
/// No syntax checks happen here; malformed entries just match nothing later.
/// Invalid UTF-8 is decoded lossily so one bad line cannot sink the run.
pub fn parse_domains<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut domains = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        let decoded = String::from_utf8_lossy(&line);
        let trimmed = decoded.trim();
        if !trimmed.is_empty() {
            domains.push(trimmed.to_string());
        }
    }

    Ok(domains)
}
