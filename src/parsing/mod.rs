//! parser for the BASIC language

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Program};
use crate::problem::Diagnostic;

pub mod combinators;
pub mod cursor;
mod error;
pub mod parser;

pub use cursor::Cursor;
pub use error::ParsingError;
pub use parser::parse_line;

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Program built by parse() below can be formed
/// from it. The filename `-` reads standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Program, or return the list of problems encountered.
///
/// In interactive mode parsing halts at the first problem, so the list holds
/// exactly one Diagnostic. Otherwise the offending line is skipped and
/// parsing carries on with the next one, collecting a Diagnostic per bad
/// line.
pub fn parse(content: &str, interactive: bool) -> Result<Program, Vec<Diagnostic>> {
    let mut cursor = Cursor::new(content).interactive(interactive);
    let mut lines = Vec::new();
    let mut problems = Vec::new();

    while !cursor.is_done() {
        match parse_line(cursor) {
            Ok((Some(line), next)) => {
                lines.push(line);
                cursor = next;
            }
            Ok((None, next)) => {
                cursor = next;
            }
            Err(diagnostic) => {
                debug!("{}", diagnostic);
                problems.push(diagnostic);

                if cursor.is_interactive() {
                    break;
                }
                cursor = parser::skip_blank(cursor).skip_line();
            }
        }
    }

    if problems.is_empty() {
        debug!(
            "Found {} line{}",
            lines.len(),
            if lines.len() == 1 { "" } else { "s" }
        );
        Ok(Program::new(lines))
    } else {
        debug!("errors: {}", problems.len());
        Err(problems)
    }
}
