use std::{fmt, ops::Range};

use crate::parsing::{cursor::is_newline, ParsingError};

use super::messages::generate_suggestion;

/// A user facing account of a parse failure: where it happened, the source
/// line it happened on, which part of that line to underline, and what to
/// do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub source_excerpt: String,
    /// Zero-origin byte range within `source_excerpt` to underline.
    pub caret: Range<usize>,
    pub suggestion: String,
}

impl Diagnostic {
    pub fn new(error: &ParsingError<'_>) -> Diagnostic {
        let cursor = error.cursor();
        let input = cursor.input();
        let offset = cursor
            .offset()
            .min(input.len());

        let start = input[..offset]
            .iter()
            .rposition(|&b| is_newline(b))
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = input[offset..]
            .iter()
            .position(|&b| is_newline(b))
            .map(|i| offset + i)
            .unwrap_or(input.len());

        let i = offset - start;
        let width = calculate_span_width(error, end - offset);

        Diagnostic {
            message: error.message(),
            line: cursor.line(),
            column: cursor.column(),
            source_excerpt: String::from_utf8_lossy(&input[start..end]).into_owned(),
            caret: i..i + width.max(1),
            suggestion: generate_suggestion(error),
        }
    }
}

// How much of what remains of the line the failing rule was looking at.
fn calculate_span_width(error: &ParsingError<'_>, remaining: usize) -> usize {
    let width = match error {
        ParsingError::ExpectedSymbol(_, symbol) => symbol.len(),
        ParsingError::InvalidVariableName(_, name) => name.len(),
        ParsingError::NumberTooLarge(_, digits) => digits.len(),
        ParsingError::ExpectedNewline(_)
        | ParsingError::Unrecognized(_)
        | ParsingError::InvalidStatement(_) => remaining,
        ParsingError::Expected(_, _)
        | ParsingError::ZeroLengthToken(_)
        | ParsingError::NestingTooDeep(_) => 1,
    };
    width.min(remaining)
}

// Concise version, for logs and one line summaries
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}:{} {}",
            self.line, self.column, self.message
        )
    }
}
