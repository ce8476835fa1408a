use std::fmt;

use super::Cursor;

/// Why a rule failed. Every variant carries the Cursor at the point where
/// the failure was noticed; the Cursor the caller passed in is never
/// consumed, so the caller can retry from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError<'i> {
    ExpectedSymbol(Cursor<'i>, &'static str),
    Expected(Cursor<'i>, &'static str),
    ExpectedNewline(Cursor<'i>),
    ZeroLengthToken(Cursor<'i>),
    InvalidVariableName(Cursor<'i>, String),
    Unrecognized(Cursor<'i>),
    InvalidStatement(Cursor<'i>),
    NumberTooLarge(Cursor<'i>, String),
    NestingTooDeep(Cursor<'i>),
}

impl<'i> ParsingError<'i> {
    pub fn cursor(&self) -> Cursor<'i> {
        match self {
            ParsingError::ExpectedSymbol(cursor, _) => *cursor,
            ParsingError::Expected(cursor, _) => *cursor,
            ParsingError::ExpectedNewline(cursor) => *cursor,
            ParsingError::ZeroLengthToken(cursor) => *cursor,
            ParsingError::InvalidVariableName(cursor, _) => *cursor,
            ParsingError::Unrecognized(cursor) => *cursor,
            ParsingError::InvalidStatement(cursor) => *cursor,
            ParsingError::NumberTooLarge(cursor, _) => *cursor,
            ParsingError::NestingTooDeep(cursor) => *cursor,
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor()
            .offset()
    }

    /// How far into the input the failing rule got. A rejected name was
    /// fully scanned before being refused, so it counts as progress.
    pub fn reach(&self) -> usize {
        match self {
            ParsingError::InvalidVariableName(cursor, name) => cursor.offset() + name.len(),
            ParsingError::NumberTooLarge(cursor, digits) => cursor.offset() + digits.len(),
            _ => self.offset(),
        }
    }

    /// The short cause phrase.
    pub fn message(&self) -> String {
        match self {
            ParsingError::ExpectedSymbol(_, _) => "expected symbol".to_string(),
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::ExpectedNewline(_) => "expected newline".to_string(),
            ParsingError::ZeroLengthToken(_) => "did not consume anything".to_string(),
            ParsingError::InvalidVariableName(_, _) => "Invalid Variable Name".to_string(),
            ParsingError::Unrecognized(_) => "no alternative matched".to_string(),
            ParsingError::InvalidStatement(_) => {
                "failed to parse a matching statement".to_string()
            }
            ParsingError::NumberTooLarge(_, _) => "number too large".to_string(),
            ParsingError::NestingTooDeep(_) => "nesting too deep".to_string(),
        }
    }
}

impl<'i> fmt::Display for ParsingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.cursor();
        write!(
            f,
            "{}:{} {}",
            cursor.line(),
            cursor.column(),
            self.message()
        )
    }
}
