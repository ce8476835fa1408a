//! Position tracking over the input buffer

use std::fmt;

use super::ParsingError;

/// How many parentheses and nested IF consequents may be open at once
/// before parsing gives up rather than risk exhausting the stack.
pub const MAXIMUM_NESTING: u16 = 64;

/// An immutable snapshot of where we are in the input. Every rule takes a
/// Cursor by value and hands back a new one, so backtracking is nothing more
/// than holding on to an earlier copy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'i> {
    input: &'i [u8],
    offset: usize,
    line: usize,
    column: usize,
    interactive: bool,
    depth: u16,
}

impl<'i> Cursor<'i> {
    pub fn new(content: &'i str) -> Cursor<'i> {
        Cursor::from_bytes(content.as_bytes())
    }

    pub fn from_bytes(input: &'i [u8]) -> Cursor<'i> {
        Cursor {
            input,
            offset: 0,
            line: 1,
            column: 1,
            interactive: false,
            depth: 0,
        }
    }

    /// Mark this cursor as belonging to an interactive session. The grammar
    /// doesn't care; drivers use it to decide whether to halt or recover
    /// after a problem.
    pub fn interactive(self, interactive: bool) -> Cursor<'i> {
        Cursor {
            interactive,
            ..self
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn input(&self) -> &'i [u8] {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// One-origin line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-origin column number, counted in bytes.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn is_done(&self) -> bool {
        self.offset
            >= self
                .input
                .len()
    }

    /// Everything not yet consumed.
    pub fn remaining(&self) -> &'i [u8] {
        let start = self
            .offset
            .min(
                self.input
                    .len(),
            );
        &self.input[start..]
    }

    pub fn peek(&self) -> Option<u8> {
        self.remaining()
            .first()
            .copied()
    }

    /// Move forward over `width` bytes, keeping line and column in step with
    /// whatever was stepped over. Every newline byte counts, so a CR LF pair
    /// advances the line twice.
    pub fn advance(self, width: usize) -> Cursor<'i> {
        let taken = &self.remaining()[..width.min(
            self.remaining()
                .len(),
        )];

        let mut line = self.line;
        let mut column = self.column;
        for &b in taken {
            if is_newline(b) {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Cursor {
            offset: self.offset + taken.len(),
            line,
            column,
            ..self
        }
    }

    /// Skip the rest of the current line and the newline bytes ending it.
    /// Used by drivers to resume after a problem.
    pub fn skip_line(self) -> Cursor<'i> {
        let rest = self.remaining();
        let body = rest
            .iter()
            .position(|&b| is_newline(b))
            .unwrap_or(rest.len());
        let breaks = rest[body..]
            .iter()
            .take_while(|&&b| is_newline(b))
            .count();
        self.advance(body + breaks)
    }

    /// Enter one level of nesting, failing if the limit is reached.
    pub fn deeper(self) -> Result<Cursor<'i>, ParsingError<'i>> {
        if self.depth >= MAXIMUM_NESTING {
            return Err(ParsingError::NestingTooDeep(self));
        }
        Ok(Cursor {
            depth: self.depth + 1,
            ..self
        })
    }

    pub fn shallower(self) -> Cursor<'i> {
        Cursor {
            depth: self
                .depth
                .saturating_sub(1),
            ..self
        }
    }
}

// The input can be long, so show the position rather than the buffer.
impl<'i> fmt::Debug for Cursor<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("interactive", &self.interactive)
            .field("depth", &self.depth)
            .finish()
    }
}

pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub fn is_numeric(b: u8) -> bool {
    b.is_ascii_digit()
}

pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

pub fn is_newline(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

pub fn is_not_newline(b: u8) -> bool {
    !is_newline(b)
}

pub fn is_string_char(b: u8) -> bool {
    (32..=126).contains(&b) && b != b'"'
}
