//! Renderers for colourizing BASIC source and diagnostics

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Neutral, // default
    Newline,
    LineNumber,
    Keyword,
    Variable,
    Numeric,
    String,
    Quote,
    Remark,
    Operator,
    Punctuation,
    // used when presenting problems
    Error,
    Location,
    Caret,
}

/// Trait for different rendering backends (the no-op no-markup one, and
/// ANSI escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
