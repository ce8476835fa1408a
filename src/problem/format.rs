use std::path::Path;

use crate::formatting::{Render, Syntax};
use crate::language::LoadingError;

use super::Diagnostic;

/// Format a diagnostic with full details: the message, a rule beneath it,
/// the offending source line, and carets under the failing span followed by
/// the suggestion.
pub fn full_diagnostic(diagnostic: &Diagnostic, renderer: &impl Render) -> String {
    let info = format!("[{}:{}]", diagnostic.line, diagnostic.column);
    let rule = "-".repeat(
        diagnostic
            .message
            .len()
            + 7,
    );
    let indent = " ".repeat(
        info.len()
            + 6
            + diagnostic
                .caret
                .start,
    );
    let carets = "^".repeat(
        diagnostic
            .caret
            .len(),
    );

    format!(
        "{}: {}\n{}\n{} {}   '{}'\n{}{} {}",
        renderer.style(Syntax::Error, "error"),
        diagnostic.message,
        rule,
        renderer.style(Syntax::Location, &info),
        renderer.style(Syntax::Location, "|"),
        diagnostic.source_excerpt,
        indent,
        renderer.style(Syntax::Caret, &carets),
        diagnostic.suggestion
    )
}

/// Format a diagnostic with concise single-line output
pub fn concise_diagnostic(
    diagnostic: &Diagnostic,
    filename: &Path,
    renderer: &impl Render,
) -> String {
    format!(
        "{}: {}:{}:{} {}",
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        diagnostic.line,
        diagnostic.column,
        diagnostic.message
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>, renderer: &impl Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename
            .display(),
        error
    )
}
