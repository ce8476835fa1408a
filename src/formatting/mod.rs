//! Turning parsed programs back into canonical source, optionally with
//! syntax highlighting.

pub mod formatter;
mod renderer;
mod syntax;

pub use formatter::{render_expression, render_line, render_statement};
pub use renderer::*;
pub use syntax::*;
