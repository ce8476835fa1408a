//! Renderers for colourizing BASIC programs

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::LineNumber => content // constant.numeric.line - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Keyword => content // keyword.control - #75507b (purple) bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Variable => content // variable.other - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Quote => content // punctuation.definition.string - #999999
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .bold()
                .to_string(),
            Syntax::Remark => content // comment.line - #8f5902 (brown)
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .to_string(),
            Syntax::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Punctuation => content
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Location => content
                .bright_blue()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .bold()
                .to_string(),
        }
    }
}

/// We do the code formatting in two passes. First we convert from our
/// Abstract Syntax Tree types into a Vec of "fragments" (Syntax tag, String
/// pairs). Then second we apply the specified renderer to each pair to result
/// in an embellished/highlighted/marked-up String.
pub fn render(renderer: &impl Render, program: &Program) -> String {
    // Pass 1: Format AST to tagged fragments
    let fragments = formatter::format_with_renderer(program);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
pub(crate) fn render_to_string(
    renderer: &dyn Render,
    fragments: Vec<(Syntax, String)>,
) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
