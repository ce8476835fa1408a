//! Code formatter for BASIC programs

use std::fmt;

use crate::formatting::*;
use crate::language::*;

pub fn format_with_renderer(program: &Program) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for line in &program.lines {
        output.append_line(line);
    }

    // Flush any remaining content
    output.flush_current();

    output.fragments
}

/// Render a single numbered line, without its trailing newline.
pub fn render_line(line: &Line, renderer: &dyn Render) -> String {
    let mut sub = Formatter::new();
    sub.append_numbered(line);
    sub.flush_current();
    render_to_string(renderer, sub.fragments)
}

pub fn render_statement(statement: &Statement, renderer: &dyn Render) -> String {
    let mut sub = Formatter::new();
    sub.append_statement(statement);
    sub.flush_current();
    render_to_string(renderer, sub.fragments)
}

pub fn render_expression(expression: &Expression, renderer: &dyn Render) -> String {
    let mut sub = Formatter::new();
    sub.append_expression(expression);
    sub.flush_current();
    render_to_string(renderer, sub.fragments)
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    buffer: String,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Append content with specific syntax tagging, maintaining order
    fn append(&mut self, syntax: Syntax, content: &str) {
        // Flush any pending buffer content first to maintain order
        self.flush_current();
        self.fragments
            .push((syntax, content.to_string()));
    }

    /// Spacing accumulates in the buffer and goes out as a single Neutral
    /// fragment.
    fn append_char(&mut self, c: char) {
        self.buffer
            .push(c);
    }

    fn flush_current(&mut self) {
        if !self
            .buffer
            .is_empty()
        {
            self.fragments
                .push((
                    Syntax::Neutral,
                    self.buffer
                        .clone(),
                ));
            self.buffer
                .clear();
        }
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
        self.buffer
            .clear();
    }

    fn append_line(&mut self, line: &Line) {
        self.append_numbered(line);
        self.append(Syntax::Newline, "\n");
    }

    fn append_numbered(&mut self, line: &Line) {
        self.append(
            Syntax::LineNumber,
            &line
                .number
                .to_string(),
        );
        self.append_char(' ');
        self.append_statement(&line.statement);
    }

    fn append_keyword(&mut self, statement: &Statement) {
        self.append(Syntax::Keyword, statement.keyword());
    }

    fn append_statement(&mut self, statement: &Statement) {
        self.append_keyword(statement);

        match statement {
            Statement::Rem(text) => {
                self.append_char(' ');
                self.append(Syntax::Remark, text);
            }
            Statement::Let(target, value) => {
                self.append_char(' ');
                self.append_identifier(target);
                self.append_char(' ');
                self.append(Syntax::Operator, "=");
                self.append_char(' ');
                self.append_expression(value);
            }
            Statement::If(condition, consequent) => {
                self.append_char(' ');
                self.append_comparison(condition);
                self.append_char(' ');
                self.append(Syntax::Keyword, "THEN");
                self.append_char(' ');
                self.append_statement(consequent);
            }
            Statement::Return | Statement::End => {}
            Statement::Gosub(target) | Statement::Goto(target) => {
                self.append_char(' ');
                self.append_expression(target);
            }
            Statement::Print(values) => {
                self.append_char(' ');
                for (i, value) in values
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        self.append(Syntax::Punctuation, ",");
                        self.append_char(' ');
                    }
                    self.append_expression(value);
                }
            }
        }
    }

    fn append_comparison(&mut self, comparison: &Comparison) {
        self.append_expression(&comparison.left);
        self.append_char(' ');
        self.append(
            Syntax::Operator,
            comparison
                .relation
                .symbol(),
        );
        self.append_char(' ');
        self.append_expression(&comparison.right);
    }

    fn append_identifier(&mut self, identifier: &Identifier) {
        self.append(Syntax::Variable, &identifier.0.to_string());
    }

    fn append_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Variable(identifier) => self.append_identifier(identifier),
            Expression::Number(value) => self.append(Syntax::Numeric, &value.to_string()),
            Expression::Text(text) => {
                self.append(Syntax::Quote, "\"");
                self.append(Syntax::String, text);
                self.append(Syntax::Quote, "\"");
            }
            Expression::Unary(sign, operand) => {
                self.append(Syntax::Operator, sign.symbol());
                self.append_operand(operand, operand.precedence() <= 1);
            }
            Expression::Infix(left, operator, right) => {
                let tier = operator.precedence();

                // operators associate to the left, so only a right hand
                // child at the same tier needs grouping
                self.append_operand(left, left.precedence() < tier);
                self.append_char(' ');
                self.append(Syntax::Operator, operator.symbol());
                self.append_char(' ');
                self.append_operand(right, right.precedence() <= tier);
            }
        }
    }

    fn append_operand(&mut self, expression: &Expression, grouped: bool) {
        if grouped {
            self.append(Syntax::Punctuation, "(");
            self.append_expression(expression);
            self.append(Syntax::Punctuation, ")");
        } else {
            self.append_expression(expression);
        }
    }
}

impl ToString for Formatter {
    fn to_string(&self) -> String {
        let mut result = String::new();

        for (_, content) in &self.fragments {
            result.push_str(content);
        }

        if !self
            .buffer
            .is_empty()
        {
            result.push_str(&self.buffer);
        }

        result
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&Identity, self))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_line(self, &Identity))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_statement(self, &Identity))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_expression(self, &Identity))
    }
}
