//! Grammar for the BASIC language
//!
//! A program is a sequence of physical lines, each holding a line number,
//! some whitespace, exactly one statement, and a line terminator. The rules
//! below are built from the combinators and construct AST nodes directly.

use tracing::trace;

use crate::language::*;
use crate::problem::Diagnostic;

use super::combinators::*;
use super::cursor::*;
use super::ParsingError;

/// Parse exactly one numbered line.
///
/// Leading blank space (including empty lines) is skipped first; if that
/// reaches the end of the input the result is `None` and there is nothing
/// more to do. On failure the Diagnostic is returned and the caller's Cursor
/// is, as always, left where it was.
pub fn parse_line<'i>(cursor: Cursor<'i>) -> Result<(Option<Line>, Cursor<'i>), Diagnostic> {
    let start = skip_blank(cursor);

    if start.is_done() {
        return Ok((None, start));
    }

    match read_line(start) {
        Ok((line, next)) => {
            trace!(
                number = line.number,
                keyword = line
                    .statement
                    .keyword(),
                "parsed line"
            );
            Ok((Some(line), next))
        }
        Err(error) => Err(Diagnostic::new(&error)),
    }
}

/// Advance over spaces, tabs, and blank lines.
pub fn skip_blank(cursor: Cursor<'_>) -> Cursor<'_> {
    let rest = cursor.remaining();
    let width = rest
        .iter()
        .take_while(|&&b| is_whitespace(b) || is_newline(b))
        .count();
    cursor.advance(width)
}

pub fn read_line<'i>(cursor: Cursor<'i>) -> Outcome<'i, Line> {
    let ((number, _, statement, _), next) =
        sequence((line_number, whitespace1, read_statement, terminator))(cursor)?;

    Ok((Line { number, statement }, next))
}

/// Optional trailing whitespace then one or more newline bytes. Reaching the
/// end of input is as good as a newline. Returns how many newline bytes
/// were consumed.
pub fn terminator<'i>(cursor: Cursor<'i>) -> Outcome<'i, usize> {
    let (_, next) = whitespace0(cursor)?;

    if next.is_done() {
        return Ok((0, next));
    }

    match take_while1(is_newline)(next) {
        Ok((newlines, after)) => Ok((newlines.len(), after)),
        Err(_) => Err(ParsingError::ExpectedNewline(next)),
    }
}

pub fn read_statement<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    choice((
        read_rem,
        read_let,
        read_if,
        read_return,
        read_end,
        read_gosub,
        read_goto,
        read_print,
    ))(cursor)
    .map_err(|error| match error {
        ParsingError::Unrecognized(at) if at == cursor => ParsingError::InvalidStatement(cursor),
        other => other,
    })
}

fn read_rem<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, text), next) =
        sequence((literal("REM"), whitespace1, take_while(is_not_newline)))(cursor)?;

    Ok((Statement::Rem(lossy(text)), next))
}

fn read_let<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, target, _, _, _, value), next) = sequence((
        literal("LET"),
        whitespace1,
        read_identifier,
        whitespace0,
        literal("="),
        whitespace0,
        read_expression,
    ))(cursor)?;

    Ok((Statement::Let(target, value), next))
}

fn read_if<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, left, _, relation, _, right), next) = sequence((
        literal("IF"),
        whitespace1,
        read_expression,
        whitespace0,
        read_relation,
        whitespace0,
        read_expression,
    ))(cursor)?;

    let (_, next) = sequence((whitespace1, literal("THEN"), whitespace1))(next)?;

    let (consequent, next) = read_statement(next.deeper()?)?;

    let condition = Comparison {
        left,
        relation,
        right,
    };

    Ok((
        Statement::If(condition, Box::new(consequent)),
        next.shallower(),
    ))
}

fn read_return<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    symbol("RETURN", Statement::Return)(cursor)
}

fn read_end<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    symbol("END", Statement::End)(cursor)
}

fn read_gosub<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, target), next) =
        sequence((literal("GOSUB"), whitespace1, read_expression))(cursor)?;

    Ok((Statement::Gosub(target), next))
}

fn read_goto<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, target), next) =
        sequence((literal("GOTO"), whitespace1, read_expression))(cursor)?;

    Ok((Statement::Goto(target), next))
}

fn read_print<'i>(cursor: Cursor<'i>) -> Outcome<'i, Statement> {
    let ((_, _, first, rest), next) = sequence((
        literal("PRINT"),
        whitespace1,
        read_printable,
        repeat_after(
            sequence((whitespace0, literal(","), whitespace0)),
            read_printable,
        ),
    ))(cursor)?;

    let mut values = vec![first];
    values.extend(
        rest.into_iter()
            .map(|(_, value)| value),
    );

    Ok((Statement::Print(values), next))
}

/// A PRINT item: string literals are tried before expressions.
fn read_printable<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    choice((read_string, read_expression))(cursor).map_err(|error| match error {
        ParsingError::Unrecognized(at) if at == cursor => {
            ParsingError::Expected(cursor, "a string or an expression")
        }
        other => other,
    })
}

fn read_string<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    let ((_, text, _), next) = sequence((
        literal("\""),
        take_while(is_string_char),
        literal("\""),
    ))(cursor)?;

    Ok((Expression::Text(lossy(text)), next))
}

/// One or more letters, but only a single uppercase letter names a
/// variable. Anything longer is reported as a bad name rather than as a
/// generic syntax error.
pub fn read_identifier<'i>(cursor: Cursor<'i>) -> Outcome<'i, Identifier> {
    let (name, next) = take_while1(is_alpha)(cursor)
        .map_err(|_| ParsingError::Expected(cursor, "a variable name"))?;

    match name {
        [letter] if letter.is_ascii_uppercase() => Ok((Identifier(*letter as char), next)),
        _ => Err(ParsingError::InvalidVariableName(cursor, lossy(name))),
    }
}

fn read_relation<'i>(cursor: Cursor<'i>) -> Outcome<'i, Relation> {
    // two byte operators must be tried before their one byte prefixes
    choice((
        symbol("<=", Relation::LessEqual),
        symbol(">=", Relation::GreaterEqual),
        symbol("<>", Relation::NotEqual),
        symbol(">", Relation::Greater),
        symbol("<", Relation::Less),
        symbol("=", Relation::Equal),
    ))(cursor)
    .map_err(|_| ParsingError::Expected(cursor, "a comparison operator"))
}

/// expression → [sign] term (('+' | '-') term)*
pub fn read_expression<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    let ((sign, first, rest), next) = sequence((
        optional_choice((read_sign,)),
        read_term,
        repeat_after(
            sequence((
                whitespace0,
                choice((
                    symbol("+", Operator::Add),
                    symbol("-", Operator::Subtract),
                )),
                whitespace0,
            )),
            read_term,
        ),
    ))(cursor)?;

    let first = match sign {
        Some(sign) => Expression::unary(sign, first),
        None => first,
    };

    Ok((fold_infix(first, rest), next))
}

fn read_sign<'i>(cursor: Cursor<'i>) -> Outcome<'i, Sign> {
    let ((sign, _), next) = sequence((
        choice((
            symbol("+", Sign::Positive),
            symbol("-", Sign::Negative),
        )),
        whitespace0,
    ))(cursor)?;

    Ok((sign, next))
}

/// term → factor (('*' | '/') factor)*
fn read_term<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    let ((first, rest), next) = sequence((
        read_factor,
        repeat_after(
            sequence((
                whitespace0,
                choice((
                    symbol("*", Operator::Multiply),
                    symbol("/", Operator::Divide),
                )),
                whitespace0,
            )),
            read_factor,
        ),
    ))(cursor)?;

    Ok((fold_infix(first, rest), next))
}

/// factor → number | identifier | '(' expression ')'
fn read_factor<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    choice((
        read_number,
        map(read_identifier, Expression::Variable),
        read_parenthesized,
    ))(cursor)
    .map_err(|error| match error {
        ParsingError::Unrecognized(at) if at == cursor => {
            ParsingError::Expected(cursor, "an expression")
        }
        other => other,
    })
}

fn read_number<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    let (digits, next) = take_while1(is_numeric)(cursor)?;

    let value = digits_value(digits)
        .ok_or_else(|| ParsingError::NumberTooLarge(cursor, lossy(digits)))?;

    Ok((Expression::Number(value), next))
}

fn read_parenthesized<'i>(cursor: Cursor<'i>) -> Outcome<'i, Expression> {
    let (_, next) = literal("(")(cursor)?;

    let ((_, inner, _, _), next) = sequence((
        whitespace0,
        read_expression,
        whitespace0,
        literal(")"),
    ))(next.deeper()?)?;

    Ok((inner, next.shallower()))
}

fn line_number<'i>(cursor: Cursor<'i>) -> Outcome<'i, u32> {
    let (digits, next) = take_while1(is_numeric)(cursor)
        .map_err(|_| ParsingError::Expected(cursor, "a line number"))?;

    let number = digits_value(digits)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| ParsingError::NumberTooLarge(cursor, lossy(digits)))?;

    Ok((number, next))
}

fn whitespace0<'i>(cursor: Cursor<'i>) -> Outcome<'i, &'i [u8]> {
    take_while(is_whitespace)(cursor)
}

fn whitespace1<'i>(cursor: Cursor<'i>) -> Outcome<'i, &'i [u8]> {
    take_while1(is_whitespace)(cursor)
}

/// Match a fixed piece of text standing for a known value.
fn symbol<'i, T>(text: &'static str, value: T) -> impl Fn(Cursor<'i>) -> Outcome<'i, T>
where
    T: Clone,
{
    map(literal(text), move |_| value.clone())
}

fn fold_infix<'a>(
    first: Expression,
    rest: Vec<((&'a [u8], Operator, &'a [u8]), Expression)>,
) -> Expression {
    rest.into_iter()
        .fold(first, |left, ((_, operator, _), right)| {
            Expression::infix(left, operator, right)
        })
}

fn digits_value(digits: &[u8]) -> Option<i64> {
    digits
        .iter()
        .try_fold(0i64, |total, &digit| {
            total
                .checked_mul(10)?
                .checked_add(i64::from(digit - b'0'))
        })
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
