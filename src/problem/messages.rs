use crate::parsing::{cursor::MAXIMUM_NESTING, ParsingError};

/// Generate the suggestion accompanying a parsing error; the short cause
/// phrase comes from the error itself.
pub fn generate_suggestion(error: &ParsingError<'_>) -> String {
    match error {
        ParsingError::ExpectedSymbol(_, symbol) => format!("Did you mean `{}`?", symbol),
        ParsingError::Expected(_, value) => format!(
            "The parser was looking for {} but found something else.",
            value
        ),
        ParsingError::ExpectedNewline(_) => "insert a new line here".to_string(),
        ParsingError::ZeroLengthToken(_) => "Did you forget something here?".to_string(),
        ParsingError::InvalidVariableName(_, _) => "Variable names can only be A-Z".to_string(),
        ParsingError::Unrecognized(_) => {
            "None of the possibilities allowed here matched.".to_string()
        }
        ParsingError::InvalidStatement(_) => {
            "not a valid statement; statements are REM, LET, IF, RETURN, END, GOSUB, GOTO, or PRINT"
                .to_string()
        }
        ParsingError::NumberTooLarge(_, digits) => {
            format!("{} is too large to be represented.", digits)
        }
        ParsingError::NestingTooDeep(_) => format!(
            "Parentheses and IF statements can only be nested {} deep.",
            MAXIMUM_NESTING
        ),
    }
}
