#[cfg(test)]
mod syntax {
    use tinybasic::formatting::Identity;
    use tinybasic::parsing::combinators::{choice, literal, take_while1};
    use tinybasic::parsing::cursor::{is_numeric, MAXIMUM_NESTING};
    use tinybasic::parsing::parser::{read_line, read_statement};
    use tinybasic::parsing::{self, parse_line, Cursor, ParsingError};
    use tinybasic::problem::{full_diagnostic, Diagnostic};

    /// Helper function to check the kind of error a single line produces
    fn expect_error(content: &str, expected: ParsingError) {
        match read_line(Cursor::new(content)) {
            Ok((line, _)) => panic!(
                "Expected parsing to fail, but it succeeded with {:?} for input: {}",
                line, content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
            }
        }
    }

    #[test]
    fn take_while1_needs_something() {
        let cursor = Cursor::new("abc");
        let result = take_while1(is_numeric)(cursor);

        assert_eq!(result, Err(ParsingError::ZeroLengthToken(cursor)));
    }

    #[test]
    fn longest_relation_first() {
        let cursor = Cursor::new("<=");
        let (matched, next) = choice((literal("<="), literal("<")))(cursor).unwrap();

        assert_eq!(matched, "<=");
        assert_eq!(next.offset(), 2);
    }

    #[test]
    fn long_variable_name() {
        let cursor = Cursor::new("LET XY = 1");
        let error = read_statement(cursor).unwrap_err();

        assert_eq!(
            error,
            ParsingError::InvalidVariableName(cursor.advance(4), "XY".to_string())
        );
    }

    #[test]
    fn missing_variable_name() {
        let cursor = Cursor::new("LET = 1");
        let error = read_statement(cursor).unwrap_err();

        assert_eq!(error, ParsingError::Expected(cursor.advance(4), "a variable name"));
    }

    #[test]
    fn lowercase_variable_name() {
        expect_error(
            "10 LET x = 1",
            ParsingError::InvalidVariableName(Cursor::new(""), String::new()),
        );
    }

    #[test]
    fn unknown_statement() {
        expect_error("10 LOAD \"x\"", ParsingError::InvalidStatement(Cursor::new("")));
    }

    #[test]
    fn missing_space_after_keyword() {
        expect_error("10 GOTO50", ParsingError::ZeroLengthToken(Cursor::new("")));
    }

    #[test]
    fn trailing_garbage() {
        expect_error("10 END NOW", ParsingError::ExpectedNewline(Cursor::new("")));
    }

    #[test]
    fn unterminated_string() {
        expect_error(
            "10 PRINT \"hello",
            ParsingError::ExpectedSymbol(Cursor::new(""), "\""),
        );
    }

    #[test]
    fn missing_relation() {
        expect_error(
            "10 IF A THEN END",
            ParsingError::Expected(Cursor::new(""), "a comparison operator"),
        );
    }

    #[test]
    fn oversized_numbers() {
        expect_error(
            "10 LET A = 99999999999999999999",
            ParsingError::NumberTooLarge(Cursor::new(""), String::new()),
        );
        expect_error(
            "99999999999 END",
            ParsingError::NumberTooLarge(Cursor::new(""), String::new()),
        );
    }

    #[test]
    fn excessive_nesting() {
        let depth = MAXIMUM_NESTING as usize + 1;
        let source = format!("10 LET A = {}1{}", "(".repeat(depth), ")".repeat(depth));

        expect_error(&source, ParsingError::NestingTooDeep(Cursor::new("")));

        let depth = MAXIMUM_NESTING as usize;
        let source = format!("10 LET A = {}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(read_line(Cursor::new(&source)).is_ok());
    }

    #[test]
    fn bad_operand_after_operator() {
        let problem = parse_line(Cursor::new("10 LET A = 1 + XY\n")).unwrap_err();
        assert_eq!(problem.message, "Invalid Variable Name");
        assert_eq!(problem.caret, 15..17);

        let problem = parse_line(Cursor::new("10 LET A = 1 + (2\n")).unwrap_err();
        assert_eq!(problem.message, "expected symbol");
        assert_eq!(problem.suggestion, "Did you mean `)`?");
        assert_eq!(problem.caret, 17..18);

        let problem = parse_line(Cursor::new("10 IF A < B + XY THEN END\n")).unwrap_err();
        assert_eq!(problem.message, "Invalid Variable Name");
        assert_eq!(problem.caret, 14..16);
    }

    #[test]
    fn bad_item_after_comma() {
        let problem = parse_line(Cursor::new("10 PRINT A, XY\n")).unwrap_err();
        assert_eq!(problem.message, "Invalid Variable Name");
        assert_eq!(problem.caret, 12..14);

        let problem = parse_line(Cursor::new("10 PRINT \"A\",\n")).unwrap_err();
        assert_eq!(problem.message, "expected a string or an expression");
    }

    #[test]
    fn diagnostic_on_third_line() {
        let source = "10 REM start\n20 LET A = 1\n300 FOO BAR";

        let problems = parsing::parse(source, true).unwrap_err();
        assert_eq!(problems.len(), 1);

        let problem: &Diagnostic = &problems[0];
        assert_eq!(problem.line, 3);
        assert_eq!(problem.column, 5);
        assert_eq!(problem.source_excerpt, "300 FOO BAR");
        assert_eq!(problem.caret, 4..11);

        let output = full_diagnostic(problem, &Identity);
        let lines: Vec<&str> = output
            .lines()
            .collect();

        assert_eq!(lines[0], "error: failed to parse a matching statement");
        assert_eq!(lines[2], "[3:5] |   '300 FOO BAR'");
        assert!(lines[3].starts_with(&format!("{}^^^^^^^ ", " ".repeat(15))));
    }
}
