#[cfg(test)]
mod round_trip {
    use tinybasic::formatting::*;
    use tinybasic::language::*;
    use tinybasic::parsing;

    /// Parse, format, and parse again; both parses must agree.
    fn check(source: &str) -> String {
        let program = parsing::parse(source, false)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {:?}", source, e));

        let formatted = render(&Identity, &program);

        let reparsed = parsing::parse(&formatted, false)
            .unwrap_or_else(|e| panic!("Failed to parse formatted {:?}: {:?}", formatted, e));

        assert_eq!(program, reparsed);
        formatted
    }

    #[test]
    fn whitespace_is_normalized() {
        let formatted = check("  10   LET A=1\n\n20 PRINT \"A is\",A , -A\t\n");
        assert_eq!(formatted, "10 LET A = 1\n20 PRINT \"A is\", A, -A\n");
    }

    #[test]
    fn redundant_parentheses_dropped() {
        let formatted = check("10 LET A = ((B)) + (C * D)\n");
        assert_eq!(formatted, "10 LET A = B + C * D\n");
    }

    #[test]
    fn required_parentheses_kept() {
        let formatted = check("10 LET A = (B + C) * D - (E - F)\n");
        assert_eq!(formatted, "10 LET A = (B + C) * D - (E - F)\n");

        let formatted = check("10 LET A = (-B) * C\n");
        assert_eq!(formatted, "10 LET A = (-B) * C\n");

        let formatted = check("10 LET A = -(B - C)\n");
        assert_eq!(formatted, "10 LET A = -(B - C)\n");
    }

    #[test]
    fn nested_conditionals() {
        let formatted = check("10 IF A<B THEN IF B<>C THEN PRINT \"yes\"\n");
        assert_eq!(formatted, "10 IF A < B THEN IF B <> C THEN PRINT \"yes\"\n");
    }

    #[test]
    fn display_uses_canonical_form() {
        let program = parsing::parse("30 IF X-2<=3 THEN GOTO 50", false).unwrap();
        let line = &program.lines[0];

        assert_eq!(line.to_string(), "30 IF X - 2 <= 3 THEN GOTO 50");
        assert_eq!(
            line.statement
                .to_string(),
            "IF X - 2 <= 3 THEN GOTO 50"
        );
        assert_eq!(program.to_string(), "30 IF X - 2 <= 3 THEN GOTO 50\n");

        let expression = Expression::infix(
            Expression::Number(5),
            Operator::Multiply,
            Expression::infix(
                Expression::Number(3),
                Operator::Add,
                Expression::Number(1),
            ),
        );
        assert_eq!(expression.to_string(), "5 * (3 + 1)");
    }

    #[test]
    fn terminal_adds_markup() {
        let program = parsing::parse("10 PRINT \"hi\"\n", false).unwrap();

        let plain = render(&Identity, &program);
        let coloured = render(&Terminal, &program);

        assert_eq!(plain, "10 PRINT \"hi\"\n");
        assert_ne!(plain, coloured);
        assert!(coloured.contains("PRINT"));
        assert!(coloured.contains("\x1b["));
    }
}
