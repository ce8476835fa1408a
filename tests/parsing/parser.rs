#[cfg(test)]
mod grammar {
    use tinybasic::language::*;
    use tinybasic::parsing::{self, parse_line, Cursor};

    fn number(value: i64) -> Expression {
        Expression::Number(value)
    }

    fn variable(name: char) -> Expression {
        Expression::Variable(Identifier(name))
    }

    #[test]
    fn conditional_goto() {
        let source = "30 IF X - 2 <= 3 THEN GOTO 50\n";

        let (line, next) = parse_line(Cursor::new(source)).unwrap();
        assert!(next.is_done());
        assert_eq!(
            line,
            Some(Line {
                number: 30,
                statement: Statement::If(
                    Comparison {
                        left: Expression::infix(variable('X'), Operator::Subtract, number(2)),
                        relation: Relation::LessEqual,
                        right: number(3),
                    },
                    Box::new(Statement::Goto(number(50)))
                ),
            })
        );
    }

    #[test]
    fn whitespace_only_is_done() {
        let (line, next) = parse_line(Cursor::new("   \n\t \n")).unwrap();
        assert_eq!(line, None);
        assert!(next.is_done());

        let (line, next) = parse_line(Cursor::new("")).unwrap();
        assert_eq!(line, None);
        assert!(next.is_done());
    }

    #[test]
    fn lines_one_at_a_time() {
        let source = "10 LET A = 1\n20 PRINT A\n30 END";
        let mut cursor = Cursor::new(source);
        let mut numbers = Vec::new();

        loop {
            let (line, next) = parse_line(cursor).unwrap();
            match line {
                Some(line) => numbers.push(line.number),
                None => break,
            }
            cursor = next;
            if cursor.is_done() {
                break;
            }
        }

        assert_eq!(numbers, vec![10, 20, 30]);
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn failure_leaves_cursor_alone() {
        let cursor = Cursor::new("10 LET XY = 1\n");

        let problem = parse_line(cursor).unwrap_err();
        assert_eq!(problem.message, "Invalid Variable Name");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn every_statement() {
        let source = r#"
10 REM anything at all, even "quotes"
20 LET A = 1
30 IF A = 1 THEN PRINT "one"
40 RETURN
50 END
60 GOSUB 200
70 GOTO 10
80 PRINT "A", A, 1 + 2
        "#;

        let program = parsing::parse(source, false).unwrap();
        let keywords: Vec<&str> = program
            .lines
            .iter()
            .map(|line| {
                line.statement
                    .keyword()
            })
            .collect();

        assert_eq!(
            keywords,
            vec!["REM", "LET", "IF", "RETURN", "END", "GOSUB", "GOTO", "PRINT"]
        );
        assert_eq!(
            program
                .find(10)
                .map(|line| &line.statement),
            Some(&Statement::Rem("anything at all, even \"quotes\"".to_string()))
        );
        assert_eq!(
            program
                .find(80)
                .map(|line| &line.statement),
            Some(&Statement::Print(vec![
                Expression::Text("A".to_string()),
                variable('A'),
                Expression::infix(number(1), Operator::Add, number(2)),
            ]))
        );
    }

    #[test]
    fn precedence_and_grouping() {
        let program = parsing::parse("20 LET X = 5 * (3 + 1) - -2\n", false);

        // a sign only leads an expression
        assert!(program.is_err());

        let program = parsing::parse("20 LET X = 5 * (3 + 1) - 2 / Y\n", false).unwrap();
        assert_eq!(
            program.lines[0].statement,
            Statement::Let(
                Identifier('X'),
                Expression::infix(
                    Expression::infix(
                        number(5),
                        Operator::Multiply,
                        Expression::infix(number(3), Operator::Add, number(1))
                    ),
                    Operator::Subtract,
                    Expression::infix(number(2), Operator::Divide, variable('Y'))
                )
            )
        );
    }

    #[test]
    fn leading_sign() {
        let program = parsing::parse("10 LET A = -B * 2\n", false).unwrap();
        assert_eq!(
            program.lines[0].statement,
            Statement::Let(
                Identifier('A'),
                Expression::unary(
                    Sign::Negative,
                    Expression::infix(variable('B'), Operator::Multiply, number(2))
                )
            )
        );
    }

    #[test]
    fn carriage_returns() {
        let program = parsing::parse("10 END\r\n20 RETURN\r\n", false).unwrap();
        assert_eq!(program.lines.len(), 2);
    }

    #[test]
    fn json_output() {
        let program = parsing::parse("10 GOTO 20\n", false).unwrap();
        let json = serde_json::to_value(&program).unwrap();

        assert_eq!(json["lines"][0]["number"], 10);
        assert_eq!(json["lines"][0]["statement"]["Goto"]["Number"], 20);
    }
}
