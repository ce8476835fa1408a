//! Types representing an Abstract Syntax Tree for the BASIC language

use serde::Serialize;

#[derive(Eq, Debug, PartialEq, Clone, Default, Serialize)]
pub struct Program {
    pub lines: Vec<Line>,
}

impl Program {
    pub fn new(lines: Vec<Line>) -> Program {
        Program { lines }
    }

    /// Find the first line carrying the given number. Line numbers are
    /// neither sorted nor unique as parsed, so this is a linear scan.
    pub fn find(&self, number: u32) -> Option<&Line> {
        self.lines
            .iter()
            .find(|line| line.number == number)
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .is_empty()
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Line {
    pub number: u32,
    pub statement: Statement,
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub enum Statement {
    Rem(String),
    Let(Identifier, Expression),
    If(Comparison, Box<Statement>),
    Return,
    End,
    Gosub(Expression),
    Goto(Expression),
    Print(Vec<Expression>),
}

impl Statement {
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Rem(_) => "REM",
            Statement::Let(_, _) => "LET",
            Statement::If(_, _) => "IF",
            Statement::Return => "RETURN",
            Statement::End => "END",
            Statement::Gosub(_) => "GOSUB",
            Statement::Goto(_) => "GOTO",
            Statement::Print(_) => "PRINT",
        }
    }
}

/// A variable name. The language only has the twenty-six variables `A`
/// through `Z`.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Hash, Serialize)]
pub struct Identifier(pub char);

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub enum Expression {
    Variable(Identifier),
    Number(i64),
    Text(String), // only valid as a PRINT item
    Unary(Sign, Box<Expression>),
    Infix(Box<Expression>, Operator, Box<Expression>),
}

impl Expression {
    pub fn unary(sign: Sign, operand: Expression) -> Expression {
        Expression::Unary(sign, Box::new(operand))
    }

    pub fn infix(left: Expression, operator: Operator, right: Expression) -> Expression {
        Expression::Infix(Box::new(left), operator, Box::new(right))
    }

    /// Binding strength, used when deciding where parentheses are needed
    /// to write an expression back out. A leading sign lives at the same
    /// tier as addition.
    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Unary(_, _) => 1,
            Expression::Infix(_, operator, _) => operator.precedence(),
            _ => 3,
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn symbol(&self) -> &'static str {
        match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Comparison {
    pub left: Expression,
    pub relation: Relation,
    pub right: Expression,
}

#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Relation {
    LessEqual,
    GreaterEqual,
    NotEqual,
    Greater,
    Less,
    Equal,
}

impl Relation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::LessEqual => "<=",
            Relation::GreaterEqual => ">=",
            Relation::NotEqual => "<>",
            Relation::Greater => ">",
            Relation::Less => "<",
            Relation::Equal => "=",
        }
    }
}
