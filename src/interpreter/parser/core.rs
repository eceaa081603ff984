use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node, NumberValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::parse_comma_separated,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and descends through
/// the precedence hierarchy. Comparison operators are not part of this
/// rule; they only appear in condition position (see [`parse_condition`]).
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Errors
/// Propagates any error from sub-expression parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut expr = parse_term(tokens)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Plus, line)) => (BinaryOperator::Add, *line),
            Some((Token::Minus, line)) => (BinaryOperator::Sub, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_term(tokens)?;
        expr = Node::BinaryOp {
            left: Box::new(expr),
            op,
            right: Box::new(right),
            line,
        };
    }

    Ok(expr)
}

/// Grammar: `term := factor (("*" | "/") factor)*`
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut expr = parse_factor(tokens)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Star, line)) => (BinaryOperator::Mul, *line),
            Some((Token::Slash, line)) => (BinaryOperator::Div, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_factor(tokens)?;
        expr = Node::BinaryOp {
            left: Box::new(expr),
            op,
            right: Box::new(right),
            line,
        };
    }

    Ok(expr)
}

/// Parses a factor: a literal, a variable, a parenthesized expression, or a
/// function call.
///
/// An identifier immediately followed by `(` becomes a function call with a
/// comma-separated argument list; otherwise it is a plain variable
/// reference.
///
/// Grammar:
/// `factor := NUMBER | STRING | TRUE | FALSE | IDENT | IDENT "(" args ")" | "(" expression ")"`
///
/// # Errors
/// Returns a `ParseError` if the next token cannot begin a factor or the
/// input ends unexpectedly.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => Ok(Node::Number {
            value: NumberValue::Integer(*n),
            line: *line,
        }),
        Some((Token::Float(r), line)) => Ok(Node::Number {
            value: NumberValue::Float(*r),
            line: *line,
        }),
        Some((Token::Str(s), line)) => Ok(Node::Str {
            value: s.clone(),
            line: *line,
        }),
        Some((Token::True, line)) => Ok(Node::Boolean {
            value: true,
            line: *line,
        }),
        Some((Token::False, line)) => Ok(Node::Boolean {
            value: false,
            line: *line,
        }),
        Some((Token::Identifier(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

                Ok(Node::FunctionCall {
                    name: name.clone(),
                    arguments,
                    line: *line,
                })
            } else {
                Ok(Node::Variable {
                    name: name.clone(),
                    line: *line,
                })
            }
        },
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;

            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((tok, l)) => Err(ParseError::ExpectedToken {
                    expected: "')'".to_string(),
                    found: format!("{tok:?}"),
                    line: *l,
                }),
                None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken {
            token: format!("{tok:?}"),
            line: *line,
        }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a condition: two expressions joined by exactly one comparison
/// operator.
///
/// Comparisons bind at their own single level and only occur here, in the
/// condition position of `if` and `while`.
///
/// Grammar: `condition := expression comparison_op expression`
///
/// # Errors
/// Returns a `ParseError` if the comparison operator is missing or either
/// side fails to parse.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let left = parse_expression(tokens)?;

    let (op, line) = match tokens.peek() {
        Some((Token::EqualEqual, line)) => (BinaryOperator::Equal, *line),
        Some((Token::BangEqual, line)) => (BinaryOperator::NotEqual, *line),
        Some((Token::Less, line)) => (BinaryOperator::Less, *line),
        Some((Token::Greater, line)) => (BinaryOperator::Greater, *line),
        Some((Token::LessEqual, line)) => (BinaryOperator::LessEqual, *line),
        Some((Token::GreaterEqual, line)) => (BinaryOperator::GreaterEqual, *line),
        Some((tok, line)) => {
            return Err(ParseError::ExpectedToken {
                expected: "comparison operator".to_string(),
                found: format!("{tok:?}"),
                line: *line,
            });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput {
                line: left.line_number(),
            });
        },
    };
    tokens.next();

    let right = parse_expression(tokens)?;

    Ok(Node::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
        line,
    })
}
