use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_condition, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, peek_line},
        },
    },
};

/// Parses a whole program into its root node.
///
/// A program is a `;`-separated statement sequence. The result is always
/// wrapped in a single root `Block`, even for a lone statement. Anything
/// left over after the last statement is a syntax error; parsing is
/// single-pass and aborts on the first unresolvable token.
///
/// Grammar: `program := statement (";" statement)*`
///
/// # Errors
/// Returns a `ParseError` for empty input, a malformed statement, or
/// trailing tokens.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let line = peek_line(tokens, 1);
    let mut statements = vec![parse_statement(tokens)?];

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        statements.push(parse_statement(tokens)?);
    }

    if let Some((tok, l)) = tokens.peek() {
        return Err(ParseError::UnexpectedToken {
            token: format!("{tok:?}"),
            line: *l,
        });
    }

    Ok(Node::Block { statements, line })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement with optional `else`,
/// - a `for` loop over `range(start, end)`,
/// - a `while` loop,
/// - a `print` statement,
/// - an assignment,
/// - an expression used as a statement.
///
/// Assignment requires one token of lookahead: an identifier followed by
/// `=` is an assignment, otherwise the identifier starts an expression.
///
/// # Errors
/// Returns a `ParseError` for malformed constructs or exhausted input.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    match tokens.peek() {
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::For, line)) => {
            let line = *line;
            tokens.next();
            parse_for(tokens, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, line)
        },
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print(tokens, line)
        },
        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            if let Some((Token::Equals, _)) = lookahead.peek() {
                return parse_assignment(tokens);
            }

            parse_expression(tokens)
        },
        Some(_) => parse_expression(tokens),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the statement(s) making up a loop or branch body.
///
/// A body greedily absorbs `;`-joined statements until the input ends or an
/// `else` keyword follows. A multi-statement body collapses into a single
/// `Block`; a lone statement is returned unwrapped.
fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let line = peek_line(tokens, 0);
    let mut statements = vec![parse_statement(tokens)?];

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        statements.push(parse_statement(tokens)?);
    }

    Ok(if statements.len() == 1 {
        statements.swap_remove(0)
    } else {
        Node::Block { statements, line }
    })
}

/// Parses an `if` statement after the `if` keyword has been consumed.
///
/// The `else` branch is optional and binds to the nearest preceding
/// unmatched `if`.
///
/// Grammar: `if_stmt := "if" condition ":" body ("else" ":" body)?`
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let condition = parse_condition(tokens)?;
    expect_token(tokens, &Token::Colon, "':'", line)?;
    let then_body = parse_body(tokens)?;

    let else_body = if let Some((Token::Else, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();
        expect_token(tokens, &Token::Colon, "':'", else_line)?;

        Some(Box::new(parse_body(tokens)?))
    } else {
        None
    };

    Ok(Node::If {
        condition: Box::new(condition),
        then_body: Box::new(then_body),
        else_body,
        line,
    })
}

/// Parses a `for` loop after the `for` keyword has been consumed.
///
/// The range is half-open: the loop covers `start, start+1, ..., end-1`.
///
/// Grammar:
/// `for_stmt := "for" IDENT "in" "range" "(" expression "," expression ")" ":" body`
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let iterator = parse_identifier(tokens)?;
    expect_token(tokens, &Token::In, "'in'", line)?;
    expect_token(tokens, &Token::Range, "'range'", line)?;
    expect_token(tokens, &Token::LParen, "'('", line)?;

    let start = parse_expression(tokens)?;
    expect_token(tokens, &Token::Comma, "','", line)?;
    let end = parse_expression(tokens)?;

    expect_token(tokens, &Token::RParen, "')'", line)?;
    expect_token(tokens, &Token::Colon, "':'", line)?;

    let body = parse_body(tokens)?;

    Ok(Node::For {
        iterator,
        start: Box::new(start),
        end: Box::new(end),
        body: Box::new(body),
        line,
    })
}

/// Grammar: `while_stmt := "while" condition ":" body`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let condition = parse_condition(tokens)?;
    expect_token(tokens, &Token::Colon, "':'", line)?;
    let body = parse_body(tokens)?;

    Ok(Node::While {
        condition: Box::new(condition),
        body: Box::new(body),
        line,
    })
}

/// Grammar: `print_stmt := "print" "(" expression ")"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    expect_token(tokens, &Token::LParen, "'('", line)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'", line)?;

    Ok(Node::Print {
        expr: Box::new(expr),
        line,
    })
}

/// Parses an assignment. The caller has already checked via lookahead that
/// an identifier followed by `=` is next.
///
/// The right-hand side is either a list literal or an expression; string
/// and boolean literals come in through the expression rule.
///
/// Grammar: `assignment := IDENT "=" (list_literal | expression)`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let (target, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!("caller verified the lookahead"),
    };
    tokens.next(); // the '=', verified by the caller

    let value = if let Some((Token::LBracket, _)) = tokens.peek() {
        parse_list_literal(tokens)?
    } else {
        parse_expression(tokens)?
    };

    Ok(Node::Assignment {
        target,
        value: Box::new(value),
        line,
    })
}

/// Grammar: `list_literal := "[" (expression ("," expression)*)? "]"`
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let line = peek_line(tokens, 0);
    tokens.next(); // the '[', checked by the caller

    let items = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Node::List { items, line })
}
