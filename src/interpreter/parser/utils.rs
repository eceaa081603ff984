use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the line number of the next token, or `fallback` when the stream
/// is exhausted.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(
    tokens: &mut Peekable<I>,
    fallback: usize,
) -> usize
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    tokens.peek().map_or(fallback, |(_, l)| *l)
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// `description` is the human-readable form used in the diagnostic, e.g.
/// `"':'"`. Returns the consumed token's line on success.
///
/// # Errors
/// Returns a `ParseError` if the next token differs from `expected` or the
/// input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(
    tokens: &mut Peekable<I>,
    expected: &Token,
    description: &str,
    line: usize,
) -> ParseResult<usize>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    match tokens.next() {
        Some((tok, l)) if tok == expected => Ok(*l),
        Some((tok, l)) => Err(ParseError::ExpectedToken {
            expected: description.to_string(),
            found: format!("{tok:?}"),
            line: *l,
        }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(
    tokens: &mut Peekable<I>,
) -> ParseResult<String>
where
    I: Iterator<Item = &'a (Token, usize)>,
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::ExpectedToken {
            expected: "identifier".to_string(),
            found: format!("{tok:?}"),
            line: *line,
        }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of items up to and including a closing
/// token.
///
/// This utility is shared by list literals and function argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or `closing` to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
) -> ParseResult<Vec<T>>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut items = Vec::new();

    if let Some((tok, _)) = tokens.peek() {
        if tok == closing {
            tokens.next();
            return Ok(items);
        }
    }

    loop {
        items.push(parse_item(tokens)?);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::ExpectedToken {
                    expected: format!("',' or {closing:?}"),
                    found: format!("{tok:?}"),
                    line: *line,
                });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(items)
}
