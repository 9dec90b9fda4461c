use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, failing if the line has run out.
///
/// The end marker is never consumed: hitting it means an expression was
/// required but the line ended.
///
/// # Errors
/// `ParseError::UnexpectedEndOfInput` at the end of the line.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.is_end() => {
            Err(ParseError::UnexpectedEndOfInput { offset: token.offset })
        },
        Some(_) => tokens.next().ok_or(ParseError::UnexpectedEndOfInput { offset: 0 }),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Consumes a `(` token.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends here.
/// - `ExpectedOpenParen` for any other token.
pub(in crate::interpreter::parser) fn expect_open_paren<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;
    if token.kind == TokenKind::OpenParen {
        Ok(())
    } else {
        Err(ParseError::ExpectedOpenParen { found:  token.describe(),
                                            offset: token.offset, })
    }
}

/// Parses a comma-separated list of items up to and including `)`.
///
/// The opening parenthesis must already have been consumed. An immediately
/// encountered `)` produces an empty list; a trailing comma is rejected
/// because the item after it cannot start with `)`.
///
/// Grammar (simplified): `items := ")" | item ("," item)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `parse_item`: Function used to parse each element.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - something other than `,` or `)` follows an item,
/// - the line ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::CloseParen
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::Comma => {
                tokens.next();
            },
            Some(token) if token.kind == TokenKind::CloseParen => {
                tokens.next();
                break;
            },
            Some(token) if token.is_end() => {
                return Err(ParseError::ExpectedClosingParen { offset: token.offset });
            },
            Some(token) => {
                return Err(ParseError::UnexpectedToken { token:  format!("expected ',' or ')', found {}",
                                                                         token.describe()),
                                                         offset: token.offset, });
            },
            None => return Err(ParseError::ExpectedClosingParen { offset: 0 }),
        }
    }
    Ok(items)
}
