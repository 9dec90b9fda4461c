use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::utils::{expect_open_paren, next_token, parse_comma_separated},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of lists, calls and definition bodies an expression may be
/// nested in.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete line of tokens into one syntax tree root.
///
/// The whole token stream must be consumed: anything left over after the
/// expression, other than the end marker, is an error.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - Propagates any error from [`parse_expression`].
pub fn parse(tokens: &[Token]) -> ParseResult<Rc<Node>> {
    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter)?;

    match iter.next() {
        Some(token) if !token.is_end() => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.text.clone(),
                                                       offset: token.offset, })
        },
        _ => Ok(root),
    }
}

/// Tokenizes and parses one line of source text.
///
/// # Errors
/// Returns the lexical or syntactic error as a [`ParseError`].
///
/// # Example
/// ```
/// use listfunc::interpreter::parser::core::parse_line;
///
/// let node = parse_line("double <- add(#0,#0)").unwrap();
/// assert_eq!(node.to_string(), "double <- add(#0, #0)");
/// ```
pub fn parse_line(source: &str) -> ParseResult<Rc<Node>> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

/// Parses a single expression.
///
/// Grammar:
/// ```text
///     expr := ArgRef
///           | IntLiteral | RealLiteral
///           | "[" expr* "]"
///           | "list" "(" (expr ("," expr)*)? ")"
///           | Identifier "<-" expr
///           | Identifier "(" (expr ("," expr)*)? ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends where an expression is needed.
/// - `UnexpectedToken` for `(`, `)`, `]`, `,` or `<-` in leading position.
/// - `NestingTooDeep` if the expression is nested more than
///   [`MAX_NESTING_DEPTH`] levels.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Rc<Node>>
    where I: Iterator<Item = &'a Token>
{
    parse_nested(tokens, 0)
}

/// Parses an expression that sits `depth` lists, calls or definitions deep.
fn parse_nested<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Rc<Node>>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;

    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                offset: token.offset, });
    }

    match token.kind {
        TokenKind::ArgRef => parse_argument_ref(token),
        TokenKind::IntLiteral => Ok(Rc::new(Node::IntLiteral { text: token.text.clone() })),
        TokenKind::RealLiteral => Ok(Rc::new(Node::RealLiteral { text: token.text.clone() })),
        TokenKind::OpenBracket => parse_bracket_list(tokens, depth + 1),
        TokenKind::ListKeyword => {
            expect_open_paren(tokens)?;
            let elements = parse_comma_separated(tokens, |t| parse_nested(t, depth + 1))?;
            Ok(Rc::new(Node::ListLiteral { elements }))
        },
        TokenKind::Identifier => parse_named(tokens, token, depth + 1),
        TokenKind::Comma
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::CloseBracket
        | TokenKind::Arrow
        | TokenKind::Ignored
        | TokenKind::EndOfInput => Err(ParseError::UnexpectedToken { token:  token.describe(),
                                                                     offset: token.offset, }),
    }
}

/// Parses the index of a `#n` token.
fn parse_argument_ref(token: &Token) -> ParseResult<Rc<Node>> {
    let digits = token.text.trim_start_matches('#');
    if digits.is_empty() {
        return Err(ParseError::MissingArgumentIndex { offset: token.offset });
    }

    let index = digits.parse::<usize>()
                      .map_err(|_| ParseError::ArgumentIndexTooLarge { offset: token.offset })?;

    Ok(Rc::new(Node::ArgumentRef { index }))
}

/// Parses the elements of a bracket list after the opening `[`.
///
/// Elements are plain expressions one after another; commas are not
/// separators here and are rejected like any stray comma.
fn parse_bracket_list<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Rc<Node>>
    where I: Iterator<Item = &'a Token>
{
    let mut elements = Vec::new();

    loop {
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::CloseBracket => {
                tokens.next();
                break;
            },
            Some(token) if token.is_end() => {
                return Err(ParseError::ExpectedClosingBracket { offset: token.offset });
            },
            Some(_) => elements.push(parse_nested(tokens, depth)?),
            None => return Err(ParseError::ExpectedClosingBracket { offset: 0 }),
        }
    }

    Ok(Rc::new(Node::ListLiteral { elements }))
}

/// Parses what follows an identifier: a definition or an application.
///
/// The token after the name decides: `<-` commits to a definition, `(` to an
/// application. Anything else is an error.
fn parse_named<'a, I>(tokens: &mut Peekable<I>, name: &Token, depth: usize) -> ParseResult<Rc<Node>>
    where I: Iterator<Item = &'a Token>
{
    let next = next_token(tokens)?;

    match next.kind {
        TokenKind::Arrow => {
            let body = parse_nested(tokens, depth)?;
            Ok(Rc::new(Node::FunctionDefinition(Rc::new(FunctionDef { name: name.text.clone(),
                                                                      body }))))
        },
        TokenKind::OpenParen => {
            let arguments = parse_comma_separated(tokens, |t| parse_nested(t, depth))?;
            Ok(Rc::new(Node::FunctionApplication { name: name.text.clone(),
                                                   arguments }))
        },
        _ => Err(ParseError::ExpectedOpenParen { found:  next.describe(),
                                                 offset: next.offset, }),
    }
}
