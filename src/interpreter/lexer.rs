use logos::Logos;

use crate::error::ParseError;

/// The kind of a lexical token.
///
/// The lexer recognizes the punctuation of the language, the `<-` arrow,
/// `#n` argument references, numeric literals, the `list` keyword and
/// identifiers. `EndOfInput` is never produced by the scanner itself; it is
/// appended by [`tokenize`] to mark the end of the line.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `<-`
    #[token("<-")]
    Arrow,
    /// Argument references such as `#0` or `#12`. The digits may be missing.
    #[regex(r"#[0-9]*")]
    ArgRef,
    /// Integer literals with an optional sign, such as `42` or `-7`.
    #[regex(r"[+-]?[0-9]+")]
    IntLiteral,
    /// Real literals with an optional sign, such as `3.14`, `-0.5` or `2.`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*")]
    RealLiteral,
    /// `list`
    #[token("list")]
    ListKeyword,
    /// Function names such as `add` or `fib2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// End of the line.
    EndOfInput,
}

/// A single token together with its source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text of the token. Empty for `EndOfInput`.
    pub text:   String,
    /// Byte offset of the first character within the line.
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, text: &str, offset: usize) -> Self {
        Self { kind,
               text: text.to_string(),
               offset }
    }

    /// Returns `true` if this token marks the end of the line.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Human readable description used in parse errors.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_end() { "end of input".to_string() } else { format!("'{}'", self.text) }
    }
}

/// Converts one line of source text into tokens.
///
/// The returned vector always ends with a single `EndOfInput` token whose
/// offset is the length of the line.
///
/// # Errors
/// - `ParseError::MalformedNumber` if a `+` or `-` is not followed by digits.
/// - `ParseError::UnknownCharacter` for any other unrecognized character.
///
/// # Example
/// ```
/// use listfunc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("add(1, 2)").unwrap()
///                                                 .into_iter()
///                                                 .map(|t| t.kind)
///                                                 .collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::OpenParen,
///             TokenKind::IntLiteral,
///             TokenKind::Comma,
///             TokenKind::IntLiteral,
///             TokenKind::CloseParen,
///             TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let offset = lexer.span().start;
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), offset)),
            Err(()) => return Err(unrecognized(source, offset)),
        }
    }

    tokens.push(Token::new(TokenKind::EndOfInput, "", source.len()));
    log::trace!("lexed {} token(s) from {source:?}", tokens.len());

    Ok(tokens)
}

/// Builds the error for input the scanner could not match at `offset`.
///
/// A sign is the only way to start a number without a digit, so a failure on
/// `+` or `-` is reported as a malformed number.
fn unrecognized(source: &str, offset: usize) -> ParseError {
    let rest = &source[offset..];
    let character = rest.chars().next().unwrap_or('\0');

    if character == '+' || character == '-' {
        let text = rest.chars()
                       .enumerate()
                       .take_while(|(i, c)| *i == 0 || *c == '.' || c.is_ascii_digit())
                       .map(|(_, c)| c)
                       .collect();
        return ParseError::MalformedNumber { text, offset };
    }

    ParseError::UnknownCharacter { character, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn application_tokens_carry_text_and_offsets() {
        let tokens = tokenize("add(1, 2)").unwrap();

        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "add", 0));
        assert_eq!(tokens[2], Token::new(TokenKind::IntLiteral, "1", 4));
        assert_eq!(tokens[4], Token::new(TokenKind::IntLiteral, "2", 7));
        assert_eq!(tokens[6], Token::new(TokenKind::EndOfInput, "", 9));
    }

    #[test]
    fn definition_with_arguments() {
        assert_eq!(kinds("double <- add(#0,#0)"),
                   [TokenKind::Identifier,
                    TokenKind::Arrow,
                    TokenKind::Identifier,
                    TokenKind::OpenParen,
                    TokenKind::ArgRef,
                    TokenKind::Comma,
                    TokenKind::ArgRef,
                    TokenKind::CloseParen,
                    TokenKind::EndOfInput]);
    }

    #[test]
    fn signed_and_real_literals() {
        let tokens = tokenize("-12 +3 4.5 -0.25 7.").unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

        assert_eq!(pairs,
                   [(TokenKind::IntLiteral, "-12"),
                    (TokenKind::IntLiteral, "+3"),
                    (TokenKind::RealLiteral, "4.5"),
                    (TokenKind::RealLiteral, "-0.25"),
                    (TokenKind::RealLiteral, "7."),
                    (TokenKind::EndOfInput, "")]);
    }

    #[test]
    fn list_keyword_only_as_whole_word() {
        assert_eq!(kinds("list"), [TokenKind::ListKeyword, TokenKind::EndOfInput]);
        assert_eq!(kinds("lists"), [TokenKind::Identifier, TokenKind::EndOfInput]);
    }

    #[test]
    fn argument_reference_without_digits_is_still_a_token() {
        let tokens = tokenize("#").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::ArgRef, "#", 0));
    }

    #[test]
    fn tabs_and_spaces_are_skipped() {
        assert_eq!(kinds("\t[ 1\t2 ]  "),
                   [TokenKind::OpenBracket,
                    TokenKind::IntLiteral,
                    TokenKind::IntLiteral,
                    TokenKind::CloseBracket,
                    TokenKind::EndOfInput]);
    }

    #[test]
    fn sign_without_digits_is_malformed() {
        let err = tokenize("add(-, 1)").unwrap_err();
        assert!(matches!(err, ParseError::MalformedNumber { offset: 4, .. }));
        assert!(err.is_lexical());
    }

    #[test]
    fn unknown_character() {
        assert_eq!(tokenize("add(1; 2)").unwrap_err(),
                   ParseError::UnknownCharacter { character: ';',
                                                  offset:    5, });
        assert!(matches!(tokenize("a < b"), Err(ParseError::UnknownCharacter { character: '<', .. })));
    }
}
