#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset into the source line at which the
/// problem was detected.
pub enum ParseError {
    /// A character that does not start any token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset into the line.
        offset:    usize,
    },
    /// A sign that is not followed by any digits.
    MalformedNumber {
        /// The text consumed while lexing the number.
        text:   String,
        /// Byte offset into the line.
        offset: usize,
    },
    /// Found a token that cannot start an expression.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset into the line.
        offset: usize,
    },
    /// Reached the end of the line while an expression was still open.
    UnexpectedEndOfInput {
        /// Byte offset into the line.
        offset: usize,
    },
    /// An opening parenthesis `(` was expected after a name or `list`.
    ExpectedOpenParen {
        /// The token found instead.
        found:  String,
        /// Byte offset into the line.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset into the line.
        offset: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// Byte offset into the line.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset into the line.
        offset: usize,
    },
    /// A `#` argument reference without an index.
    MissingArgumentIndex {
        /// Byte offset into the line.
        offset: usize,
    },
    /// A `#` argument reference whose index does not fit in memory.
    ArgumentIndexTooLarge {
        /// Byte offset into the line.
        offset: usize,
    },
    /// Lists and calls are nested deeper than the parser accepts.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Byte offset into the line.
        offset: usize,
    },
}

impl ParseError {
    /// Returns `true` for errors raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::UnknownCharacter { .. } | Self::MalformedNumber { .. })
    }

    /// Byte offset into the source line where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownCharacter { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedOpenParen { offset, .. }
            | Self::ExpectedClosingParen { offset }
            | Self::ExpectedClosingBracket { offset }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::MissingArgumentIndex { offset }
            | Self::ArgumentIndexTooLarge { offset }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, offset } => {
                write!(f, "Error at column {offset}: Unknown character '{character}'.")
            },
            Self::MalformedNumber { text, offset } => write!(f,
                                                             "Error at column {offset}: Malformed number '{text}', expected digits after the sign."),
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at column {offset}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at column {offset}: Unexpected end of input.")
            },
            Self::ExpectedOpenParen { found, offset } => write!(f,
                                                                "Error at column {offset}: Expected '(' but found {found}."),
            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at column {offset}: Expected closing parenthesis ')' but none found."),
            Self::ExpectedClosingBracket { offset } => write!(f,
                                                              "Error at column {offset}: Expected closing bracket ']' but none found."),
            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at column {offset}: Extra tokens after expression. Check your input: {token}"),
            Self::MissingArgumentIndex { offset } => write!(f,
                                                            "Error at column {offset}: Argument reference '#' needs an index, e.g. #0."),
            Self::ArgumentIndexTooLarge { offset } => {
                write!(f, "Error at column {offset}: Argument index is too large.")
            },
            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at column {offset}: Expression is nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
