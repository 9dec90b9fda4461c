/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning a line of source
/// text into a syntax tree: unknown characters, malformed numbers, unexpected
/// tokens and unterminated brackets or parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// functions, operand type mismatches, out-of-range argument references,
/// empty lists and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Broad classification of a failure, used by drivers to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown character or malformed number.
    Lex,
    /// Malformed expression.
    Parse,
    /// No function with the requested name and arity.
    Dispatch,
    /// Operand of the wrong kind.
    Type,
    /// Index, list or numeric range violation.
    Range,
}

/// Any failure produced while lexing, parsing or evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The line parsed but its evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// ```
    /// use listfunc::{
    ///     error::{Error, ErrorKind, RuntimeError},
    /// };
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero);
    /// assert_eq!(error.kind(), ErrorKind::Range);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => match e {
                RuntimeError::UndefinedFunction { .. } => ErrorKind::Dispatch,
                RuntimeError::TypeError { .. } | RuntimeError::MissingValue { .. } => {
                    ErrorKind::Type
                },
                RuntimeError::IndexOutOfRange { .. }
                | RuntimeError::EmptyList { .. }
                | RuntimeError::DivisionByZero
                | RuntimeError::Overflow { .. }
                | RuntimeError::LiteralTooLarge { .. }
                | RuntimeError::RecursionLimit { .. } => ErrorKind::Range,
            },
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
