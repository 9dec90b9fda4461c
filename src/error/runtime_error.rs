#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// No function is registered under this name and arity.
    UndefinedFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied by the call.
        arity: usize,
    },
    /// A built-in received an operand of the wrong kind.
    TypeError {
        /// The built-in that rejected the operand.
        function: &'static str,
        /// Details about the type mismatch.
        details:  String,
    },
    /// An argument reference points past the arguments of the current call.
    IndexOutOfRange {
        /// The requested argument index.
        index: usize,
        /// The number of arguments available.
        arity: usize,
    },
    /// `head` or `tail` applied to an empty list.
    EmptyList {
        /// The built-in that was called.
        function: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow {
        /// The built-in that overflowed.
        function: &'static str,
    },
    /// A literal or intermediate value cannot be represented.
    LiteralTooLarge {
        /// Textual form of the value.
        literal: String,
    },
    /// Too many function calls were in progress at once.
    RecursionLimit {
        /// The maximum number of nested calls.
        limit: usize,
    },
    /// A function definition was used where a value is required.
    MissingValue {
        /// Name of the function that was defined in value position.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedFunction { name, arity } => write!(f,
                                                              "Error: Called function '{name}' with {arity} argument(s), which is not defined."),
            Self::TypeError { function, details } => {
                write!(f, "Error: Type error in {function}(): {details}.")
            },
            Self::IndexOutOfRange { index, arity } => write!(f,
                                                             "Error: Argument index #{index} out of range, the call has {arity} argument(s)."),
            Self::EmptyList { function } => {
                write!(f, "Error: {function}() called on an empty list.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::Overflow { function } => write!(f,
                                                  "Error: Integer overflow while computing the result of {function}()."),
            Self::LiteralTooLarge { literal } => {
                write!(f, "Error: Literal '{literal}' is too large.")
            },
            Self::RecursionLimit { limit } => write!(f,
                                                     "Error: Recursion limit of {limit} nested calls exceeded."),
            Self::MissingValue { name } => write!(f,
                                                  "Error: Definition of '{name}' does not produce a value."),
        }
    }
}

impl std::error::Error for RuntimeError {}
