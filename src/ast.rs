use std::{fmt, rc::Rc};

use crate::interpreter::evaluator::{core::EvalResult, scope::FunctionScope};
use crate::interpreter::value::core::Value;

/// Signature of a native built-in implementation.
///
/// A built-in only sees the scope of its own call. It pulls its arguments
/// through [`FunctionScope::nth`], which evaluates them on demand.
pub type BuiltinFn = fn(&FunctionScope<'_>) -> EvalResult<Value>;

/// A native function installed into the global scope at startup.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name the built-in is called by.
    pub name:  &'static str,
    /// Number of arguments it is registered under.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// A named function: the unit stored in the global function table.
///
/// User definitions (`double <- add(#0, #0)`) and built-ins share this
/// representation; a built-in's body is a [`Node::Builtin`].
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Name of the function.
    pub name: String,
    /// Expression evaluated on every call.
    pub body: Rc<Node>,
}

impl FunctionDef {
    /// The arity the function is registered under.
    ///
    /// This is not declared anywhere in the source: it is the highest
    /// argument index referenced by the body, plus one.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.body.required_arity()
    }
}

/// An abstract syntax tree node.
///
/// Nodes are immutable once built and shared through `Rc`, since the body of
/// a definition outlives the line it was parsed from and is evaluated on
/// every call.
#[derive(Debug, Clone)]
pub enum Node {
    /// An integer literal, kept as source text until evaluated.
    IntLiteral {
        /// Source text, including an optional sign.
        text: String,
    },
    /// A real literal, kept as source text until evaluated.
    RealLiteral {
        /// Source text, including an optional sign.
        text: String,
    },
    /// `#index`: the argument at `index` of the nearest enclosing call.
    ArgumentRef {
        /// Zero based argument position.
        index: usize,
    },
    /// `[a b c]` or `list(a, b, c)`.
    ListLiteral {
        /// Element expressions.
        elements: Vec<Rc<Self>>,
    },
    /// `name <- body`.
    FunctionDefinition(Rc<FunctionDef>),
    /// `name(arg, ...)`.
    FunctionApplication {
        /// Name of the function being called.
        name:      String,
        /// Unevaluated argument expressions.
        arguments: Vec<Rc<Self>>,
    },
    /// Native implementation of a built-in function.
    Builtin(Builtin),
}

impl Node {
    /// Minimum number of positional arguments this expression needs.
    ///
    /// `#i` needs `i + 1`, literals need none, and composite nodes need the
    /// maximum over their children.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::parser::core::parse_line;
    ///
    /// let node = parse_line("add(#0, [1 #2])").unwrap();
    /// assert_eq!(node.required_arity(), 3);
    /// ```
    #[must_use]
    pub fn required_arity(&self) -> usize {
        match self {
            Self::IntLiteral { .. } | Self::RealLiteral { .. } => 0,
            Self::ArgumentRef { index } => index + 1,
            Self::ListLiteral { elements: children }
            | Self::FunctionApplication { arguments: children, .. } => {
                children.iter().map(|c| c.required_arity()).max().unwrap_or(0)
            },
            Self::FunctionDefinition(def) => def.arity(),
            Self::Builtin(builtin) => builtin.arity,
        }
    }
}

/// Renders the node back in source form, using the bracket list syntax.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntLiteral { text } | Self::RealLiteral { text } => write!(f, "{text}"),
            Self::ArgumentRef { index } => write!(f, "#{index}"),
            Self::ListLiteral { elements } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::FunctionDefinition(def) => write!(f, "{} <- {}", def.name, def.body),
            Self::FunctionApplication { name, arguments } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Builtin(builtin) => write!(f, "<builtin {}/{}>", builtin.name, builtin.arity),
        }
    }
}
