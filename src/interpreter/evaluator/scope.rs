use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    ast::{Builtin, FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::install_default_library},
        value::core::Value,
    },
};

/// Maximum number of function calls that may be in progress at once.
///
/// Every call, including the ones made while an argument is evaluated on
/// behalf of a callee, holds a slot until it returns. Exceeding the limit
/// fails the current line instead of exhausting the native stack.
pub const MAX_CALL_DEPTH: usize = 512;

/// The process-wide function table.
///
/// Functions are keyed by name and arity, so `f` with one argument and `f`
/// with two arguments are unrelated entries. Entries are never removed;
/// defining an existing (name, arity) pair replaces it.
///
/// The table is only ever touched from the evaluating thread. Lookups clone
/// the stored definition out before evaluating it, so a body may redefine
/// functions (including itself) while it runs.
#[derive(Default)]
pub struct GlobalScope {
    definitions:  RefCell<HashMap<String, HashMap<usize, Rc<FunctionDef>>>>,
    active_calls: Cell<usize>,
}

impl GlobalScope {
    /// Creates an empty table without any built-ins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the standard built-in library installed.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::evaluator::scope::GlobalScope;
    ///
    /// let globals = GlobalScope::with_default_library();
    /// assert!(globals.is_defined("add", 2));
    /// assert!(!globals.is_defined("add", 3));
    /// ```
    #[must_use]
    pub fn with_default_library() -> Self {
        let globals = Self::new();
        install_default_library(&globals);
        globals
    }

    /// Registers a definition under its name and its body's required arity.
    ///
    /// # Returns
    /// `true` if an existing definition with the same name and arity was
    /// replaced.
    pub fn add_function(&self, definition: Rc<FunctionDef>) -> bool {
        let arity = definition.arity();
        let name = definition.name.clone();

        let replaced = self.definitions
                           .borrow_mut()
                           .entry(name)
                           .or_default()
                           .insert(arity, definition)
                           .is_some();

        if replaced {
            log::debug!("redefined function with arity {arity}");
        } else {
            log::debug!("defined function with arity {arity}");
        }
        replaced
    }

    /// Registers a native built-in under its fixed arity.
    pub fn add_builtin(&self, builtin: Builtin) -> bool {
        self.add_function(Rc::new(FunctionDef { name: builtin.name.to_string(),
                                                body: Rc::new(Node::Builtin(builtin)), }))
    }

    /// Returns `true` if a function with this name and arity exists.
    #[must_use]
    pub fn is_defined(&self, name: &str, arity: usize) -> bool {
        self.lookup(name, arity).is_some()
    }

    /// Looks up the definition registered for `name` and `arity`.
    #[must_use]
    pub fn lookup(&self, name: &str, arity: usize) -> Option<Rc<FunctionDef>> {
        self.definitions.borrow().get(name).and_then(|by_arity| by_arity.get(&arity)).cloned()
    }

    /// All registered (name, arity) pairs, sorted.
    #[must_use]
    pub fn signatures(&self) -> Vec<(String, usize)> {
        let mut signatures: Vec<_> =
            self.definitions
                .borrow()
                .iter()
                .flat_map(|(name, by_arity)| by_arity.keys().map(|arity| (name.clone(), *arity)))
                .collect();
        signatures.sort();
        signatures
    }

    /// Calls `name` with the arguments held by `scope`.
    ///
    /// The function is selected by `name` and the number of arguments in
    /// `scope`; its body is then evaluated against `scope`, so argument
    /// references in the body resolve to the caller's argument expressions.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedFunction` if nothing is registered under
    ///   that name and arity.
    /// - `RuntimeError::RecursionLimit` if [`MAX_CALL_DEPTH`] calls are
    ///   already in progress.
    /// - Any error raised by the body.
    pub fn call_function(&self, name: &str, scope: &FunctionScope<'_>) -> EvalResult<Option<Value>> {
        let arity = scope.arity();
        let definition =
            self.lookup(name, arity)
                .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                 arity })?;

        let depth = self.active_calls.get();
        if depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH });
        }

        log::trace!("calling {name}/{arity} at depth {depth}");
        self.active_calls.set(depth + 1);
        let result = definition.body.evaluate(scope);
        self.active_calls.set(depth);

        result
    }
}

/// The evaluation context of one function call.
///
/// A scope holds the caller's argument expressions unevaluated, together
/// with the scope they were written in. Arguments are evaluated by name:
/// every [`nth`](Self::nth) call evaluates the expression again, in the
/// caller's scope, and nothing is cached.
///
/// Scopes live on the Rust stack for exactly as long as the application
/// that created them is being evaluated.
pub struct FunctionScope<'a> {
    arguments: &'a [Rc<Node>],
    parent:    Option<&'a FunctionScope<'a>>,
    globals:   &'a GlobalScope,
}

impl<'a> FunctionScope<'a> {
    /// The scope a top-level line is evaluated in: no arguments, no parent.
    #[must_use]
    pub const fn root(globals: &'a GlobalScope) -> Self {
        Self { arguments: &[],
               parent: None,
               globals }
    }

    /// The scope of a call whose argument expressions were written in
    /// `parent`.
    #[must_use]
    pub const fn call(arguments: &'a [Rc<Node>], parent: &'a FunctionScope<'a>) -> Self {
        Self { arguments,
               parent: Some(parent),
               globals: parent.globals }
    }

    /// Number of arguments supplied to this call.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// The global function table.
    #[must_use]
    pub const fn globals(&self) -> &'a GlobalScope {
        self.globals
    }

    /// Evaluates argument `index` in the caller's scope.
    ///
    /// The argument is evaluated again on every call; reading the same
    /// argument twice costs two evaluations.
    ///
    /// # Errors
    /// - `RuntimeError::IndexOutOfRange` if the call has fewer arguments.
    /// - Any error raised while evaluating the argument.
    pub fn nth(&self, index: usize) -> EvalResult<Value> {
        match (self.arguments.get(index), self.parent) {
            (Some(argument), Some(parent)) => {
                log::trace!("evaluating argument #{index}: {argument}");
                argument.evaluate_value(parent)
            },
            _ => Err(RuntimeError::IndexOutOfRange { index,
                                                     arity: self.arity() }),
        }
    }

    /// The first element of the list passed as argument 0.
    ///
    /// When the argument is written as a list literal only its first element
    /// is evaluated.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyList` for an empty list.
    /// - `RuntimeError::TypeError` if the argument is not a list.
    pub fn head_of_list(&self) -> EvalResult<Value> {
        const NAME: &str = "head";

        if let Some((elements, parent)) = self.literal_argument() {
            return match elements.first() {
                Some(first) => first.evaluate_value(parent),
                None => Err(RuntimeError::EmptyList { function: NAME }),
            };
        }

        let list = self.nth(0)?;
        list.as_list(NAME)?.first().cloned().ok_or(RuntimeError::EmptyList { function: NAME })
    }

    /// Everything but the first element of the list passed as argument 0.
    ///
    /// When the argument is written as a list literal its first element is
    /// never evaluated.
    ///
    /// # Errors
    /// - `RuntimeError::EmptyList` for an empty list.
    /// - `RuntimeError::TypeError` if the argument is not a list.
    pub fn tail_of_list(&self) -> EvalResult<Value> {
        const NAME: &str = "tail";

        if let Some((elements, parent)) = self.literal_argument() {
            if elements.is_empty() {
                return Err(RuntimeError::EmptyList { function: NAME });
            }
            let rest = elements[1..].iter()
                                    .map(|element| element.evaluate_value(parent))
                                    .collect::<EvalResult<Vec<_>>>()?;
            return Ok(Value::from(rest));
        }

        let list = self.nth(0)?;
        match list.as_list(NAME)?.split_first() {
            Some((_, rest)) => Ok(Value::from(rest.to_vec())),
            None => Err(RuntimeError::EmptyList { function: NAME }),
        }
    }

    /// Argument 0 when it is syntactically a list literal, with the scope it
    /// must be evaluated in.
    fn literal_argument(&self) -> Option<(&'a [Rc<Node>], &'a FunctionScope<'a>)> {
        match (self.arguments.first().map(|argument| &**argument), self.parent) {
            (Some(Node::ListLiteral { elements }), Some(parent)) => {
                Some((elements.as_slice(), parent))
            },
            _ => None,
        }
    }
}
