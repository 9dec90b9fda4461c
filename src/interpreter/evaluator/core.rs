use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{evaluator::scope::FunctionScope, value::core::Value},
    util::num::{parse_integer_literal, parse_real_literal},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Node {
    /// Evaluates the node in `scope`.
    ///
    /// The evaluator dispatches on the node kind:
    /// - literals parse their source text,
    /// - `#i` asks the scope for argument `i`, which evaluates it in the
    ///   caller's scope,
    /// - list literals evaluate every element in order,
    /// - definitions register themselves in the global scope,
    /// - applications open a new scope over their unevaluated arguments and
    ///   dispatch by name and arity,
    /// - built-ins run their native implementation.
    ///
    /// # Returns
    /// `Some(Value)` for expressions, `None` for definitions, which declare a
    /// function rather than produce a value.
    pub fn evaluate(&self, scope: &FunctionScope<'_>) -> EvalResult<Option<Value>> {
        match self {
            Self::IntLiteral { text } => Ok(Some(Value::Integer(parse_integer_literal(text)?))),
            Self::RealLiteral { text } => Ok(Some(Value::Real(parse_real_literal(text)?))),
            Self::ArgumentRef { index } => scope.nth(*index).map(Some),
            Self::ListLiteral { elements } => {
                let values = elements.iter()
                                     .map(|element| element.evaluate_value(scope))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Some(Value::from(values)))
            },
            Self::FunctionDefinition(def) => {
                scope.globals().add_function(def.clone());
                Ok(None)
            },
            Self::FunctionApplication { name, arguments } => {
                let callee = FunctionScope::call(arguments, scope);
                scope.globals().call_function(name, &callee)
            },
            Self::Builtin(builtin) => (builtin.func)(scope).map(Some),
        }
    }

    /// Evaluates the node where a value is required.
    ///
    /// # Errors
    /// `RuntimeError::MissingValue` if the node is a definition, plus any
    /// error raised while evaluating it.
    pub fn evaluate_value(&self, scope: &FunctionScope<'_>) -> EvalResult<Value> {
        self.evaluate(scope)?.ok_or_else(|| RuntimeError::MissingValue { name: self.defined_name() })
    }

    fn defined_name(&self) -> String {
        match self {
            Self::FunctionDefinition(def) => def.name.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{evaluator::scope::GlobalScope, parser::core::parse_line};

    fn eval(globals: &GlobalScope, source: &str) -> EvalResult<Option<Value>> {
        let root = parse_line(source).unwrap();
        root.evaluate(&FunctionScope::root(globals))
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        let globals = GlobalScope::new();
        assert_eq!(eval(&globals, "7").unwrap(), Some(Value::Integer(7)));
        assert_eq!(eval(&globals, "-1.25").unwrap(), Some(Value::Real(-1.25)));
        assert_eq!(eval(&globals, "[1 [2.5] []]").unwrap().unwrap().to_string(),
                   "[1, [2.500000], []]");
    }

    #[test]
    fn definition_yields_no_value() {
        let globals = GlobalScope::new();
        assert_eq!(eval(&globals, "five <- 5").unwrap(), None);
        assert_eq!(eval(&globals, "five()").unwrap(), Some(Value::Integer(5)));
    }

    #[test]
    fn definition_in_value_position_is_an_error() {
        let globals = GlobalScope::with_default_library();
        assert_eq!(eval(&globals, "add(one <- 1, 2)").unwrap_err(),
                   RuntimeError::MissingValue { name: "one".to_string() });
        assert_eq!(eval(&globals, "one()").unwrap(), Some(Value::Integer(1)));
    }

    #[test]
    fn argument_reference_at_top_level_is_out_of_range() {
        let globals = GlobalScope::new();
        assert_eq!(eval(&globals, "#0").unwrap_err(),
                   RuntimeError::IndexOutOfRange { index: 0, arity: 0 });
    }

    #[test]
    fn oversized_integer_literal() {
        let globals = GlobalScope::new();
        assert!(matches!(eval(&globals, "123456789012345678901234567890"),
                         Err(RuntimeError::LiteralTooLarge { .. })));
    }
}
