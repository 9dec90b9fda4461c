use crate::interpreter::{
    evaluator::{core::EvalResult, scope::FunctionScope},
    value::core::Value,
};

/// Applies a unary real function to argument 0.
///
/// Integers are widened to reals first; the result is always real. Lists
/// produce a `TypeError`.
///
/// # Example
/// ```
/// use listfunc::{
///     evaluate_line,
///     interpreter::{evaluator::scope::GlobalScope, value::core::Value},
///     session::Outcome,
/// };
///
/// let globals = GlobalScope::with_default_library();
/// let outcome = evaluate_line("sqrt(16)", &globals).unwrap();
/// assert_eq!(outcome, Outcome::Value(Value::Real(4.0)));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $name:literal) => {
        pub fn $fname(scope: &FunctionScope<'_>) -> EvalResult<Value> {
            Ok(Value::Real(scope.nth(0)?.as_real($name)?.$fname()))
        }
    };
}

real_builtin!(sqrt, "sqrt");
real_builtin!(sin, "sin");
real_builtin!(cos, "cos");
