use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, scope::FunctionScope},
        value::core::Value,
    },
};

/// Deep equality, returning `1` or `0`.
///
/// See [`Value::equals`] for the comparison rules.
pub fn eq(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    let left = scope.nth(0)?;
    let right = scope.nth(1)?;
    Ok(Value::from(left.equals(&right)))
}

/// Strict less-than on two numbers of the same kind.
///
/// # Errors
/// `RuntimeError::TypeError` if either operand is a list, or if one is an
/// integer and the other a real.
pub fn le(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    let left = scope.nth(0)?;
    let right = scope.nth(1)?;

    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => Ok(Value::from(l < r)),
        (Value::Real(l), Value::Real(r)) => Ok(Value::from(l < r)),
        _ => Err(RuntimeError::TypeError { function: "le",
                                           details:  format!("cannot compare {left} with {right}"), }),
    }
}

/// Logical NAND.
///
/// Stops at the first falsy operand, so `nand(0, x)` never evaluates `x`.
pub fn nand(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    for index in 0..scope.arity() {
        if !scope.nth(index)?.is_truthy() {
            return Ok(Value::Integer(1));
        }
    }
    Ok(Value::Integer(0))
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, RuntimeError},
        evaluate_line,
        interpreter::evaluator::scope::GlobalScope,
        session::Outcome,
    };

    fn run(source: &str) -> Result<String, Error> {
        let globals = GlobalScope::with_default_library();
        match evaluate_line(source, &globals)? {
            Outcome::Value(value) => Ok(value.to_string()),
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn eq_unwraps_singletons() {
        assert_eq!(run("eq([[5]], 5)").unwrap(), "1");
        assert_eq!(run("eq(list(1, 2), [1 2.])").unwrap(), "1");
        assert_eq!(run("eq([1 2], [1])").unwrap(), "0");
    }

    #[test]
    fn le_requires_matching_numbers() {
        assert_eq!(run("le(1, 2)").unwrap(), "1");
        assert_eq!(run("le(2.5, 2.5)").unwrap(), "0");

        for source in ["le(1, 2.0)", "le([1], 2)"] {
            assert!(matches!(run(source),
                             Err(Error::Runtime(RuntimeError::TypeError { function: "le", .. }))),
                    "{source}");
        }
    }

    #[test]
    fn nand_short_circuits() {
        assert_eq!(run("nand(0, div(1, 0))").unwrap(), "1");
        assert_eq!(run("nand([1], 2.5)").unwrap(), "0");
        assert_eq!(run("nand(1, [])").unwrap(), "1");
        assert!(run("nand(1, div(1, 0))").is_err());
    }
}
