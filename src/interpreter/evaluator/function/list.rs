use crate::{
    interpreter::{
        evaluator::{core::EvalResult, scope::FunctionScope},
        value::core::Value,
    },
    util::num::usize_to_i64_checked,
};

/// Number of elements of a list, or `-1` for a number.
pub fn length(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    match scope.nth(0)? {
        Value::List(items) => Ok(Value::Integer(usize_to_i64_checked(items.len())?)),
        _ => Ok(Value::Integer(-1)),
    }
}

/// First element of a list. See [`FunctionScope::head_of_list`].
pub fn head(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    scope.head_of_list()
}

/// All but the first element of a list. See [`FunctionScope::tail_of_list`].
pub fn tail(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    scope.tail_of_list()
}

/// Shared body of `map` and `filter`.
///
/// The function argument is evaluated and then discarded; the list argument
/// is returned unchanged. Neither built-in applies anything to the elements.
pub fn map_filter(name: &'static str, scope: &FunctionScope<'_>) -> EvalResult<Value> {
    log::warn!("{name} returns its list argument unchanged");

    scope.nth(0)?;
    let list = scope.nth(1)?;
    list.as_list(name)?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, RuntimeError},
        evaluate_line,
        interpreter::evaluator::scope::GlobalScope,
        session::Outcome,
    };

    fn run(globals: &GlobalScope, source: &str) -> Result<String, Error> {
        match evaluate_line(source, globals)? {
            Outcome::Value(value) => Ok(value.to_string()),
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn length_of_lists_and_numbers() {
        let globals = GlobalScope::with_default_library();
        assert_eq!(run(&globals, "length([1 [2 3] 4])").unwrap(), "3");
        assert_eq!(run(&globals, "length(list())").unwrap(), "0");
        assert_eq!(run(&globals, "length(7)").unwrap(), "-1");
    }

    #[test]
    fn head_and_tail_of_computed_lists() {
        let globals = GlobalScope::with_default_library();
        run(&globals, "pair <- [#0 #1]").unwrap();

        assert_eq!(run(&globals, "head(pair(3, 4))").unwrap(), "3");
        assert_eq!(run(&globals, "tail(pair(3, 4))").unwrap(), "[4]");
        assert_eq!(run(&globals, "tail(tail(pair(3, 4)))").unwrap(), "[]");
    }

    #[test]
    fn map_and_filter_return_the_list() {
        let globals = GlobalScope::with_default_library();
        run(&globals, "inc <- add(#0, 1)").unwrap();

        assert_eq!(run(&globals, "map(inc(0), [1 2 3])").unwrap(), "[1, 2, 3]");
        assert_eq!(run(&globals, "filter(0, list())").unwrap(), "[]");
        assert!(matches!(run(&globals, "map(0, 5)"),
                         Err(Error::Runtime(RuntimeError::TypeError { function: "map", .. }))));
    }
}
