use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        scope::FunctionScope,
        utils::{Arithmetic, apply_arithmetic},
    },
    value::core::Value,
};

/// Generates a two-argument arithmetic built-in.
///
/// Both arguments are evaluated, left first, and combined with
/// [`apply_arithmetic`].
macro_rules! arithmetic_builtin {
    ($fname:ident, $op:expr) => {
        pub fn $fname(scope: &FunctionScope<'_>) -> EvalResult<Value> {
            let left = scope.nth(0)?;
            let right = scope.nth(1)?;
            apply_arithmetic($op, &left, &right)
        }
    };
}

arithmetic_builtin!(add, Arithmetic::Add);
arithmetic_builtin!(sub, Arithmetic::Sub);
arithmetic_builtin!(mul, Arithmetic::Mul);
arithmetic_builtin!(div, Arithmetic::Div);

/// Raises argument 0 to the power of argument 1.
///
/// The result is always real, even for two integers.
pub fn pow(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    let base = scope.nth(0)?.as_real("pow")?;
    let exponent = scope.nth(1)?.as_real("pow")?;
    Ok(Value::Real(base.powf(exponent)))
}
