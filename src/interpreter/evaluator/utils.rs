use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The four arithmetic operations sharing the numeric coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arithmetic {
    /// Name of the built-in implementing the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    fn integer(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => left.checked_div(right),
        }
    }

    fn real(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Applies an arithmetic operation with numeric coercion.
///
/// Two integers give an integer; if either operand is real both are widened
/// and the result is real. Integer division truncates toward zero.
///
/// # Errors
/// - `RuntimeError::TypeError` if an operand is a list.
/// - `RuntimeError::DivisionByZero` for `Div` with a zero divisor, integer
///   or real.
/// - `RuntimeError::Overflow` if an integer result does not fit in 64 bits.
///
/// # Example
/// ```
/// use listfunc::interpreter::{
///     evaluator::utils::{Arithmetic, apply_arithmetic},
///     value::core::Value,
/// };
///
/// let int = apply_arithmetic(Arithmetic::Div, &Value::Integer(7), &Value::Integer(2)).unwrap();
/// assert_eq!(int, Value::Integer(3));
///
/// let real = apply_arithmetic(Arithmetic::Div, &Value::Integer(7), &Value::Real(2.0)).unwrap();
/// assert_eq!(real, Value::Real(3.5));
/// ```
pub fn apply_arithmetic(op: Arithmetic, left: &Value, right: &Value) -> EvalResult<Value> {
    let function = op.name();

    if op == Arithmetic::Div && is_zero(right) {
        return Err(RuntimeError::DivisionByZero);
    }

    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => {
            op.integer(*l, *r).map(Value::Integer).ok_or(RuntimeError::Overflow { function })
        },
        _ => Ok(Value::Real(op.real(left.as_real(function)?, right.as_real(function)?))),
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Integer(n) => *n == 0,
        Value::Real(r) => *r == 0.0,
        Value::List(_) => false,
    }
}
