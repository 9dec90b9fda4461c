use std::rc::Rc;

use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::i64_to_f64,
};

/// Absolute tolerance used when comparing reals: `2^-30`.
pub const TOLERANCE: f64 = 1.0 / (1u64 << 30) as f64;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable. Lists share their elements through `Rc`, so taking
/// the tail of a list or copying it never deep-copies nested lists.
///
/// The derived `PartialEq` is exact structural equality; the language's own
/// notion of equality (tolerant, with singleton unwrapping) is
/// [`Value::equals`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Converts a number to `f64`, or returns an error if it is a list.
    ///
    /// # Parameters
    /// - `function`: Name of the built-in asking, for error reporting.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real("sqrt").unwrap(), 10.0);
    /// assert!(Value::from(vec![]).as_real("sqrt").is_err());
    /// ```
    pub fn as_real(&self, function: &'static str) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::List(_) => Err(RuntimeError::TypeError { function,
                                                           details: format!("expected a number, found the list {self}") }),
        }
    }

    /// Returns the elements of a list, or an error if the value is a number.
    pub fn as_list(&self, function: &'static str) -> EvalResult<&Rc<Vec<Self>>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(RuntimeError::TypeError { function,
                                               details: format!("expected a list, found {self}") }),
        }
    }

    /// Truthiness shared by `nand` and `if`: any nonzero number or any
    /// non-empty list.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from(vec![]).is_truthy());
    /// assert!(Value::from(vec![Value::Integer(0)]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Deep equality as defined by the `eq` built-in.
    ///
    /// - Two lists are equal if they have the same length and their elements
    ///   are pairwise equal.
    /// - A one-element list compared with a non-list compares its sole
    ///   element instead, in either operand order.
    /// - Numbers compare exactly when both are integers, and within
    ///   [`TOLERANCE`] otherwise.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::value::core::Value;
    ///
    /// let one = Value::Integer(1);
    /// assert!(one.equals(&Value::Real(1.0)));
    /// assert!(Value::from(vec![one.clone()]).equals(&one));
    /// assert!(one.equals(&Value::from(vec![Value::from(vec![one.clone()])])));
    /// assert!(!Value::from(vec![one.clone(), one.clone()]).equals(&one));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(left), Self::List(right)) => {
                left.len() == right.len() && left.iter().zip(right.iter()).all(|(l, r)| l.equals(r))
            },
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::List(items), scalar) | (scalar, Self::List(items)) => {
                items.len() == 1 && items[0].equals(scalar)
            },
            (Self::Real(left), Self::Real(right)) => approx_eq(*left, *right),
            (Self::Integer(i), Self::Real(r)) | (Self::Real(r), Self::Integer(i)) => {
                approx_eq(i64_to_f64(*i), *r)
            },
        }
    }
}

impl Value {
    /// Renders the value as a literal expression that evaluates back to an
    /// equal value.
    ///
    /// Reals keep every significant digit and always carry a decimal point,
    /// lists use the bracket form.
    ///
    /// # Example
    /// ```
    /// use listfunc::interpreter::value::core::Value;
    ///
    /// let value = Value::from(vec![Value::Integer(-1), Value::Real(2.0), Value::from(vec![])]);
    /// assert_eq!(value.to_literal(), "[-1 2.0 []]");
    /// ```
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Real(r) => {
                let text = r.to_string();
                if text.contains('.') { text } else { format!("{text}.0") }
            },
            Self::List(items) => {
                let elements: Vec<_> = items.iter().map(Self::to_literal).collect();
                format!("[{}]", elements.join(" "))
            },
        }
    }
}

/// Compares two reals within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < TOLERANCE
}

/// Integers print in decimal, reals in fixed notation with six fractional
/// digits, lists as `[a, b, c]`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:.6}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[Value]) -> Value {
        Value::from(items.to_vec())
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Real(1.5).to_string(), "1.500000");
        assert_eq!(list(&[]).to_string(), "[]");
        assert_eq!(list(&[Value::Integer(1), list(&[Value::Real(2.0)]), list(&[])]).to_string(),
                   "[1, [2.000000], []]");
    }

    #[test]
    fn tolerance_is_two_to_the_minus_thirty() {
        assert!(approx_eq(1.0, 1.0 + TOLERANCE / 2.0));
        assert!(!approx_eq(1.0, 1.0 + TOLERANCE * 2.0));
        assert!(Value::Real(0.1 + 0.2).equals(&Value::Real(0.3)));
    }

    #[test]
    fn lists_compare_elementwise_and_by_length() {
        let a = list(&[Value::Integer(2), Value::Integer(3)]);
        let b = list(&[Value::Real(2.0), Value::Integer(3)]);
        let c = list(&[Value::Integer(2)]);

        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(list(&[]).equals(&list(&[])));
    }

    #[test]
    fn singleton_unwrapping_in_both_orders() {
        let one = Value::Integer(1);
        let wrapped = list(&[one.clone()]);

        assert!(wrapped.equals(&one));
        assert!(one.equals(&wrapped));
        assert!(!list(&[]).equals(&Value::Integer(0)));
    }

    #[test]
    fn large_integers_widen_to_the_nearest_real() {
        let big = Value::Integer(9_007_199_254_740_993);
        assert_eq!(big.as_real("sqrt").unwrap(), 9_007_199_254_740_992.0);
        assert_eq!(Value::Integer(i64::MIN).as_real("sin").unwrap(), -9_223_372_036_854_775_808.0);
        assert!(big.equals(&Value::Real(9_007_199_254_740_992.0)));
    }

    #[test]
    fn integer_equality_is_exact() {
        assert!(!Value::Integer(1).equals(&Value::Integer(2)));
        assert!(Value::Integer(7).equals(&Value::Integer(7)));
    }
}
