use crate::interpreter::{
    evaluator::{core::EvalResult, scope::FunctionScope},
    value::core::Value,
};

/// `if(condition, then, else)`.
///
/// Only the selected branch is evaluated, which is what makes recursive
/// definitions terminate.
pub fn if_then_else(scope: &FunctionScope<'_>) -> EvalResult<Value> {
    let branch = if scope.nth(0)?.is_truthy() { 1 } else { 2 };
    scope.nth(branch)
}
