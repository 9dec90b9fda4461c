/// Arithmetic built-ins: `add`, `sub`, `mul`, `div` and `pow`.
///
/// All share the numeric coercion rule of
/// [`apply_arithmetic`](crate::interpreter::evaluator::utils::apply_arithmetic).
pub mod arithmetic;
/// Comparison and logic built-ins: `eq`, `le` and `nand`.
pub mod comparison;
/// The `if` conditional.
///
/// Evaluates its condition and exactly one branch.
pub mod control;
/// List built-ins: `length`, `head`, `tail`, `map` and `filter`.
pub mod list;
/// Unary real functions: `sqrt`, `sin` and `cos`.
pub mod math;

pub mod core;
