/// Core evaluation logic.
///
/// Implements `evaluate` for every syntax tree node and defines the result
/// type shared by the whole evaluator.
pub mod core;

/// Scopes and dispatch.
///
/// The global function table keyed by name and arity, and the per-call scope
/// that hands out call-by-name arguments.
pub mod scope;

/// Utility functions for the evaluator.
///
/// Numeric coercion shared by the arithmetic built-ins.
pub mod utils;

/// Built-in functions.
///
/// The standard library installed into every global scope: arithmetic,
/// comparison, list primitives, the conditional and the higher-order stubs.
pub mod function;
