//! # listfunc
//!
//! listfunc is an interpreter for a tiny point-free functional language whose
//! only data types are integers, reals and lists.
//!
//! A program is a sequence of lines. Each line is either a function
//! definition such as `double <- add(#0, #0)`, which binds a name to an
//! expression over positional argument references, or an expression to
//! evaluate, such as `double(21)`. Functions are dispatched by name and
//! number of arguments, and arguments are passed by name: they are evaluated
//! every time the callee reads them, never before.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::scope::{FunctionScope, GlobalScope},
        parser::core::parse_line,
        value::core::Value,
    },
    session::{Line, Outcome, Session},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum, the shape of every expression and
/// definition, along with the function definitions stored in the global
/// scope. The parser builds these trees and the evaluator walks them.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while lexing, parsing
/// or evaluating a line, each carrying enough detail (column, function name,
/// arity) to produce a useful message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies failures into the broad kinds reported to users.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the execution of a single line.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value representation.
pub mod interpreter;
/// The line protocol shared by the interactive and file drivers.
///
/// Decides which lines are skipped, when to stop, and how results and
/// errors are written.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data
///   loss.
/// - Parse numeric literal text.
pub mod util;

/// Parses and evaluates one line against `globals`.
///
/// A definition is registered and reported as [`Outcome::Defined`]; any other
/// expression is evaluated at top level, where it has no arguments, and its
/// value is returned.
///
/// # Errors
/// Returns the lexical, syntactic or runtime error that stopped the line.
/// Definitions made before a runtime error (for example inside an argument)
/// remain registered.
///
/// # Examples
/// ```
/// use listfunc::{
///     evaluate_line,
///     interpreter::{evaluator::scope::GlobalScope, value::core::Value},
///     session::Outcome,
/// };
///
/// let globals = GlobalScope::with_default_library();
///
/// let defined = evaluate_line("double <- add(#0, #0)", &globals).unwrap();
/// assert!(matches!(defined, Outcome::Defined { arity: 1, .. }));
///
/// let value = evaluate_line("double(21)", &globals).unwrap();
/// assert_eq!(value, Outcome::Value(Value::Integer(42)));
/// ```
pub fn evaluate_line(source: &str, globals: &GlobalScope) -> Result<Outcome, Error> {
    let root = parse_line(source)?;

    if let Node::FunctionDefinition(definition) = &*root {
        let redefined = globals.add_function(definition.clone());
        return Ok(Outcome::Defined { name: definition.name.clone(),
                                     arity: definition.arity(),
                                     redefined });
    }

    let value = root.evaluate_value(&FunctionScope::root(globals))?;
    Ok(Outcome::Value(value))
}

/// Runs a multi-line script against a fresh scope and collects its values.
///
/// Lines are filtered exactly as the interactive driver filters them:
/// blank lines and `#` comments are skipped and `exit` stops the script.
/// Execution stops at the first failing line.
///
/// # Errors
/// Returns the first lexical, syntactic or runtime error encountered.
///
/// # Examples
/// ```
/// use listfunc::get_result;
///
/// let script = "# squares\nsq <- mul(#0, #0)\nsq(3)\nsq(1.5)";
/// let values = get_result(script).unwrap();
/// assert_eq!(values.len(), 2);
/// assert_eq!(values[1].to_string(), "2.250000");
///
/// // `f` is only defined for one argument.
/// assert!(get_result("f <- #0\nf(1, 2)").is_err());
/// ```
pub fn get_result(script: &str) -> Result<Vec<Value>, Error> {
    let session = Session::new();
    let mut values = Vec::new();

    for line in script.lines() {
        match Session::classify(line) {
            Line::Skip => {},
            Line::Exit => break,
            Line::Source(source) => {
                if let Outcome::Value(value) = session.evaluate(source)? {
                    values.push(value);
                }
            },
        }
    }

    Ok(values)
}
