/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree of one line, dispatches applications through
/// the global function table, and hands each callee a scope over its
/// unevaluated arguments.
///
/// # Responsibilities
/// - Evaluates every node kind, including definitions, which register
///   themselves.
/// - Holds the global function table keyed by name and arity.
/// - Provides the built-in library.
/// - Reports runtime errors such as division by zero or undefined functions.
pub mod evaluator;
/// The lexer module tokenizes one line of source text.
///
/// The lexer reads the raw line and produces tokens for punctuation, the
/// definition arrow, argument references, numeric literals, the `list`
/// keyword and identifiers, followed by an end marker.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their byte offset.
/// - Reports lexical errors for unknown characters and malformed numbers.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive descent over the token stream of one line and
/// produces exactly one root node.
///
/// # Responsibilities
/// - Recognizes literals, lists, argument references, applications and
///   definitions.
/// - Validates the grammar, reporting errors with the offending column.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Values are integers, reals and lists of values. This module also holds
/// the language's tolerant equality and the textual rendering used by the
/// drivers.
pub mod value;
