/// Core expression parsing.
///
/// Holds the recursive-descent entry points: one line of tokens becomes
/// exactly one syntax tree root.
pub mod core;
/// Parser helpers.
///
/// Token expectations and comma separated argument lists shared by the
/// application and `list(...)` forms.
pub mod utils;
