/// The value module defines the runtime data types for evaluation.
///
/// Every evaluation produces an integer, a real, or a list of fully evaluated
/// values. This module also holds the structural equality used by `eq`, the
/// truthiness rule shared by `nand` and `if`, and the textual form printed
/// by the driver.
pub mod core;
