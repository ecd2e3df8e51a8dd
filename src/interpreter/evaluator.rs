/// Binary operator evaluation logic.
///
/// Evaluates `+`, `-`, `*`, `/` and `^`, including integer-to-real promotion
/// and the division by zero check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context chain, the dispatch over expression kinds
/// and traceback construction.
pub mod core;
