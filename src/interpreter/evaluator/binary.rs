/// Operator dispatch and left-spine evaluation of binary expressions.
pub mod core;

/// Addition, subtraction, multiplication and division.
pub mod scalar;

/// Exponentiation.
pub mod power;
