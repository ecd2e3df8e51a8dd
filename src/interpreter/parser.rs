/// Parser state and entry points.
///
/// Holds the token cursor, the nesting guard and the shared helpers for
/// inspecting and consuming tokens.
pub mod core;

/// Prefix signs, exponentiation and atoms.
///
/// Implements the levels of the grammar that bind tighter than `*` and `/`.
pub mod unary;

/// Left-associative binary levels.
///
/// Implements `+`/`-` and `*`/`/` on top of one generic precedence-climbing
/// loop.
pub mod binary;

pub use self::core::{ParseResult, Parser, parse, parse_with_depth};
