/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree produced by the parser and computes a
/// number for it, or reports the first runtime error it runs into together
/// with a traceback of the active evaluation contexts.
///
/// # Responsibilities
/// - Evaluates literals, prefix signs and binary arithmetic.
/// - Promotes integers to reals where exact integer arithmetic is not
///   possible.
/// - Reports division by zero at the offending divisor.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// tagged with the span of text it came from. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles integer and floating-point literals and operators.
/// - Reports illegal characters and malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and builds an
/// expression tree that encodes operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting the first error with its position.
/// - Guards against nesting deep enough to exhaust the stack.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the integer-or-real `Number` type.
/// - Attaches source spans and evaluation contexts to computed numbers.
pub mod value;
