//! # waju
//!
//! waju is a small arithmetic expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates integer and floating-point expressions
//! built from `+`, `-`, `*`, `/`, `^` and parentheses, and reports every
//! failure with its exact source position and a caret diagram.

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

use tracing::debug;

use crate::{
    interpreter::{evaluator::core::Context, lexer::tokenize_source, parser::parse_with_depth},
    position::Source,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary expression nodes.
/// - Keeps operator spans so composite nodes can report the text they cover.
pub mod ast;
/// Settings and defaults for a run of the pipeline.
pub mod config;
/// Caret diagrams pointing at a range of source text.
pub mod diagnostic;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running an
/// expression. Every error carries the span it points at, and runtime errors
/// additionally carry a traceback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders any error as a uniform, human-readable report.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source files, positions and spans.
pub mod position;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32` and `f64` without silent data loss.
pub mod util;

pub use crate::{
    config::Options,
    error::Error,
    interpreter::{lexer::tokenize, parser::parse, value::core::NumberValue},
};

/// Runs `text` through the whole pipeline with default [`Options`].
///
/// `source_name` is used in every position and diagnostic, e.g. `<stdin>` or
/// a file path.
///
/// # Errors
/// The first lexical, syntax or runtime error encountered. Later stages are
/// not run once an earlier one fails.
///
/// # Example
/// ```
/// let value = waju::run("<stdin>", "1 + 2 * 3").unwrap();
/// assert_eq!(value.to_string(), "7");
///
/// let err = waju::run("<stdin>", "1 / 0").unwrap_err();
/// assert_eq!(err.kind(), "Runtime Error");
/// ```
pub fn run(source_name: &str, text: &str) -> Result<NumberValue, Error> {
    run_with_options(&Options::default(), source_name, text)
}

/// Runs `text` through the whole pipeline using `options`.
///
/// # Errors
/// See [`run`].
pub fn run_with_options(options: &Options,
                        source_name: &str,
                        text: &str)
                        -> Result<NumberValue, Error> {
    let source = Source::new(source_name, text);

    let tokens = tokenize_source(&source)?;
    debug!(target: "waju", source = source_name, tokens = tokens.len(), "tokenized");

    let expr = parse_with_depth(&tokens, options.max_depth)?;
    let span = expr.span();
    debug!(target: "waju", source = source_name, expr = span.slice(), "parsed");

    let value = Context::new(options.context_name.as_str()).eval(&expr)?;
    debug!(target: "waju", source = source_name, result = %value, "evaluated");

    Ok(value)
}
