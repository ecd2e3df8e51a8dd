use std::fmt;

use crate::position::{Position, Span};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// The right operand of `/` evaluated to exactly zero.
    #[error("Runtime Error: Division by zero")]
    DivisionByZero {
        /// Span of the divisor.
        span:      Span,
        /// Contexts active when the division was attempted.
        traceback: Traceback,
    },
}

impl RuntimeError {
    /// The source range the error points at.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::DivisionByZero { span, .. } => span,
        }
    }

    /// Short name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero { .. } => "Runtime Error",
        }
    }

    /// The contexts that were active when the error was raised.
    #[must_use]
    pub const fn traceback(&self) -> &Traceback {
        match self {
            Self::DivisionByZero { traceback, .. } => traceback,
        }
    }
}

/// One entry of a [`Traceback`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Display name of the context, e.g. `<program>`.
    pub context:  String,
    /// Where execution was inside that context.
    pub position: Position,
}

/// The chain of evaluation contexts active when a runtime error was raised,
/// oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Traceback {
    /// Frames from the outermost context to the innermost.
    pub frames: Vec<Frame>,
}

impl fmt::Display for Traceback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Traceback (most recent call last):")?;
        for frame in &self.frames {
            writeln!(f,
                     "  File {}, line {}, in {}",
                     frame.position.source_name(),
                     frame.position.line + 1,
                     frame.context)?;
        }
        Ok(())
    }
}
