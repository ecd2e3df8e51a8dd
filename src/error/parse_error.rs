use crate::position::Span;

/// Represents all errors that can occur while parsing tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The token at `span` is not what the grammar allows there.
    #[error("Invalid Syntax: expected {expected}, found {found}")]
    InvalidSyntax {
        /// Description of what the parser was looking for, e.g. `')'`.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// Span of the token actually found.
        span:     Span,
    },
    /// Parentheses, signs or exponents are nested deeper than allowed.
    #[error("Nesting Too Deep: expression nests more than {limit} levels")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
        /// Span of the token at which the limit was exceeded.
        span:  Span,
    },
}

impl ParseError {
    /// The source range of the offending token.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::InvalidSyntax { span, .. } | Self::NestingTooDeep { span, .. } => span,
        }
    }

    /// Short name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSyntax { .. } => "Invalid Syntax",
            Self::NestingTooDeep { .. } => "Nesting Too Deep",
        }
    }
}
