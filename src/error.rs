/// Lexical errors.
///
/// Raised while turning source text into tokens: characters the language does
/// not know, malformed number literals, and literals that do not fit the host
/// integer type.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree from tokens: unexpected tokens,
/// missing closing parentheses, trailing input and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation. Runtime errors carry a traceback of the
/// evaluation contexts that were active when they were raised.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{Frame, RuntimeError, Traceback};

use crate::{diagnostic::render_caret, position::Span};

/// Any diagnostic the pipeline can produce.
///
/// Every stage error converts into this type, so `?` lifts lexer, parser and
/// evaluator failures alike.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source range the diagnostic points at.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Lex(e) => e.span(),
            Self::Parse(e) => e.span(),
            Self::Runtime(e) => e.span(),
        }
    }

    /// Short name of the diagnostic kind, e.g. `Illegal Character`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.kind(),
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Renders the full report for this diagnostic.
    ///
    /// Every kind uses the same layout: an optional traceback (runtime errors
    /// only), the one-line summary, the location, and the offending source
    /// with carets under the span.
    ///
    /// # Example
    /// ```
    /// let err = waju::run("<stdin>", "1 + @").unwrap_err();
    /// assert_eq!(err.render(),
    ///            "Illegal Character: '@'\nFile <stdin>, line 1, column 5\n\n1 + @\n    ^");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let span = self.span();
        let mut out = String::new();

        if let Self::Runtime(e) = self {
            out.push_str(&e.traceback().to_string());
        }
        out.push_str(&format!("{self}\n{}\n\n", span.start));
        out.push_str(&render_caret(span.start.source_text(), &span.start, &span.end));
        out
    }
}
