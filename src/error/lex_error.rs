use crate::position::Span;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A character that does not start any token.
    ///
    /// Also raised for a second decimal point inside one number literal, in
    /// which case `ch` is `'.'` and the span covers that second point.
    #[error("Illegal Character: '{ch}'")]
    IllegalCharacter {
        /// The offending character.
        ch:   char,
        /// Where the character sits in the source.
        span: Span,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Literal Too Large: {literal} does not fit in a 64-bit integer")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The literal's span.
        span:    Span,
    },
}

impl LexError {
    /// The source range of the offending text.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::IllegalCharacter { span, .. } | Self::LiteralTooLarge { span, .. } => span,
        }
    }

    /// Short name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::IllegalCharacter { .. } => "Illegal Character",
            Self::LiteralTooLarge { .. } => "Literal Too Large",
        }
    }
}
