use std::{fmt, rc::Rc};

use logos::Logos;
use tracing::trace;

use crate::{
    error::LexError,
    position::{Position, Source, Span},
};

/// The kind of a lexical token, together with its literal payload.
///
/// The variants carrying `#[token]`/`#[regex]` attributes are recognised by
/// the generated lexer, which skips spaces, tabs, line breaks and feeds
/// between them. [`TokenKind::Eof`] is never matched; [`tokenize`]
/// appends it after the last real token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Floating-point literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"[0-9]+\.[0-9]*(\.[0-9]*)+", reject_extra_decimal_point)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "float {r:?}"),
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Failure reported by the generated lexer for the current slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// The slice starts with a character no token begins with.
    #[default]
    UnrecognisedCharacter,
    /// A number literal holds a second `.` at `offset` bytes into the slice.
    ExtraDecimalPoint {
        /// Byte offset of the second decimal point within the literal.
        offset: usize,
    },
    /// An integer literal overflows `i64`.
    IntegerTooLarge,
}

/// A token with the span of source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was read.
    pub kind: TokenKind,
    /// Where it was read from.
    pub span: Span,
}

impl Token {
    /// Creates a token covering `span`.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes `text`, naming the source `source_name` in every position.
///
/// The returned sequence always ends with a single [`TokenKind::Eof`] token
/// positioned at the end of the text. Lexing is all-or-nothing: the first
/// illegal character aborts the whole call.
///
/// # Errors
/// - [`LexError::IllegalCharacter`] for a character that starts no token, or
///   for a second decimal point inside one number literal.
/// - [`LexError::LiteralTooLarge`] for an integer literal that overflows
///   `i64`.
///
/// # Example
/// ```
/// use waju::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("<stdin>", "2 * 3.5").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Integer(2), TokenKind::Star, TokenKind::Real(3.5), TokenKind::Eof]);
/// ```
pub fn tokenize(source_name: &str, text: &str) -> Result<Vec<Token>, LexError> {
    tokenize_source(&Source::new(source_name, text))
}

/// Tokenizes an already shared [`Source`].
///
/// Every position in the returned tokens points back into `source` without
/// copying its text.
///
/// # Errors
/// See [`tokenize`].
pub fn tokenize_source(source: &Rc<Source>) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer(&source.text);
    let mut cursor = Position::start(Rc::clone(source));
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        advance_to(&mut cursor, range.start);
        let start = cursor.clone();

        match result {
            Ok(kind) => {
                advance_to(&mut cursor, range.end);
                trace!(target: "waju::lexer", %kind, index = start.index, "token");
                tokens.push(Token::new(kind, Span::new(start, cursor.clone())));
            },
            Err(kind) => return Err(lex_error(kind, lexer.slice(), start)),
        }
    }

    advance_to(&mut cursor, source.text.len());
    tokens.push(Token::new(TokenKind::Eof, Span::new(cursor.clone(), cursor)));
    Ok(tokens)
}

/// Moves `cursor` forward, one character at a time, until it reaches the
/// byte offset `index`.
fn advance_to(cursor: &mut Position, index: usize) {
    let source = Rc::clone(&cursor.source);
    let pending = source.text.get(cursor.index..index).unwrap_or_default();
    for ch in pending.chars() {
        cursor.advance(ch);
    }
}

/// Turns a failure of the generated lexer into a positioned [`LexError`].
///
/// # Parameters
/// - `kind`: What went wrong.
/// - `slice`: The source text the generated lexer was looking at.
/// - `start`: Position of the first character of `slice`.
fn lex_error(kind: LexErrorKind, slice: &str, start: Position) -> LexError {
    match kind {
        LexErrorKind::UnrecognisedCharacter => {
            let ch = slice.chars().next().unwrap_or('\0');
            let end = start.advanced(ch);
            LexError::IllegalCharacter { ch,
                                         span: Span::new(start, end) }
        },
        LexErrorKind::ExtraDecimalPoint { offset } => {
            let mut dot = start;
            for ch in slice[..offset].chars() {
                dot.advance(ch);
            }
            let end = dot.advanced('.');
            LexError::IllegalCharacter { ch:   '.',
                                         span: Span::new(dot, end), }
        },
        LexErrorKind::IntegerTooLarge => {
            let mut end = start.clone();
            for ch in slice.chars() {
                end.advance(ch);
            }
            LexError::LiteralTooLarge { literal: slice.to_string(),
                                        span:    Span::new(start, end), }
        },
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_real(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Reports a number literal containing more than one decimal point.
///
/// # Errors
/// Always fails with [`LexErrorKind::ExtraDecimalPoint`], pointing at the
/// second `.` of the slice.
fn reject_extra_decimal_point(lex: &logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    let offset = lex.slice()
                    .match_indices('.')
                    .nth(1)
                    .map_or(0, |(offset, _)| offset);
    Err(LexErrorKind::ExtraDecimalPoint { offset })
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// [`LexErrorKind::IntegerTooLarge`] if the digits do not fit in `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerTooLarge)
}
