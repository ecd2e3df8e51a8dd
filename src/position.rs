use std::{fmt, rc::Rc};

/// A named piece of source text.
///
/// One `Source` is created per run and shared, behind an [`Rc`], by every
/// [`Position`] derived from it. The text itself is never copied.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    /// Display name of the source, e.g. `<stdin>` or a file path.
    pub name: String,
    /// The complete source text.
    pub text: String,
}

impl Source {
    /// Creates a shared source from a name and its text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name: name.into(),
                       text: text.into(), })
    }
}

/// A location in a [`Source`].
///
/// `index` is a byte offset into the source text. `line` and `column` are
/// zero-based and only ever derived from the characters passed to
/// [`Position::advance`].
#[derive(Clone)]
pub struct Position {
    /// Byte offset into the source text.
    pub index:  usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column, counted in characters.
    pub column: usize,
    /// The source this position points into.
    pub source: Rc<Source>,
}

impl Position {
    /// Returns the position of the first character of `source`.
    ///
    /// # Example
    /// ```
    /// use waju::position::{Position, Source};
    ///
    /// let start = Position::start(Source::new("<stdin>", "1 + 2"));
    /// assert_eq!((start.index, start.line, start.column), (0, 0, 0));
    /// ```
    #[must_use]
    pub const fn start(source: Rc<Source>) -> Self {
        Self { index: 0,
               line: 0,
               column: 0,
               source }
    }

    /// Moves the position past `current`, the character it currently points
    /// at.
    ///
    /// A newline moves to column zero of the next line.
    ///
    /// # Example
    /// ```
    /// use waju::position::{Position, Source};
    ///
    /// let mut pos = Position::start(Source::new("<stdin>", "1\n2"));
    /// pos.advance('1');
    /// pos.advance('\n');
    /// assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub fn advance(&mut self, current: char) -> &mut Self {
        self.index += current.len_utf8();
        self.column += 1;

        if current == '\n' {
            self.line += 1;
            self.column = 0;
        }
        self
    }

    /// Returns a copy of this position advanced past `current`.
    #[must_use]
    pub fn advanced(&self, current: char) -> Self {
        let mut next = self.clone();
        next.advance(current);
        next
    }

    /// Name of the source this position belongs to.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    /// Full text of the source this position belongs to.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source.text
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
        && self.line == other.line
        && self.column == other.column
        && (Rc::ptr_eq(&self.source, &other.source) || self.source == other.source)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}@{}:{}#{}",
               self.source.name, self.line, self.column, self.index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "File {}, line {}, column {}",
               self.source.name,
               self.line + 1,
               self.column + 1)
    }
}

/// A half-open range of source text, from `start` up to but excluding `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the last covered character.
    pub end:   Position,
}

impl Span {
    /// Creates a span from two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The source text covered by this span.
    #[must_use]
    pub fn slice(&self) -> &str {
        self.start
            .source_text()
            .get(self.start.index..self.end.index)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_bytes_but_columns_in_chars() {
        let mut pos = Position::start(Source::new("t", "é1"));
        pos.advance('é');
        assert_eq!(pos.index, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn newline_resets_column() {
        let mut pos = Position::start(Source::new("t", "12\n3"));
        for ch in "12\n".chars() {
            pos.advance(ch);
        }
        assert_eq!((pos.index, pos.line, pos.column), (3, 1, 0));
    }

    #[test]
    fn positions_share_source_text() {
        let source = Source::new("t", "1+2");
        let a = Position::start(Rc::clone(&source));
        let b = a.advanced('1');
        assert!(Rc::ptr_eq(&a.source, &b.source));
        assert_eq!(Rc::strong_count(&source), 3);
    }

    #[test]
    fn span_slice() {
        let source = Source::new("t", "12+3");
        let start = Position::start(source);
        let two = start.advanced('1').advanced('2');
        let left = Span::new(start.clone(), two.clone());
        assert_eq!(left.slice(), "12");

        let plus_end = two.advanced('+');
        let right = Span::new(plus_end.clone(), plus_end.advanced('3'));
        assert_eq!(right.slice(), "3");
        assert_eq!(Span::new(left.start, right.end).slice(), "12+3");
    }

    #[test]
    fn display_is_one_based() {
        let pos = Position::start(Source::new("<stdin>", "1")).advanced('1');
        assert_eq!(pos.to_string(), "File <stdin>, line 1, column 2");
    }
}
