use crate::position::Position;

/// Renders the source lines covered by `start..end` with a row of carets
/// under the covered columns.
///
/// Each affected line is printed followed by a marker line. On the first line
/// the carets start at `start.column`; on the last line they stop before
/// `end.column`. At least one caret is always printed, so an empty span (for
/// example the end of input) still points somewhere. Tabs are printed as a
/// single space to keep the carets aligned with the column count.
///
/// # Parameters
/// - `text`: The full source text.
/// - `start`: First position of the span.
/// - `end`: Position just past the span.
///
/// # Example
/// ```
/// use waju::{
///     diagnostic::render_caret,
///     position::{Position, Source},
/// };
///
/// let source = Source::new("<stdin>", "12 + 345");
/// let mut start = Position::start(source.clone());
/// for ch in "12 + ".chars() {
///     start.advance(ch);
/// }
/// let mut end = start.clone();
/// for ch in "345".chars() {
///     end.advance(ch);
/// }
///
/// assert_eq!(render_caret(&source.text, &start, &end), "12 + 345\n     ^^^");
/// ```
#[must_use]
pub fn render_caret(text: &str, start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last_line = end.line.max(start.line);
    let mut rendered = Vec::new();

    for line_no in start.line..=last_line {
        let Some(line) = lines.get(line_no) else {
            break;
        };
        // A span ending at column zero stops at the previous line break.
        if line_no > start.line && line_no == end.line && end.column == 0 {
            break;
        }

        let line = line.trim_end_matches('\r').replace('\t', " ");
        let from = if line_no == start.line { start.column } else { 0 };
        let to = if line_no == end.line {
            end.column
        } else {
            line.chars().count()
        };

        rendered.push(line);
        rendered.push(format!("{}{}",
                              " ".repeat(from),
                              "^".repeat(to.saturating_sub(from).max(1))));
    }

    rendered.join("\n")
}
