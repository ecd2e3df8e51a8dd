use tracing::debug;

use crate::{
    ast::Expr,
    config::DEFAULT_MAX_DEPTH,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
    position::{Position, Source, Span},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into an expression tree.
///
/// The sequence is expected to end with [`TokenKind::Eof`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). The whole sequence must
/// form one expression; anything left over is an error.
///
/// Grammar, lowest precedence first:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := ("+" | "-") factor | power
///     power  := atom ("^" factor)?
///     atom   := INT | FLOAT | "(" expr ")"
/// ```
///
/// # Errors
/// - [`ParseError::InvalidSyntax`] at the first token the grammar does not
///   allow.
/// - [`ParseError::NestingTooDeep`] if the expression nests deeper than
///   [`DEFAULT_MAX_DEPTH`].
///
/// # Example
/// ```
/// use waju::{parse, tokenize};
///
/// let tokens = tokenize("<stdin>", "2^3^2").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_with_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], with an explicit nesting limit.
///
/// # Errors
/// See [`parse`].
pub fn parse_with_depth(tokens: &[Token], max_depth: usize) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens, max_depth);
    let expr = parser.parse_expression()?;

    let trailing = parser.peek();
    if trailing.kind != TokenKind::Eof {
        return Err(parser.unexpected("an operator or end of input"));
    }
    Ok(expr)
}

/// Cursor over a token sequence plus the state of the nesting guard.
pub struct Parser<'a> {
    tokens:    &'a [Token],
    index:     usize,
    eof:       Token,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// If `tokens` does not end with [`TokenKind::Eof`], reading past its end
    /// yields an end-of-input token placed after the last token.
    #[must_use]
    pub fn new(tokens: &'a [Token], max_depth: usize) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::new(TokenKind::Eof, Span::new(last.span.end.clone(), last.span.end.clone())),
            None => {
                let start = Position::start(Source::new("<unknown>", ""));
                Token::new(TokenKind::Eof, Span::new(start.clone(), start))
            },
        };

        Self { tokens,
               index: 0,
               eof,
               depth: 0,
               max_depth }
    }

    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.eof)
    }

    /// Consumes the current token and returns it.
    ///
    /// The end-of-input token is never consumed; once reached it is returned
    /// again on every call.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    /// Builds an `InvalidSyntax` error at the current token.
    ///
    /// # Parameters
    /// - `expected`: Description of what the grammar allows here.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        ParseError::InvalidSyntax { expected: expected.to_string(),
                                    found:    token.kind.to_string(),
                                    span:     token.span.clone(), }
    }

    /// Enters one level of nesting.
    ///
    /// # Errors
    /// [`ParseError::NestingTooDeep`] when the limit would be exceeded.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            let span = self.peek().span.clone();
            debug!(target: "waju::parser",
                   limit = self.max_depth,
                   index = span.start.index,
                   "nesting limit reached");
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    span });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, LiteralValue, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse_text(text: &str) -> ParseResult<Expr> {
        parse(&tokenize("<test>", text).unwrap())
    }

    fn shape(text: &str) -> String {
        parse_text(text).unwrap().to_string()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(shape("1+2*3"), "(1 + (2 * 3))");
        assert_eq!(shape("(1+2)*3"), "((1 + 2) * 3)");
    }

    #[test]
    fn same_level_operators_are_left_associative() {
        assert_eq!(shape("2-3-4"), "((2 - 3) - 4)");
        assert_eq!(shape("8/4/2"), "((8 / 4) / 2)");
        assert_eq!(shape("1-2+3"), "((1 - 2) + 3)");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(shape("2^3^2"), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn unary_sign_sits_between_power_and_product() {
        assert_eq!(shape("-2^2"), "(-(2 ^ 2))");
        assert_eq!(shape("2^-1"), "(2 ^ (-1))");
        assert_eq!(shape("-2*3"), "((-2) * 3)");
        assert_eq!(shape("--3"), "(-(-3))");
        assert_eq!(shape("+-3"), "(+(-3))");
    }

    #[test]
    fn literal_node_keeps_value_and_span() {
        let expr = parse_text("  4.5").unwrap();
        let Expr::Literal { value, span } = &expr else {
            panic!("expected a literal");
        };
        assert_eq!(*value, LiteralValue::Real(4.5));
        assert_eq!(span.start.index, 2);
        assert_eq!(span.end.index, 5);
    }

    #[test]
    fn composite_spans_cover_their_operands() {
        let expr = parse_text("1 + -2 * 3").unwrap();
        assert_eq!(expr.span().slice(), "1 + -2 * 3");

        let Expr::BinaryOp { op, right, .. } = &expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(*op, BinaryOperator::Add);
        assert_eq!(right.span().slice(), "-2 * 3");

        let Expr::BinaryOp { left: negated, .. } = &**right else {
            panic!("expected a binary operation");
        };
        assert!(matches!(**negated, Expr::UnaryOp { op: UnaryOperator::Negate, .. }));
        assert_eq!(negated.span().slice(), "-2");
    }

    #[test]
    fn unclosed_group_expects_right_paren_at_end_of_input() {
        let err = parse_text("(1+2").unwrap_err();
        let ParseError::InvalidSyntax { expected, found, span } = err else {
            panic!("expected invalid syntax");
        };
        assert_eq!(expected, "')'");
        assert_eq!(found, "end of input");
        assert_eq!(span.start.index, 4);
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse_text("1 2").unwrap_err();
        assert_eq!(err.span().start.index, 2);

        let err = parse_text("(1))").unwrap_err();
        assert_eq!(err.span().start.index, 3);
    }

    #[test]
    fn missing_operand_is_invalid_syntax() {
        for text in ["", "1+", "*2", "()", "2^"] {
            let err = parse_text(text).unwrap_err();
            assert!(matches!(err, ParseError::InvalidSyntax { .. }), "{text:?}: {err:?}");
        }
    }

    #[test]
    fn operator_in_atom_position_is_reported_at_that_operator() {
        let err = parse_text("1 + * 2").unwrap_err();
        let ParseError::InvalidSyntax { found, span, .. } = err else {
            panic!("expected invalid syntax");
        };
        assert_eq!(found, "'*'");
        assert_eq!(span.start.index, 4);
    }

    #[test]
    fn deep_nesting_is_an_error_not_a_crash() {
        let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse_text(&parens), Err(ParseError::NestingTooDeep { .. })));

        let signs = format!("{}1", "-".repeat(10_000));
        assert!(matches!(parse_text(&signs), Err(ParseError::NestingTooDeep { .. })));

        let powers = vec!["2"; 10_000].join("^");
        assert!(matches!(parse_text(&powers), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let tokens = tokenize("<test>", "((1))").unwrap();
        assert!(parse_with_depth(&tokens, 3).is_ok());
        let err = parse_with_depth(&tokens, 2).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { limit: 2, .. }));
    }

    #[test]
    fn long_flat_chains_do_not_count_as_nesting() {
        let sum = vec!["1"; 100_000].join("+");
        let expr = parse_text(&sum).unwrap();
        assert_eq!(expr.span().slice(), sum);
    }

    #[test]
    fn missing_eof_token_is_tolerated() {
        let mut tokens = tokenize("<test>", "1+2").unwrap();
        tokens.pop();
        assert_eq!(parse(&tokens).unwrap().to_string(), "(1 + 2)");
        assert!(parse(&[]).is_err());
    }
}
