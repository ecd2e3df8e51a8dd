use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the lowest precedence level, addition and subtraction.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.climb_left(Self::parse_term, &[BinaryOperator::Add, BinaryOperator::Sub])
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        self.climb_left(Self::parse_factor, &[BinaryOperator::Mul, BinaryOperator::Div])
    }

    /// Parses one left-associative precedence level.
    ///
    /// Parses an operand with `operand`, then, as long as the current token is
    /// one of `operators`, consumes it, parses the next operand and folds both
    /// into a new [`Expr::BinaryOp`]. Folding as we go makes `a - b - c`
    /// parse as `(a - b) - c`.
    ///
    /// # Parameters
    /// - `operand`: Parser for the next tighter precedence level.
    /// - `operators`: Operators accepted at this level.
    ///
    /// # Returns
    /// The folded expression tree.
    fn climb_left(&mut self,
                  operand: fn(&mut Self) -> ParseResult<Expr>,
                  operators: &[BinaryOperator])
                  -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = token_to_binary_operator(&self.peek().kind)
              && operators.contains(&op)
        {
            let op_span = self.advance().span;
            let right = operand(self)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    op_span,
                                    right: Box::new(right) };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use waju::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
