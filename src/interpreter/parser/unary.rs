use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a prefix sign or, failing that, an exponentiation.
    ///
    /// Signs recurse into this level, so `--3` is `-(-3)`. Each call counts as
    /// one level of nesting for the depth guard; every recursive path through
    /// the grammar passes through here.
    ///
    /// Grammar: `factor := ("+" | "-") factor | power`
    ///
    /// # Errors
    /// `NestingTooDeep` once the nesting limit is exceeded, plus anything the
    /// lower levels report.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        let result = self.parse_signed();
        self.leave();
        result
    }

    fn parse_signed(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.parse_power(),
        };

        let op_span = self.advance().span;
        let expr = self.parse_factor()?;
        Ok(Expr::UnaryOp { op,
                           op_span,
                           expr: Box::new(expr) })
    }

    /// Parses an atom optionally raised to a power.
    ///
    /// The exponent is parsed at the `factor` level rather than `power`, which
    /// makes `^` right-associative (`2^3^2` is `2^(3^2)`) and lets the
    /// exponent carry its own sign (`2^-1`).
    ///
    /// Grammar: `power := atom ("^" factor)?`
    pub fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_atom()?;

        if self.peek().kind != TokenKind::Caret {
            return Ok(base);
        }

        let op_span = self.advance().span;
        let exponent = self.parse_factor()?;
        Ok(Expr::BinaryOp { left: Box::new(base),
                            op: BinaryOperator::Pow,
                            op_span,
                            right: Box::new(exponent) })
    }

    /// Parses a number literal or a parenthesised expression.
    ///
    /// Grammar: `atom := INT | FLOAT | "(" expr ")"`
    ///
    /// # Errors
    /// - `InvalidSyntax` expecting `')'` if a group is not closed, positioned
    ///   at the token found instead.
    /// - `InvalidSyntax` if the current token cannot start an atom.
    pub fn parse_atom(&mut self) -> ParseResult<Expr> {
        let value = match self.peek().kind {
            TokenKind::Integer(n) => LiteralValue::Integer(n),
            TokenKind::Real(r) => LiteralValue::Real(r),
            TokenKind::LParen => return self.parse_group(),
            _ => return Err(self.unexpected("a number, '+', '-' or '('")),
        };

        let span = self.advance().span;
        Ok(Expr::Literal { value, span })
    }

    fn parse_group(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression()?;

        if self.peek().kind != TokenKind::RParen {
            return Err(self.unexpected("')'"));
        }
        self.advance();
        Ok(expr)
    }
}
