use std::{fmt, mem};

use crate::position::{Position, Span};

/// Represents a literal value in the language.
///
/// Literals are the numbers written directly in source code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children exclusively. Spans of composite nodes are not
/// stored but derived from their parts, see [`Expr::span`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Span of the literal's token.
        span:  Span,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// Span of the operator token.
        op_span: Span,
        /// The operand expression.
        expr:    Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:    Box<Self>,
        /// The operator.
        op:      BinaryOperator,
        /// Span of the operator token.
        op_span: Span,
        /// Right operand.
        right:   Box<Self>,
    },
}

impl Expr {
    /// Returns the source range covered by this expression.
    ///
    /// A literal covers its token. A unary operation runs from its operator to
    /// the end of its operand. A binary operation runs from the start of its
    /// left operand to the end of its right operand.
    ///
    /// # Example
    /// ```
    /// let tokens = waju::tokenize("<stdin>", "-1 + 2*3").unwrap();
    /// let expr = waju::parse(&tokens).unwrap();
    ///
    /// assert_eq!(expr.span().slice(), "-1 + 2*3");
    /// ```
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.start().clone(), self.end().clone())
    }

    /// First position covered by the expression.
    #[must_use]
    pub fn start(&self) -> &Position {
        let mut node = self;
        loop {
            match node {
                Self::Literal { span, .. } => return &span.start,
                Self::UnaryOp { op_span, .. } => return &op_span.start,
                Self::BinaryOp { left, .. } => node = left.as_ref(),
            }
        }
    }

    /// Position just past the expression.
    #[must_use]
    pub fn end(&self) -> &Position {
        let mut node = self;
        loop {
            match node {
                Self::Literal { span, .. } => return &span.end,
                Self::UnaryOp { expr, .. } => node = expr.as_ref(),
                Self::BinaryOp { right, .. } => node = right.as_ref(),
            }
        }
    }

    /// Moves every composite child of this node into `pending`, leaving a
    /// literal in its place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let children: [Option<&mut Box<Self>>; 2] = match self {
            Self::Literal { .. } => return,
            Self::UnaryOp { expr, .. } => [Some(expr), None],
            Self::BinaryOp { left, right, .. } => [Some(left), Some(right)],
        };

        for child in children.into_iter().flatten() {
            let span = match &**child {
                Self::Literal { .. } => continue,
                Self::UnaryOp { op_span, .. } | Self::BinaryOp { op_span, .. } => op_span.clone(),
            };
            let leaf = Self::Literal { value: LiteralValue::Integer(0),
                                       span };
            pending.push(mem::replace(&mut **child, leaf));
        }
    }
}

impl Drop for Expr {
    /// Tears the tree down with a worklist instead of recursing per node.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl fmt::Display for Expr {
    /// Prints the expression fully parenthesised, e.g. `(2 ^ (3 ^ 2))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value: LiteralValue::Integer(n),
                            .. } => write!(f, "{n}"),
            Self::Literal { value: LiteralValue::Real(r),
                            .. } => write!(f, "{r:?}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Identity (`+x`).
    Plus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{lexer::tokenize, parser::parse};

    #[test]
    fn dropping_a_long_flat_chain_does_not_overflow() {
        for op in ["+", "*", "-", "/"] {
            let text = vec!["1"; 100_000].join(op);
            let expr = parse(&tokenize("<test>", &text).unwrap()).unwrap();
            assert_eq!(expr.span().slice(), text);
            drop(expr);
        }
    }

    #[test]
    fn dropping_mixed_nodes() {
        let expr = parse(&tokenize("<test>", "-(1 + 2) * 3 ^ -4 - +5 / (6 - 7)").unwrap()).unwrap();
        let copy = expr.clone();
        drop(expr);
        assert_eq!(copy.to_string(), "(((-(1 + 2)) * (3 ^ (-4))) - ((+5) / (6 - 7)))");
    }
}
