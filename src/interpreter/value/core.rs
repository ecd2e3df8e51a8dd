use std::{fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    interpreter::evaluator::core::Context,
    position::Span,
    util::num::i64_to_f64,
};

/// A numeric runtime value.
///
/// Integers stay integers as long as the operations on them are exact;
/// everything else is promoted to `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl Number {
    /// Converts the number to `f64`.
    ///
    /// # Example
    /// ```
    /// use waju::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Whether the number is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl From<LiteralValue> for Number {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl fmt::Display for Number {
    /// Integers print plainly; reals always show a fractional part, so `6/3`
    /// prints as `2.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

/// The result of evaluating an expression.
///
/// Carries the number itself plus, once finalised by the evaluator, the span
/// of the expression that produced it and the context it was produced in.
#[derive(Debug, Clone)]
pub struct NumberValue {
    /// The computed number.
    pub number:  Number,
    /// Source range of the expression that produced the number.
    pub span:    Option<Span>,
    /// Context the number was produced in.
    pub context: Option<Rc<Context>>,
}

impl NumberValue {
    /// Creates a value with no position or context attached.
    #[must_use]
    pub const fn new(number: Number) -> Self {
        Self { number,
               span: None,
               context: None }
    }

    /// Attaches the source range of the producing expression.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attaches the context the value was produced in.
    #[must_use]
    pub fn with_context(mut self, context: Rc<Context>) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
