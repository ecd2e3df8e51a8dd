use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::core::Number},
};

impl Context {
    /// Evaluates a prefix sign on a number.
    ///
    /// - `Negate` multiplies by -1. Negating `i64::MIN` promotes to real.
    /// - `Plus` returns the number unchanged.
    ///
    /// # Example
    /// ```
    /// use waju::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Number},
    /// };
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, Number::Integer(5)), Number::Integer(-5));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, Number::Real(1.5)), Number::Real(1.5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Number) -> Number {
        match (op, value) {
            (UnaryOperator::Plus, _) => value,
            (UnaryOperator::Negate, Number::Integer(n)) => {
                n.checked_neg()
                 .map_or_else(|| Number::Real(-value.as_real()), Number::Integer)
            },
            (UnaryOperator::Negate, Number::Real(r)) => Number::Real(-r),
        }
    }
}
