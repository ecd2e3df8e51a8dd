use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, NumberValue},
    },
    position::Span,
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Integer operands stay integers for `+`, `-` and `*` unless the result
    /// overflows, in which case the operation is redone in floating point.
    /// Mixed operands are promoted to real. `/` always divides in floating
    /// point, so `6 / 3` is `2.0`. The operator must be one of `Add`, `Sub`,
    /// `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Fallback span for errors when `right` carries none.
    ///
    /// # Errors
    /// `DivisionByZero` if `op` is `Div` and `right` is exactly zero. The
    /// error points at the divisor and carries this context's traceback.
    ///
    /// # Example
    /// ```
    /// use waju::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::core::{Number, NumberValue},
    ///     },
    ///     tokenize,
    /// };
    ///
    /// let span = tokenize("<stdin>", "7 / 2").unwrap()[1].span.clone();
    /// let context = Context::new("<program>");
    /// let x = NumberValue::new(Number::Integer(7));
    /// let y = NumberValue::new(Number::Integer(2));
    ///
    /// let result = context.eval_scalar_op(BinaryOperator::Div, &x, &y, &span).unwrap();
    /// assert_eq!(result, Number::Real(3.5));
    /// ```
    pub fn eval_scalar_op(&self,
                          op: BinaryOperator,
                          left: &NumberValue,
                          right: &NumberValue,
                          span: &Span)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Number::{Integer, Real};

        if op == Div {
            if right.number.is_zero() {
                let span = right.span.clone().unwrap_or_else(|| span.clone());
                let traceback = self.traceback(&span.start);
                return Err(RuntimeError::DivisionByZero { span, traceback });
            }
            return Ok(Real(left.number.as_real() / right.number.as_real()));
        }

        let real = |l: f64, r: f64| match op {
            Add => l + r,
            Sub => l - r,
            _ => l * r,
        };

        Ok(match (left.number, right.number) {
            (Integer(a), Integer(b)) => {
                let exact = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => None,
                };
                exact.map_or_else(|| Real(real(left.number.as_real(), right.number.as_real())),
                                  Integer)
            },
            (l, r) => Real(real(l.as_real(), r.as_real())),
        })
    }
}
