use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, NumberValue},
    },
    position::Span,
};

impl Context {
    /// Evaluates a binary expression.
    ///
    /// The chain of left operands is walked iteratively, so long
    /// left-associative chains such as `1 + 1 + ... + 1` do not recurse once
    /// per operator. Each operation evaluates its left operand, then its right
    /// operand, then applies the operator; the first error aborts the walk.
    /// Every node on the spine starts where the leftmost operand starts, so
    /// that position is looked up once.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(self: &Rc<Self>,
                                                            expr: &Expr)
                                                            -> EvalResult<NumberValue> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let Expr::BinaryOp { left, op, right, .. } = leftmost {
            spine.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let start = leftmost.start();
        let mut acc = self.eval(leftmost)?;
        for (op, right) in spine.into_iter().rev() {
            let node_span = Span::new(start.clone(), right.end().clone());
            let right = self.eval(right)?;
            let number = self.eval_binary(op, &acc, &right, &node_span)?;
            acc = self.finish(number, node_span);
        }
        Ok(acc)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// `+`, `-`, `*` and `/` go through [`Context::eval_scalar_op`], `^`
    /// through [`Context::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Span of the whole operation, used when an operand carries no
    ///   span of its own.
    ///
    /// # Errors
    /// `DivisionByZero` for `/` with a zero right operand.
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
    /// let span = tokenize("<stdin>", "3 + 4").unwrap()[1].span.clone();
    /// let context = Context::new("<program>");
    /// let left = NumberValue::new(Number::Integer(3));
    /// let right = NumberValue::new(Number::Integer(4));
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right, &span);
    /// assert_eq!(result.unwrap(), Number::Integer(7));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &NumberValue,
                       right: &NumberValue,
                       span: &Span)
                       -> EvalResult<Number> {
        match op {
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
                self.eval_scalar_op(op, left, right, span)
            },
            BinaryOperator::Pow => Ok(Self::eval_pow(left.number, right.number)),
        }
    }
}
