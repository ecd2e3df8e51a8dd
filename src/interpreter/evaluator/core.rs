use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue},
    error::{Frame, RuntimeError, Traceback},
    interpreter::value::core::{Number, NumberValue},
    position::{Position, Span},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An evaluation context.
///
/// Contexts form a chain through `parent`, rooted at the top-level context of
/// one evaluation. The chain is only used to describe where a runtime error
/// happened; it holds no variables or other state.
///
/// # Usage
///
/// Create a fresh top-level context per evaluation with [`Context::new`] and
/// call [`Context::eval`] on it.
#[derive(Debug)]
pub struct Context {
    /// Name printed for this context in tracebacks.
    pub display_name: String,
    /// The enclosing context, if any.
    pub parent:       Option<Rc<Self>>,
    /// Where in the parent this context was entered.
    pub parent_entry: Option<Position>,
}

impl Context {
    /// Creates a top-level context with no parent.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { display_name: display_name.into(),
                       parent:       None,
                       parent_entry: None, })
    }

    /// Builds the traceback for an error raised at `at` inside this context.
    ///
    /// Walks from this context up to the root, recording for each link the
    /// position execution had reached in it, and returns the frames oldest
    /// first.
    #[must_use]
    pub fn traceback(&self, at: &Position) -> Traceback {
        let mut frames = Vec::new();
        let mut position = at.clone();
        let mut context = Some(self);

        while let Some(current) = context {
            frames.push(Frame { context:  current.display_name.clone(),
                                position: position.clone(), });
            if let Some(entry) = &current.parent_entry {
                position = entry.clone();
            }
            context = current.parent.as_deref();
        }

        frames.reverse();
        Traceback { frames }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The result is stamped with
    /// the span of `expr` and with this context.
    ///
    /// # Errors
    /// [`RuntimeError::DivisionByZero`] if any division in `expr` has a zero
    /// divisor. The first error aborts evaluation.
    ///
    /// # Example
    /// ```
    /// use waju::{interpreter::evaluator::core::Context, parse, tokenize};
    ///
    /// let expr = parse(&tokenize("<stdin>", "1 + 2 * 3").unwrap()).unwrap();
    /// let value = Context::new("<program>").eval(&expr).unwrap();
    ///
    /// assert_eq!(value.to_string(), "7");
    /// assert_eq!(value.span.unwrap().slice(), "1 + 2 * 3");
    /// ```
    pub fn eval(self: &Rc<Self>, expr: &Expr) -> EvalResult<NumberValue> {
        match expr {
            Expr::Literal { value, span } => Ok(self.eval_literal(*value, span)),
            Expr::UnaryOp { op, expr: operand, .. } => {
                let operand = self.eval(operand)?;
                Ok(self.finish(Self::eval_unary(*op, operand.number), expr.span()))
            },
            Expr::BinaryOp { .. } => self.eval_binary_op(expr),
        }
    }

    /// Evaluates a literal into a value carrying the literal's span.
    fn eval_literal(self: &Rc<Self>, value: LiteralValue, span: &Span) -> NumberValue {
        self.finish(Number::from(value), span.clone())
    }

    /// Wraps a freshly computed number as the value of the expression
    /// covering `span`.
    pub(in crate::interpreter::evaluator) fn finish(self: &Rc<Self>,
                                                    number: Number,
                                                    span: Span)
                                                    -> NumberValue {
        NumberValue::new(number).with_span(span)
                                .with_context(Rc::clone(self))
    }
}
