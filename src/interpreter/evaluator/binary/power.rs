use crate::{
    interpreter::{evaluator::core::Context, value::core::Number},
    util::num::i64_to_u32_exponent,
};

impl Context {
    /// Evaluates an exponentiation.
    ///
    /// Integer bases with non-negative integer exponents use checked integer
    /// arithmetic. Negative exponents, real operands and integer results that
    /// would overflow are computed with `powf`. Exponentiation has no failure
    /// cases; out-of-domain inputs yield infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use waju::interpreter::{evaluator::core::Context, value::core::Number};
    ///
    /// assert_eq!(Context::eval_pow(Number::Integer(2), Number::Integer(10)), Number::Integer(1024));
    /// assert_eq!(Context::eval_pow(Number::Integer(2), Number::Integer(-2)), Number::Real(0.25));
    /// ```
    #[must_use]
    pub fn eval_pow(base: Number, exponent: Number) -> Number {
        let real = || Number::Real(base.as_real().powf(exponent.as_real()));

        match (base, exponent) {
            (Number::Integer(b), Number::Integer(e)) => i64_to_u32_exponent(e).and_then(|e| b.checked_pow(e))
                                                                                .map_or_else(real, Number::Integer),
            _ => real(),
        }
    }
}
