use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, from_bool, is_nonzero},
    },
};

impl Context<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// - Comparisons yield `1` or `0`.
    /// - `+`, `-`, `*` wrap around on overflow.
    /// - `/` truncates toward zero and fails on a zero divisor.
    /// - `&`, `|`, `^` are logical: operands are true when non-zero and the
    ///   result is `1` or `0`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `/` with a zero right operand.
    ///
    /// # Example
    /// ```
    /// use simplang::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::And, 2, 1), Ok(1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 5, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Or, Sub, Xor,
        };

        let result = match op {
            Equal => from_bool(left == right),
            Less => from_bool(left < right),
            LessEqual => from_bool(left <= right),
            Greater => from_bool(left > right),
            GreaterEqual => from_bool(left >= right),
            Add => left.wrapping_add(right),
            Sub => left.wrapping_sub(right),
            Mul => left.wrapping_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.wrapping_div(right)
            },
            And => from_bool(is_nonzero(left) && is_nonzero(right)),
            Or => from_bool(is_nonzero(left) || is_nonzero(right)),
            Xor => from_bool(is_nonzero(left) ^ is_nonzero(right)),
        };

        Ok(result)
    }
}
