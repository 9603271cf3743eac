use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// There is no separate boolean type at runtime: comparisons and logical
/// operators produce [`TRUE`] or [`FALSE`], and conditions test integers
/// directly.
pub type Value = i64;

/// The runtime representation of `true`.
pub const TRUE: Value = 1;
/// The runtime representation of `false`.
pub const FALSE: Value = 0;

/// Converts a boolean to its runtime representation.
///
/// # Example
/// ```
/// use simplang::interpreter::value::core::from_bool;
///
/// assert_eq!(from_bool(true), 1);
/// assert_eq!(from_bool(false), 0);
/// ```
#[must_use]
pub const fn from_bool(b: bool) -> Value {
    if b { TRUE } else { FALSE }
}

/// Tests a condition value for `if`, `while` and `repeat`.
///
/// Only strictly positive values are true; zero and every negative value are
/// false.
///
/// # Example
/// ```
/// use simplang::interpreter::value::core::is_truthy;
///
/// assert!(is_truthy(3));
/// assert!(!is_truthy(0));
/// assert!(!is_truthy(-1));
/// ```
#[must_use]
pub const fn is_truthy(value: Value) -> bool {
    value > 0
}

/// Tests an operand of the logical operators, where any non-zero value counts
/// as true.
#[must_use]
pub const fn is_nonzero(value: Value) -> bool {
    value != 0
}

/// Converts an external argument token to a value.
///
/// `"true"` and `"false"` map to `1` and `0`; anything else must be a decimal
/// integer with an optional sign.
///
/// # Errors
/// Returns `InvalidArgument` if the token is neither a boolean nor an integer
/// that fits in 64 bits.
///
/// # Example
/// ```
/// use simplang::{error::RuntimeError, interpreter::value::core::parse_argument};
///
/// assert_eq!(parse_argument("true"), Ok(1));
/// assert_eq!(parse_argument("-12"), Ok(-12));
/// assert_eq!(parse_argument("ten"),
///            Err(RuntimeError::InvalidArgument("ten".to_string())));
/// ```
pub fn parse_argument(token: &str) -> EvalResult<Value> {
    match token {
        "true" => Ok(TRUE),
        "false" => Ok(FALSE),
        _ => token.parse()
                  .map_err(|_| RuntimeError::InvalidArgument(token.to_string())),
    }
}
