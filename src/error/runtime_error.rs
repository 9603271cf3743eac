use thiserror::Error;

use crate::ast::Type;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a function that is not declared.
    #[error("Runtime error: Unknown function '{0}'.")]
    UndefinedFunction(String),
    /// Read a variable that is not bound in the current frame.
    #[error("Runtime error: Unknown variable '{0}'.")]
    UndefinedVariable(String),
    /// The number of arguments does not match the number of parameters.
    #[error("Runtime error: Argument count mismatch: expected {expected}, got {got}.")]
    ArityMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        got:      usize,
    },
    /// Attempted division by zero.
    #[error("Runtime error: Division by zero.")]
    DivisionByZero,
    /// A local's initial value does not fit its declared type.
    #[error("Runtime error: Initial value of '{name}' does not have type {declared}.")]
    TypeMismatch {
        /// The variable being declared.
        name:     String,
        /// Its declared type.
        declared: Type,
    },
    /// An external argument is neither a boolean nor an integer.
    #[error("Runtime error: Invalid argument '{0}': expected an integer, 'true' or 'false'.")]
    InvalidArgument(String),
    /// The program does not declare `main`.
    #[error("Runtime error: No 'main' function declared.")]
    MissingEntryPoint,
    /// An expression that yields nothing was used where a value is required.
    #[error("Runtime error: Expected a value for {0}, but the expression yields none.")]
    MissingValue(&'static str),
    /// The tree or the evaluator state broke an internal contract.
    #[error("Internal error: {0}.")]
    InternalError(String),
}
