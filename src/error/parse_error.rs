use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The line of the last token in the source.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The source contained no declarations at all.
    #[error("Program contains no declarations.")]
    EmptyProgram,
}

impl ParseError {
    /// Sets the line of an `UnexpectedEndOfInput`; other errors are returned
    /// unchanged.
    #[must_use]
    pub fn with_end_line(self, end: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { .. } => Self::UnexpectedEndOfInput { line: end },
            other => other,
        }
    }
}
