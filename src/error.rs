/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, premature end of input and literals that do not
/// fit the runtime integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Every one of
/// them is fatal to the current run and unwinds to the caller of
/// [`crate::run`].
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while turning source text into a result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source did not lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
