//! # simplang
//!
//! simplang is a tree-walking interpreter for SimpleLang, a small imperative
//! language with integer and boolean values, first-order functions, loops and
//! two print primitives. Programs are evaluated directly over their syntax
//! tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            print::PrintHandler,
        },
        lexer::tokenize,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the program, declaration, body and expression types
/// that represent source code as a tree. The tree is built by the parser and
/// only ever read by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to parse errors.
/// - Joins both kinds into [`error::Error`] for callers that do both steps.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value model
/// to provide a complete runtime for SimpleLang programs.
pub mod interpreter;

/// Parses source text into a program.
///
/// # Example
/// ```
/// let program = simplang::parse_program("int main() { skip }").unwrap();
/// assert_eq!(program.declarations[0].name(), "main");
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    interpreter::parser::core::parse_program(&tokens)
}

/// Runs `program`, printing to standard output.
///
/// `args` are the raw tokens bound to `main`'s parameters.
///
/// # Returns
/// The value of `main`'s body, or `None` if it yields no value.
pub fn run<S: AsRef<str>>(program: &Program, args: &[S]) -> EvalResult<Option<Value>> {
    Context::new(program).run(args)
}

/// Parses and runs `source`, printing to standard output.
///
/// # Example
/// ```
/// use simplang::get_result;
///
/// let source = "int main(int x) { (x * 2) }";
/// assert_eq!(get_result(source, &["21"]).unwrap(), Some(42));
///
/// // 'y' is not bound in main's frame.
/// assert!(get_result("int main() { y }", &[] as &[&str]).is_err());
/// ```
pub fn get_result<S: AsRef<str>>(source: &str, args: &[S]) -> Result<Option<Value>, Error> {
    let program = parse_program(source)?;
    Ok(run(&program, args)?)
}

/// Parses and runs `source`, capturing everything it prints.
///
/// # Returns
/// The value of `main` together with the printed text.
///
/// # Example
/// ```
/// use simplang::get_output;
///
/// let source = "int main() { print 1; space; print 2; newline; 3 }";
/// let (result, output) = get_output(source, &[] as &[&str]).unwrap();
///
/// assert_eq!(result, Some(3));
/// assert_eq!(output, "1 2\n");
/// ```
pub fn get_output<S: AsRef<str>>(source: &str,
                                 args: &[S])
                                 -> Result<(Option<Value>, String), Error> {
    let program = parse_program(source)?;
    let mut context = Context::with_output(&program, PrintHandler::buffer());
    let result = context.run(args)?;

    match context.into_output() {
        PrintHandler::Buffer(text) => Ok((result, text)),
        PrintHandler::Stdout => Ok((result, String::new())),
    }
}
