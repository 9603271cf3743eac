/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression dispatcher and the program
/// entry point.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the operator table over 64-bit integers, including the
/// division-by-zero check.
pub mod binary;

/// Control-flow evaluation.
///
/// Handles blocks, `if`, `while` and `repeat`.
pub mod control;

/// Function evaluation.
///
/// Handles calls to user-defined functions, frame construction, and body
/// evaluation with local declarations.
pub mod function;

/// The call frame stack.
///
/// One flat frame per active call; variable lookups only ever see the top
/// frame.
pub mod environment;

/// The table of declared functions, built once per run.
pub mod registry;

/// RAII guard that pops a call frame when dropped.
pub mod scope_guard;

/// Output handling for `print`, `space` and `newline`.
pub mod print;
