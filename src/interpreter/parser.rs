/// Core parsing entry points.
///
/// Contains the program and expression entry points and the control-flow
/// constructs (`if`, `while`, `repeat`).
pub mod core;

/// Primary expression parsing.
///
/// Dispatches on the leading token of an expression: literals, identifiers,
/// assignments, calls, blocks and the print primitives.
pub mod primary;

/// Binary operation parsing.
///
/// Binary operations are always parenthesized, `(lhs op rhs)`, so there is no
/// precedence climbing.
pub mod binary;

/// Block and expression-sequence parsing.
pub mod block;

/// Declaration parsing.
///
/// Parses function declarations, typed identifiers and function bodies with
/// their local declarations.
pub mod declaration;

/// Shared helpers for the parser.
pub mod utils;
