/// The evaluator module executes the syntax tree and computes results.
///
/// The evaluator walks the tree recursively, evaluating expressions directly
/// without any intermediate representation. It owns the function registry,
/// the stack of call frames and the output sink for the duration of a run.
///
/// # Responsibilities
/// - Dispatches over every expression kind.
/// - Manages call frames, pushing one per call and popping it on every exit
///   path.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens
/// (keywords, identifiers, integer literals, operators, delimiters), each
/// paired with its source line.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`crate::ast::Program`]. It validates syntax only; no type checking is
/// performed.
pub mod parser;
/// The value module defines the runtime value type.
///
/// Every value is a 64-bit signed integer; booleans are represented as `0`
/// and `1`. The module also holds the conversion of external argument tokens.
pub mod value;
