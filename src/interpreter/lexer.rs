use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal magnitudes, such as `42`.
    ///
    /// The sign is folded in by the parser, so the magnitude of `i64::MIN`
    /// must still lex.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `int`
    #[token("int")]
    IntType,
    /// `bool`
    #[token("bool")]
    BoolType,
    /// `unit`
    #[token("unit")]
    UnitType,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `until`
    #[token("until")]
    Until,
    /// `print`
    #[token("print")]
    Print,
    /// `space`
    #[token("space")]
    Space,
    /// `newline`
    #[token("newline")]
    NewLine,
    /// `skip`
    #[token("skip")]
    Skip,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    LineBreak,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into `(Token, line)` pairs.
///
/// # Errors
/// Returns `LiteralTooLarge` for an integer literal whose magnitude does not
/// fit in a `u64`, and `UnexpectedToken` for any other unrecognized input.
///
/// # Example
/// ```
/// use simplang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x := 1;\nprint x").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[1], (Token::Assign, 1));
/// assert_eq!(tokens[4], (Token::Print, 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed magnitude if successful.
/// - `None`: If the literal overflows a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
