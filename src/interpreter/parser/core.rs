use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            declaration::parse_declaration,
            primary::parse_primary,
            utils::expect,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program from a token list.
///
/// Grammar: `program := declaration+`
///
/// # Errors
/// Returns `EmptyProgram` when there are no tokens at all, and propagates any
/// error from declaration parsing. A premature end of input is reported on
/// the line of the last token.
///
/// # Example
/// ```
/// use simplang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("int main() { 42 }").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.declarations.len(), 1);
/// assert_eq!(program.declarations[0].name(), "main");
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut declarations = Vec::new();
    let last_line = tokens.last().map_or(1, |(_, line)| *line);

    while iter.peek().is_some() {
        let declaration = parse_declaration(&mut iter).map_err(|e| e.with_end_line(last_line))?;
        declarations.push(declaration);
    }

    if declarations.is_empty() {
        return Err(ParseError::EmptyProgram);
    }

    Ok(Program { declarations })
}

/// Parses a full expression.
///
/// Every binary operation is parenthesized, so an expression is always a
/// single primary form.
///
/// Grammar: `expression := primary`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_primary(tokens)
}

/// Parses an `if` expression. Both branches are mandatory.
///
/// Syntax:
/// ```text
///     if <condition> then { ... } else { ... }
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, "'then' after if condition")?;
    let then_branch = parse_block(tokens)?;
    expect(tokens, &Token::Else, "'else' after then branch")?;
    let else_branch = parse_block(tokens)?;

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch,
                  else_branch })
}

/// Parses a `while` loop.
///
/// Syntax: `while <condition> do { ... }`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `while` keyword.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Do, "'do' after while condition")?;
    let body = parse_block(tokens)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body })
}

/// Parses a `repeat` loop.
///
/// Syntax: `repeat { ... } until <condition>`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `repeat` keyword.
pub fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let body = parse_block(tokens)?;
    expect(tokens, &Token::Until, "'until' after repeat body")?;
    let condition = parse_expression(tokens)?;

    Ok(Expr::Repeat { body,
                      condition: Box::new(condition) })
}
