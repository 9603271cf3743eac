use std::iter::Peekable;

use crate::{
    ast::{Block, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses a block delimited by braces.
///
/// Grammar: `block := "{" ene "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The block with all parsed expressions.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace, "'{'")?;
    let exprs = parse_sequence(tokens)?;
    expect(tokens, &Token::RBrace, "'}' or ';'")?;

    Ok(Block { exprs })
}

/// Parses a semicolon-separated sequence of expressions.
///
/// The sequence ends at the first token that is not a `;` following an
/// expression. An immediately encountered `}` produces an empty sequence.
///
/// Grammar: `ene := (expression (";" expression)*)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first expression.
pub fn parse_sequence<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut exprs = Vec::new();

    if let Some((Token::RBrace, _)) = tokens.peek() {
        return Ok(exprs);
    }

    exprs.push(parse_expression(tokens)?);
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        exprs.push(parse_expression(tokens)?);
    }

    Ok(exprs)
}
