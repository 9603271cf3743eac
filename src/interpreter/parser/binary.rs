use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect},
        },
    },
};

/// Parses a parenthesized binary operation.
///
/// Grammar: `binary := "(" expression binop expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening parenthesis.
///
/// # Returns
/// An `Expr::BinaryOp` node.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;

    let op = match tokens.next() {
        Some((tok, line)) => token_to_binary_operator(tok).ok_or_else(|| {
                                 ParseError::UnexpectedToken {
                                     token: format!("Expected a binary operator, found {tok:?}"),
                                     line:  *line,
                                 }
                             })?,
        None => return Err(end_of_input()),
    };

    let right = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' after binary operation")?;

    Ok(Expr::BinaryOp { op,
                        left: Box::new(left),
                        right: Box::new(right) })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use simplang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Xor));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        Token::Caret => Some(BinaryOperator::Xor),
        _ => None,
    }
}
