use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_binary,
            block::parse_block,
            core::{ParseResult, parse_expression, parse_if, parse_repeat, parse_while},
            utils::{end_of_input, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a primary expression.
///
/// Dispatches on the leading token:
///
/// Grammar (simplified):
/// ```text
///     primary := identifier ":=" expression
///              | "(" expression binop expression ")"
///              | identifier "(" arguments ")"
///              | block
///              | "if" ... | "while" ... | "repeat" ...
///              | "print" expression
///              | "space" | "newline" | "skip"
///              | "true" | "false"
///              | "-"? integer
///              | identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .copied()
                       .ok_or_else(end_of_input)?;

    match peeked {
        (Token::Identifier(_), _) => parse_identifier_form(tokens),
        (Token::LBrace, _) => Ok(Expr::Block(parse_block(tokens)?)),
        (Token::Integer(_) | Token::Minus, _) => parse_integer(tokens),
        (Token::Bool(b), _) => {
            tokens.next();
            Ok(Expr::Bool(*b))
        },
        (Token::LParen, _) => {
            tokens.next();
            parse_binary(tokens)
        },
        (Token::If, _) => {
            tokens.next();
            parse_if(tokens)
        },
        (Token::While, _) => {
            tokens.next();
            parse_while(tokens)
        },
        (Token::Repeat, _) => {
            tokens.next();
            parse_repeat(tokens)
        },
        (Token::Print, _) => {
            tokens.next();
            Ok(Expr::Print(Box::new(parse_expression(tokens)?)))
        },
        (Token::Space, _) => {
            tokens.next();
            Ok(Expr::Space)
        },
        (Token::NewLine, _) => {
            tokens.next();
            Ok(Expr::NewLine)
        },
        (Token::Skip, _) => {
            tokens.next();
            Ok(Expr::Skip)
        },
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses an expression starting with an identifier.
///
/// One token of lookahead after the identifier selects between an
/// assignment (`x := e`), a call (`f(a, b)`) and a plain variable reference.
fn parse_identifier_form<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;

    match tokens.peek() {
        Some((Token::Assign, _)) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Expr::Assign { name,
                              value: Box::new(value) })
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::Invoke { name, arguments })
        },
        _ => Ok(Expr::Identifier(name)),
    }
}

/// Parses an integer literal with an optional leading minus sign.
///
/// The lexer only produces magnitudes, so `-5` arrives as two tokens and is
/// folded here. The range check happens after folding, which admits
/// `-9223372036854775808` but not `9223372036854775808`.
fn parse_integer<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let negative = if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    match tokens.next() {
        Some((Token::Integer(magnitude), line)) => {
            let value = if negative {
                0_i64.checked_sub_unsigned(*magnitude)
            } else {
                i64::try_from(*magnitude).ok()
            };
            value.map(Expr::Integer)
                 .ok_or(ParseError::LiteralTooLarge { line: *line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected integer literal, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(end_of_input()),
    }
}
