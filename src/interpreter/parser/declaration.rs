use std::iter::Peekable;

use crate::{
    ast::{Body, Declaration, LocalDeclaration, Type, TypedIdentifier},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_sequence,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a function declaration.
///
/// The first typed identifier is the function's name and return type; the
/// parenthesized list that follows holds its parameters.
///
/// Grammar:
/// ```text
///     declaration := typed_idfr "(" (typed_idfr ("," typed_idfr)*)? ")" body
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the return type.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Declaration>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let signature = parse_typed_identifier(tokens)?;

    expect(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_typed_identifier, &Token::RParen)?;
    let body = parse_body(tokens)?;

    Ok(Declaration { signature,
                     params,
                     body,
                     line })
}

/// Parses a type keyword followed by an identifier, e.g. `int n`.
///
/// Grammar: `typed_idfr := ("int" | "bool" | "unit") identifier`
pub fn parse_typed_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypedIdentifier>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let ty = match tokens.next() {
        Some((tok, line)) => {
            token_to_type(tok).ok_or_else(|| ParseError::UnexpectedToken {
                                  token: format!("Expected a type, found {tok:?}"),
                                  line:  *line,
                              })?
        },
        None => return Err(end_of_input()),
    };
    let name = parse_identifier(tokens)?;

    Ok(TypedIdentifier { ty, name })
}

/// Parses a function body: local declarations, then the tail sequence.
///
/// Grammar:
/// ```text
///     body := "{" (typed_idfr (":=" expression)? ";")* ene "}"
/// ```
///
/// A local declaration always starts with a type keyword, which no
/// expression can start with, so one token of lookahead separates the two
/// parts.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Body>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace, "'{' to open the function body")?;

    let mut locals = Vec::new();
    while let Some((tok, _)) = tokens.peek()
          && token_to_type(tok).is_some()
    {
        let var = parse_typed_identifier(tokens)?;
        let initializer = if let Some((Token::Assign, _)) = tokens.peek() {
            tokens.next();
            Some(parse_expression(tokens)?)
        } else {
            None
        };
        expect(tokens, &Token::Semicolon, "';' after local declaration")?;
        locals.push(LocalDeclaration { var, initializer });
    }

    let tail = parse_sequence(tokens)?;
    expect(tokens, &Token::RBrace, "'}' to close the function body")?;

    Ok(Body { locals, tail })
}

/// Maps a type keyword token to its [`Type`].
const fn token_to_type(token: &Token) -> Option<Type> {
    match token {
        Token::IntType => Some(Type::Int),
        Token::BoolType => Some(Type::Bool),
        Token::UnitType => Some(Type::Unit),
        _ => None,
    }
}
