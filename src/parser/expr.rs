use std::io::BufRead;

use crate::{
    ast::ast::{Exp, ExpSeq, Ident},
    errors::errors::ParserError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr<R: BufRead>(
    parser: &mut Parser<'_, '_, R>,
    bp: BindingPower,
) -> Result<Exp, ParserError> {
    // First parse NUD
    let token_kind = parser.current_token_kind()?;
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("an expression"));
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than bp, keep folding it into lhs
    while parser.binding_power(parser.current_token_kind()?) > bp {
        let token_kind = parser.current_token_kind()?;
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("an operator"));
        };
        let led_bp = parser.binding_power(token_kind);

        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Exp, ParserError> {
    match parser.current_token_kind()? {
        TokenKind::Num => Ok(Exp::IntLiteral(parser.advance()?.int_value()?)),
        TokenKind::Bool => Ok(Exp::BoolLiteral(parser.advance()?.bool_value()?)),
        TokenKind::Ident => {
            let token = parser.advance()?;
            Ok(Exp::Ident(Ident::new(token.value, token.span.start)))
        }
        _ => Err(parser.unexpected("a literal or identifier")),
    }
}

pub fn parse_binary_expr<R: BufRead>(
    parser: &mut Parser<'_, '_, R>,
    left: Exp,
    bp: BindingPower,
) -> Result<Exp, ParserError> {
    let operator = parser.advance()?;
    let right = parse_expr(parser, bp)?;

    let make: fn(Box<Exp>, Box<Exp>) -> Exp = match operator.kind {
        TokenKind::Plus => Exp::Add,
        TokenKind::Times => Exp::Mul,
        TokenKind::And => Exp::And,
        TokenKind::Eq => Exp::Eq,
        kind => unreachable!("{} is not registered as a binary operator", kind),
    };

    Ok(Exp::binary(make, left, right))
}

/// `head :: tail`. The right operand is parsed below `::`'s own binding
/// power so that chains group to the right.
pub fn parse_list_prefix_expr<R: BufRead>(
    parser: &mut Parser<'_, '_, R>,
    left: Exp,
    _bp: BindingPower,
) -> Result<Exp, ParserError> {
    parser.expect(TokenKind::Prefix)?;
    let right = parse_expr(parser, BindingPower::Default)?;

    Ok(Exp::binary(Exp::Prefix, left, right))
}

pub fn parse_unary_expr<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Exp, ParserError> {
    let operator = parser.advance()?;
    let operand = Box::new(parse_expr(parser, BindingPower::Unary)?);

    match operator.kind {
        TokenKind::Minus => Ok(Exp::Sign(operand)),
        TokenKind::Not => Ok(Exp::Not(operand)),
        kind => unreachable!("{} is not registered as a unary operator", kind),
    }
}

pub fn parse_grouping_expr<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Exp, ParserError> {
    parser.expect(TokenKind::OpenPar)?;
    let exp = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::ClosePar)?;

    Ok(exp)
}

pub fn parse_list_expr<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Exp, ParserError> {
    parser.expect(TokenKind::OpenList)?;
    let exps = parse_exp_seq(parser)?;
    parser.expect(TokenKind::CloseList)?;

    Ok(Exp::ListLiteral(exps))
}

/// One or more comma separated expressions.
pub fn parse_exp_seq<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<ExpSeq, ParserError> {
    let first = Box::new(parse_expr(parser, BindingPower::Default)?);

    if !parser.at(TokenKind::ExpSep)? {
        return Ok(ExpSeq::Single(first));
    }
    parser.advance()?;

    Ok(ExpSeq::More(first, Box::new(parse_exp_seq(parser)?)))
}
