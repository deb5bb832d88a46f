use std::io::BufRead;

use crate::{
    ast::ast::{Ident, Stmt, StmtSeq},
    errors::errors::ParserError,
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

fn ident_from(token: Token) -> Ident {
    Ident::new(token.value, token.span.start)
}

pub fn parse_stmt<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Stmt, ParserError> {
    let token_kind = parser.current_token_kind()?;
    let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("a statement"));
    };

    handler(parser)
}

/// Statements separated by `;`. A trailing `;` before the end of the
/// enclosing block or program is allowed.
pub fn parse_stmt_seq<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<StmtSeq, ParserError> {
    let first = Box::new(parse_stmt(parser)?);

    if !parser.at(TokenKind::StmtSep)? {
        return Ok(StmtSeq::Single(first));
    }
    parser.advance()?;

    if parser.at(TokenKind::EOF)? || parser.at(TokenKind::CloseBlock)? {
        return Ok(StmtSeq::Single(first));
    }

    Ok(StmtSeq::More(first, Box::new(parse_stmt_seq(parser)?)))
}

pub fn parse_var_decl_stmt<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Stmt, ParserError> {
    parser.expect(TokenKind::Var)?;
    let ident = ident_from(parser.expect(TokenKind::Ident)?);
    parser.expect(TokenKind::Assign)?;
    let exp = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Var(ident, exp))
}

pub fn parse_assignment_stmt<R: BufRead>(
    parser: &mut Parser<'_, '_, R>,
) -> Result<Stmt, ParserError> {
    let ident = ident_from(parser.expect(TokenKind::Ident)?);
    parser.expect(TokenKind::Assign)?;
    let exp = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assign(ident, exp))
}

pub fn parse_print_stmt<R: BufRead>(parser: &mut Parser<'_, '_, R>) -> Result<Stmt, ParserError> {
    parser.expect(TokenKind::Print)?;

    Ok(Stmt::Print(parse_expr(parser, BindingPower::Default)?))
}

pub fn parse_for_each_stmt<R: BufRead>(
    parser: &mut Parser<'_, '_, R>,
) -> Result<Stmt, ParserError> {
    parser.expect(TokenKind::For)?;
    let ident = ident_from(parser.expect(TokenKind::Ident)?);
    parser.expect(TokenKind::In)?;
    let exp = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::OpenBlock)?;
    let block = parse_stmt_seq(parser)?;
    parser.expect(TokenKind::CloseBlock)?;

    Ok(Stmt::ForEach(ident, exp, block))
}
