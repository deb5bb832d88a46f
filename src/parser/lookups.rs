use std::{collections::HashMap, io::BufRead};

use crate::{
    ast::ast::{Exp, Stmt},
    errors::errors::ParserError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Infix precedence, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Prefix,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
}

pub type StmtHandler<'t, 'a, R> = fn(&mut Parser<'t, 'a, R>) -> Result<Stmt, ParserError>;
pub type NUDHandler<'t, 'a, R> = fn(&mut Parser<'t, 'a, R>) -> Result<Exp, ParserError>;
pub type LEDHandler<'t, 'a, R> =
    fn(&mut Parser<'t, 'a, R>, Exp, BindingPower) -> Result<Exp, ParserError>;

pub fn create_token_lookups<R: BufRead>(parser: &mut Parser<'_, '_, R>) {
    // List construction, right associative
    parser.led(TokenKind::Prefix, BindingPower::Prefix, parse_list_prefix_expr);

    // Logical and relational
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Eq, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Times, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Num, parse_primary_expr);
    parser.nud(TokenKind::Bool, parse_primary_expr);
    parser.nud(TokenKind::Ident, parse_primary_expr);
    parser.nud(TokenKind::Minus, parse_unary_expr);
    parser.nud(TokenKind::Not, parse_unary_expr);
    parser.nud(TokenKind::OpenPar, parse_grouping_expr);
    parser.nud(TokenKind::OpenList, parse_list_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Ident, parse_assignment_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::For, parse_for_each_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<'t, 'a, R> = HashMap<TokenKind, StmtHandler<'t, 'a, R>>;
pub type NUDLookup<'t, 'a, R> = HashMap<TokenKind, NUDHandler<'t, 'a, R>>;
pub type LEDLookup<'t, 'a, R> = HashMap<TokenKind, LEDHandler<'t, 'a, R>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
