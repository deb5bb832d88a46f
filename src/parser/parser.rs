//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It pulls tokens from a `Tokenizer` on demand, one token of lookahead at a
//! time, and maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, io::BufRead};

use crate::{
    ast::ast::Prog,
    errors::errors::ParserError,
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt_seq,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'t, 'a, R> {
    /// Source of tokens; its current token is the parser's lookahead
    tokenizer: &'t mut Tokenizer<'a, R>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<'t, 'a, R>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'t, 'a, R>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'t, 'a, R>,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'t, 'a, R: BufRead> Parser<'t, 'a, R> {
    /// Creates a new Parser over `tokenizer`, loading its first token if the
    /// tokenizer has not been advanced yet.
    pub fn new(tokenizer: &'t mut Tokenizer<'a, R>) -> Result<Self, ParserError> {
        let mut parser = Parser {
            tokenizer,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        if parser.tokenizer.token().is_err() {
            parser.tokenizer.advance()?;
        }

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Result<&Token, ParserError> {
        Ok(self.tokenizer.token()?)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<TokenKind, ParserError> {
        Ok(self.tokenizer.token_kind()?)
    }

    /// Advances to the next token and returns the previous one.
    /// Once EOF is current, it stays current.
    pub fn advance(&mut self) -> Result<Token, ParserError> {
        let token = self.tokenizer.token()?.clone();
        if self.tokenizer.has_next() {
            self.tokenizer.advance()?;
        }
        Ok(token)
    }

    /// Consumes the current token if it has the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParserError> {
        if self.current_token_kind()? != expected_kind {
            return Err(self.unexpected(expected_kind.to_string()));
        }
        self.advance()
    }

    /// An error describing the current token as not what was `expected`.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParserError {
        match self.tokenizer.token() {
            Ok(token) => ParserError::UnexpectedToken {
                token: if token.kind == TokenKind::EOF {
                    String::from("EOF")
                } else {
                    token.value.clone()
                },
                expected: expected.into(),
                position: token.span.start,
            },
            Err(error) => error.into(),
        }
    }

    /// Checks whether the current token has the given kind.
    pub fn at(&self, kind: TokenKind) -> Result<bool, ParserError> {
        Ok(self.current_token_kind()? == kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<'t, 'a, R> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<'t, 'a, R> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<'t, 'a, R> {
        &self.led_lookup
    }

    /// The binding power of `kind` as an infix operator, `Default` if it is not one.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'t, 'a, R>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'t, 'a, R>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<'t, 'a, R>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a whole program from the tokenizer, up to and including EOF.
///
/// The tokenizer is left open; closing it is up to the caller.
pub fn parse<R: BufRead>(tokenizer: &mut Tokenizer<'_, R>) -> Result<Prog, ParserError> {
    let mut parser = Parser::new(tokenizer)?;
    let stmts = parse_stmt_seq(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(Prog(stmts))
}
